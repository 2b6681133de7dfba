use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_locations_table::Locations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Venues::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Venues::Address).string_len(120))
                    .col(ColumnDef::new(Venues::Phone).string_len(120).unique_key())
                    .col(ColumnDef::new(Venues::Genres).json().not_null())
                    .col(ColumnDef::new(Venues::Website).string().unique_key())
                    .col(ColumnDef::new(Venues::SeekingTalent).string())
                    .col(ColumnDef::new(Venues::SeekingDescription).string())
                    .col(ColumnDef::new(Venues::ImageLink).string_len(500))
                    .col(
                        ColumnDef::new(Venues::FacebookLink)
                            .string_len(120)
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Venues::LocationId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venues_location_id")
                            .from(Venues::Table, Venues::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_venues_location_id")
                    .table(Venues::Table)
                    .col(Venues::LocationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venues {
    Table,
    Id,
    Name,
    Address,
    Phone,
    Genres,
    Website,
    SeekingTalent,
    SeekingDescription,
    ImageLink,
    FacebookLink,
    LocationId,
}
