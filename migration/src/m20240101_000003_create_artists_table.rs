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
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artists::Name).string().not_null())
                    .col(ColumnDef::new(Artists::Phone).string_len(120))
                    .col(ColumnDef::new(Artists::Genres).json().not_null())
                    .col(ColumnDef::new(Artists::Website).string())
                    .col(ColumnDef::new(Artists::SeekingVenue).string())
                    .col(ColumnDef::new(Artists::SeekingDescription).string())
                    .col(ColumnDef::new(Artists::ImageLink).string_len(500))
                    .col(ColumnDef::new(Artists::FacebookLink).string_len(120))
                    .col(ColumnDef::new(Artists::LocationId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artists_location_id")
                            .from(Artists::Table, Artists::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artists_location_id")
                    .table(Artists::Table)
                    .col(Artists::LocationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artists {
    Table,
    Id,
    Name,
    Phone,
    Genres,
    Website,
    SeekingVenue,
    SeekingDescription,
    ImageLink,
    FacebookLink,
    LocationId,
}
