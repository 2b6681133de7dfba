use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_venues_table::Venues;
use super::m20240101_000003_create_artists_table::Artists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shows::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shows::ArtistId).integer().not_null())
                    .col(ColumnDef::new(Shows::VenueId).integer().not_null())
                    .col(ColumnDef::new(Shows::StartDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shows_artist_id")
                            .from(Shows::Table, Shows::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shows_venue_id")
                            .from(Shows::Table, Shows::VenueId)
                            .to(Venues::Table, Venues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shows_artist_id")
                    .table(Shows::Table)
                    .col(Shows::ArtistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shows_venue_id")
                    .table(Shows::Table)
                    .col(Shows::VenueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shows_start_date")
                    .table(Shows::Table)
                    .col(Shows::StartDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shows {
    Table,
    Id,
    ArtistId,
    VenueId,
    StartDate,
}
