use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::City).string_len(120).not_null())
                    .col(ColumnDef::new(Locations::State).string_len(120).not_null())
                    .to_owned(),
            )
            .await?;

        // Lookup index only; duplicates from racing inserts are tolerated
        manager
            .create_index(
                Index::create()
                    .name("idx_locations_city_state")
                    .table(Locations::Table)
                    .col(Locations::City)
                    .col(Locations::State)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Locations {
    Table,
    Id,
    City,
    State,
}
