use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommandCount::Table)
                    .if_not_exists()
                    .col(pk_auto(CommandCount::Id))
                    .col(string(CommandCount::Name).unique_key())
                    .col(big_integer(CommandCount::Count).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommandCount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CommandCount {
    Table,
    Id,
    Name,
    Count,
}
