use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildSettings::Id))
                    .col(string(GuildSettings::GuildId))
                    .col(string(GuildSettings::ChannelId))
                    .col(string(GuildSettings::ManagerRoleId).default("0"))
                    .col(string(GuildSettings::LogChannelId).default("0"))
                    .col(
                        timestamp(GuildSettings::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // A channel can only be configured once; concurrent setups lose here
        manager
            .create_index(
                Index::create()
                    .name("idx_guild_settings_guild_channel")
                    .table(GuildSettings::Table)
                    .col(GuildSettings::GuildId)
                    .col(GuildSettings::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_guild_settings_guild_channel")
                    .table(GuildSettings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    Id,
    GuildId,
    ChannelId,
    ManagerRoleId,
    LogChannelId,
    CreatedAt,
}
