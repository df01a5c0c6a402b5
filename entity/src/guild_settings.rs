use sea_orm::entity::prelude::*;

/// A channel configured as a dedicated LFG channel.
///
/// Snowflakes are stored as strings; `"0"` in `manager_role_id` / `log_channel_id`
/// means the channel was set up without a manager role. `(guild_id, channel_id)` is
/// unique; the index is created by the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub manager_role_id: String,
    pub log_channel_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
