//! Guild settings repository for configured LFG channels.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::setting::{CreateGuildSettingsParam, GuildSettings, SettingKey},
};

/// Repository providing database operations for `guild_settings` rows.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new GuildSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the settings row for a newly configured channel.
    ///
    /// The `(guild_id, channel_id)` pair is unique; inserting a channel twice fails
    /// with a database error rather than creating a duplicate.
    ///
    /// # Arguments
    /// - `param` - Channel key plus manager role / log channel ids (`0` for none)
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The stored row
    /// - `Err(AppError::DbErr)` - Insert failed (including unique constraint violation)
    pub async fn create(&self, param: CreateGuildSettingsParam) -> Result<GuildSettings, AppError> {
        let entity = entity::guild_settings::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(param.key.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.key.channel_id.to_string()),
            manager_role_id: ActiveValue::Set(param.manager_role_id.to_string()),
            log_channel_id: ActiveValue::Set(param.log_channel_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(GuildSettings::from_entity(entity)?)
    }

    /// Loads every settings row, used to hydrate the settings cache at startup.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildSettings>)` - All configured channels
    /// - `Err(AppError)` - Database error or corrupt snowflake
    pub async fn get_all(&self) -> Result<Vec<GuildSettings>, AppError> {
        let entities = entity::prelude::GuildSettings::find().all(self.db).await?;

        let settings = entities
            .into_iter()
            .map(GuildSettings::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(settings)
    }

    /// Deletes the settings row for a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - The channel was not configured
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, key: SettingKey) -> Result<bool, AppError> {
        let result = entity::prelude::GuildSettings::delete_many()
            .filter(entity::guild_settings::Column::GuildId.eq(key.guild_id.to_string()))
            .filter(entity::guild_settings::Column::ChannelId.eq(key.channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
