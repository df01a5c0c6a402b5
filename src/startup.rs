use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, data::guild_settings::GuildSettingsRepository, error::AppError,
    service::settings_cache::SettingsCache,
};

/// Installs the global tracing subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the settings and usage
/// tables exist before the bot handles its first interaction.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads every configured channel into a new settings cache.
///
/// # Returns
/// - `Ok(SettingsCache)` - Cache mirroring the settings table
/// - `Err(AppError)` - Database error or corrupt row
pub async fn load_settings_cache(db: &DatabaseConnection) -> Result<SettingsCache, AppError> {
    let rows = GuildSettingsRepository::new(db).get_all().await?;
    let cache = SettingsCache::from_rows(rows);

    tracing::info!("Loaded {} LFG channel settings", cache.len().await);

    Ok(cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::{ChannelId, GuildId};
    use test_utils::{builder::TestBuilder, factory};

    use crate::model::setting::SettingKey;

    /// Tests hydrating the settings cache from the database.
    ///
    /// Expected: one cache entry per row
    #[tokio::test]
    async fn hydrates_cache_from_rows() -> Result<(), AppError> {
        let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::guild_settings::GuildSettingsFactory::new(db)
            .guild_id(1)
            .channel_id(2)
            .manager_role_id(3)
            .log_channel_id(4)
            .build()
            .await?;
        factory::create_guild_settings(db).await?;

        let cache = load_settings_cache(db).await?;

        assert_eq!(cache.len().await, 2);
        let key = SettingKey::new(GuildId::new(1), ChannelId::new(2));
        assert!(cache.get(key).await.unwrap().managed);

        Ok(())
    }
}
