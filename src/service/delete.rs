//! `/delete lfg-channel`: forgets a configured channel so setup can run again.

use sea_orm::DatabaseConnection;

use crate::{
    data::guild_settings::GuildSettingsRepository,
    error::setup::DeleteChannelError,
    model::{
        notice::{Notice, SAFELY_DISMISS_MSG, SUCCESS_COLOR},
        setting::SettingKey,
    },
    service::settings_cache::SettingsCache,
};

pub struct DeleteChannelService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a SettingsCache,
}

impl<'a> DeleteChannelService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a SettingsCache) -> Self {
        Self { db, cache }
    }

    /// Deletes the settings row, then the cache entry.
    ///
    /// Event posts and permission overwrites in the channel are left alone.
    ///
    /// # Returns
    /// - `Ok(Notice)` - Success reply
    /// - `Err(DeleteChannelError::NotConfigured)` - The channel is not an LFG channel
    /// - `Err(DeleteChannelError::PersistFailed)` - Database error; cache untouched
    pub async fn delete(&self, key: SettingKey) -> Result<Notice, DeleteChannelError> {
        let _guard = self.cache.lock(key).await;

        if !self.cache.has(key).await {
            return Err(DeleteChannelError::NotConfigured);
        }

        GuildSettingsRepository::new(self.db)
            .delete(key)
            .await
            .map_err(DeleteChannelError::PersistFailed)?;

        self.cache.remove(key).await;

        tracing::info!("Removed LFG channel {}", key);

        Ok(
            Notice::new(SUCCESS_COLOR, "LFG Channel settings removed.").description(format!(
                "This channel is no longer an LFG channel.  Existing events are untouched and \
                 `/setup` may be run again.  {SAFELY_DISMISS_MSG}"
            )),
        )
    }
}
