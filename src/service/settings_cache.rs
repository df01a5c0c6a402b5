//! In-memory cache of configured LFG channels.
//!
//! The cache mirrors the `guild_settings` table: it is hydrated from the database at
//! startup and only changed after the matching database write has committed. It also
//! hands out a per-channel lock so setup and delete on the same channel never
//! interleave their check-then-act sequences.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::{
    model::setting::{GuildChannelSetting, GuildSettings, SettingKey},
    service::keyed_lock::{KeyedGuard, KeyedLocks},
};

/// Shared settings cache, cheap to clone.
#[derive(Clone, Default)]
pub struct SettingsCache {
    settings: Arc<RwLock<HashMap<SettingKey, GuildChannelSetting>>>,
    locks: KeyedLocks<SettingKey>,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cache from the persisted settings rows.
    ///
    /// # Arguments
    /// - `rows` - Every row of the settings table
    ///
    /// # Returns
    /// - `SettingsCache` - Cache holding one entry per row
    pub fn from_rows(rows: impl IntoIterator<Item = GuildSettings>) -> Self {
        let settings = rows
            .into_iter()
            .map(|row| (row.key, row.setting))
            .collect::<HashMap<_, _>>();

        Self {
            settings: Arc::new(RwLock::new(settings)),
            locks: KeyedLocks::new(),
        }
    }

    pub async fn has(&self, key: SettingKey) -> bool {
        self.settings.read().await.contains_key(&key)
    }

    pub async fn get(&self, key: SettingKey) -> Option<GuildChannelSetting> {
        self.settings.read().await.get(&key).copied()
    }

    pub async fn set(&self, key: SettingKey, setting: GuildChannelSetting) {
        self.settings.write().await.insert(key, setting);
    }

    /// Removes a channel, returning its previous setting.
    pub async fn remove(&self, key: SettingKey) -> Option<GuildChannelSetting> {
        self.settings.write().await.remove(&key)
    }

    pub async fn len(&self) -> usize {
        self.settings.read().await.len()
    }

    /// Acquires the lock serializing configuration changes to one channel.
    ///
    /// The guard must be held from the `has` check through the final cache write.
    pub async fn lock(&self, key: SettingKey) -> KeyedGuard<SettingKey> {
        self.locks.lock(key).await
    }
}
