//! Domain models for configured LFG channels.

use std::{fmt, num::NonZeroU64};

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, GuildId, RoleId};

use crate::error::internal::InternalError;

/// Identifies a configured channel, rendered as `guildId-channelId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettingKey {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
}

impl SettingKey {
    pub fn new(guild_id: GuildId, channel_id: ChannelId) -> Self {
        Self {
            guild_id,
            channel_id,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.guild_id, self.channel_id)
    }
}

/// Configuration of one LFG channel as held by the settings cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildChannelSetting {
    /// Whether a manager role may edit/delete any event in the channel.
    pub managed: bool,
    pub manager_role_id: Option<RoleId>,
    /// Channel receiving audit messages when a manager touches someone else's event.
    pub log_channel_id: Option<ChannelId>,
}

impl GuildChannelSetting {
    /// Builds a setting from raw ids, treating `0` as absent.
    pub fn from_raw(manager_role_id: u64, log_channel_id: u64) -> Self {
        let manager_role_id = (manager_role_id != 0).then(|| RoleId::new(manager_role_id));
        let log_channel_id = (log_channel_id != 0).then(|| ChannelId::new(log_channel_id));

        Self {
            managed: manager_role_id.is_some(),
            manager_role_id,
            log_channel_id,
        }
    }
}

/// Persisted settings row.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub id: i32,
    pub key: SettingKey,
    pub setting: GuildChannelSetting,
    pub created_at: DateTime<Utc>,
}

impl GuildSettings {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The converted settings
    /// - `Err(InternalError::ParseStringId)` - A stored snowflake is not a valid u64
    /// - `Err(InternalError::ZeroSnowflake)` - The guild or channel id is stored as `0`
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, InternalError> {
        let guild_id = parse_required_snowflake(entity.guild_id)?;
        let channel_id = parse_required_snowflake(entity.channel_id)?;
        let manager_role_id = parse_snowflake(entity.manager_role_id)?;
        let log_channel_id = parse_snowflake(entity.log_channel_id)?;

        Ok(Self {
            id: entity.id,
            key: SettingKey::new(guild_id.into(), channel_id.into()),
            setting: GuildChannelSetting::from_raw(manager_role_id, log_channel_id),
            created_at: entity.created_at,
        })
    }
}

/// Parameters for inserting a settings row.
#[derive(Debug, Clone)]
pub struct CreateGuildSettingsParam {
    pub key: SettingKey,
    /// `0` when the channel has no manager role.
    pub manager_role_id: u64,
    /// `0` when the channel has no log channel.
    pub log_channel_id: u64,
}

fn parse_snowflake(value: String) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source })
}

fn parse_required_snowflake(value: String) -> Result<NonZeroU64, InternalError> {
    NonZeroU64::new(parse_snowflake(value)?).ok_or(InternalError::ZeroSnowflake)
}
