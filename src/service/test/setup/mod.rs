use crate::{
    discord::fake::{Call, FakeChannels, Operation},
    error::setup::SetupError,
    model::{
        message::ChannelMessage,
        setting::{GuildChannelSetting, SettingKey},
        setup::{ManagerOptions, SetupRequest, SetupVariant},
    },
    service::{
        settings_cache::SettingsCache,
        setup::{SetupService, CLEANUP_REASON},
    },
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serenity::all::{ChannelId, GuildId, MessageId, RoleId, UserId};
use test_utils::builder::TestBuilder;

mod preconditions;
mod side_effects;

const BOT_ID: u64 = 42;
const BOT_NAME: &str = "Group Up";
const GUILD: u64 = 1000;
const CHANNEL: u64 = 2000;
const MANAGER_ROLE: u64 = 3000;
const LOG_CHANNEL: u64 = 4000;

fn key() -> SettingKey {
    SettingKey::new(GuildId::new(GUILD), ChannelId::new(CHANNEL))
}

fn without_manager() -> SetupRequest {
    SetupRequest {
        key: key(),
        variant: SetupVariant::WithoutManagerRole,
    }
}

fn with_manager(manager_role_id: u64, log_channel_id: u64) -> SetupRequest {
    SetupRequest {
        key: key(),
        variant: SetupVariant::WithManagerRole(Some(ManagerOptions {
            manager_role_id,
            log_channel_id,
        })),
    }
}

fn chat_message(id: u64) -> ChannelMessage {
    ChannelMessage {
        id: MessageId::new(id),
        author_id: UserId::new(7),
        footer: None,
    }
}

fn event_post(id: u64) -> ChannelMessage {
    ChannelMessage {
        id: MessageId::new(id),
        author_id: UserId::new(BOT_ID),
        footer: Some("Created by: someone | 7".to_string()),
    }
}

fn service<'a>(
    db: &'a DatabaseConnection,
    channels: &'a FakeChannels,
    cache: &'a SettingsCache,
) -> SetupService<'a> {
    SetupService::new(db, channels, cache, UserId::new(BOT_ID), BOT_NAME)
}

async fn settings_rows(db: &DatabaseConnection) -> u64 {
    entity::prelude::GuildSettings::find()
        .count(db)
        .await
        .unwrap()
}

fn permission(role_id: u64, allow: bool) -> Call {
    Call::Permission {
        channel_id: ChannelId::new(CHANNEL),
        role_id: RoleId::new(role_id),
        allow,
    }
}
