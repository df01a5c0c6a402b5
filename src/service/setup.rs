//! Channel setup state machine.
//!
//! Turns a channel into a managed LFG channel. Preconditions are checked before any
//! side effect, and the settings row is the last thing written before the channel is
//! announced. The settings cache only learns about the channel after the row has
//! been committed.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, RoleId,
    UserId,
};

use crate::{
    data::guild_settings::GuildSettingsRepository,
    discord::{DiscordChannels, MESSAGE_PAGE_LIMIT},
    error::setup::SetupError,
    model::{
        message::partition_for_cleanup,
        notice::{Notice, INFO_COLOR_2, SAFELY_DISMISS_MSG, SUCCESS_COLOR},
        setting::{CreateGuildSettingsParam, GuildChannelSetting},
        setup::{ManagerOptions, SetupRequest, SetupVariant},
        wizard::{custom_id, Route, WizardStep},
    },
    service::settings_cache::SettingsCache,
};

pub const CLEANUP_REASON: &str = "Cleaning LFG Channel";
const PIN_REASON: &str = "Pinning LFG welcome message";
const CREATE_NEW_EVENT: &str = "Create New Event";

/// Result of a completed setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub deleted_messages: usize,
    /// Earlier event posts left in place.
    pub preserved_posts: usize,
    pub pinned: bool,
}

impl SetupOutcome {
    pub fn into_notice(&self, bot_name: &str) -> Notice {
        Notice::new(SUCCESS_COLOR, "LFG Channel setup complete!").description(format!(
            "{bot_name} has finished setting up this channel.  {SAFELY_DISMISS_MSG}"
        ))
    }
}

pub struct SetupService<'a> {
    db: &'a DatabaseConnection,
    channels: &'a dyn DiscordChannels,
    cache: &'a SettingsCache,
    bot_id: UserId,
    bot_name: &'a str,
}

impl<'a> SetupService<'a> {
    /// Creates a new SetupService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for the settings table
    /// - `channels` - Discord channel operations
    /// - `cache` - Settings cache updated after a successful insert
    /// - `bot_id` - The bot's own user id, used to recognise its event posts
    /// - `bot_name` - Display name used in messages
    pub fn new(
        db: &'a DatabaseConnection,
        channels: &'a dyn DiscordChannels,
        cache: &'a SettingsCache,
        bot_id: UserId,
        bot_name: &'a str,
    ) -> Self {
        Self {
            db,
            channels,
            cache,
            bot_id,
            bot_name,
        }
    }

    /// Runs setup for the channel in `request`.
    ///
    /// Steps, in order:
    /// 1. Reject if the channel is already configured
    /// 2. Reject if the channel holds 100 or more messages
    /// 3. With a manager role: reject unparsed ids, then probe the log channel
    /// 4. Allow the manager role to send, then deny `@everyone`
    /// 5. Delete every message except earlier event posts (best effort)
    /// 6. Insert the settings row, then the cache entry
    /// 7. Send and pin the welcome message
    ///
    /// Holds the channel's settings lock throughout, so a concurrent setup or delete
    /// on the same channel waits and then sees the result of this one.
    ///
    /// # Returns
    /// - `Ok(SetupOutcome)` - Channel is configured and announced
    /// - `Err(SetupError)` - The first failing step; see `SetupError` for which side
    ///   effects have happened by then
    pub async fn setup(&self, request: SetupRequest) -> Result<SetupOutcome, SetupError> {
        let key = request.key;
        let channel_id = key.channel_id;
        let _guard = self.cache.lock(key).await;

        if self.cache.has(key).await {
            return Err(SetupError::AlreadyConfigured);
        }

        let messages = self
            .channels
            .recent_messages(channel_id, MESSAGE_PAGE_LIMIT)
            .await
            .map_err(SetupError::FetchMessagesFailed)?;

        if messages.len() >= usize::from(MESSAGE_PAGE_LIMIT) {
            return Err(SetupError::TooManyMessages);
        }

        let manager = match request.variant {
            SetupVariant::WithoutManagerRole => None,
            SetupVariant::WithManagerRole(None) => return Err(SetupError::MissingManagerOptions),
            SetupVariant::WithManagerRole(Some(options)) if !options.is_complete() => {
                return Err(SetupError::InvalidManagerOptions(options))
            }
            SetupVariant::WithManagerRole(Some(options)) => Some(options),
        };

        if let Some(options) = manager {
            self.channels
                .send_message(ChannelId::new(options.log_channel_id), self.log_probe())
                .await
                .map_err(SetupError::LogChannelUnreachable)?;

            self.channels
                .set_send_messages(channel_id, RoleId::new(options.manager_role_id), true)
                .await
                .map_err(SetupError::PermissionsFailed)?;
        }

        self.channels
            .set_send_messages(channel_id, key.guild_id.everyone_role(), false)
            .await
            .map_err(SetupError::PermissionsFailed)?;

        let (event_posts, to_delete) = partition_for_cleanup(&messages, self.bot_id);

        if !to_delete.is_empty() {
            if let Err(e) = self
                .channels
                .delete_messages(channel_id, &to_delete, CLEANUP_REASON)
                .await
            {
                tracing::warn!(
                    "Failed to clean {} messages from channel {}: {}",
                    to_delete.len(),
                    key,
                    e
                );
            }
        }

        if !event_posts.is_empty() {
            tracing::debug!(
                "Leaving {} existing event posts in {} untouched",
                event_posts.len(),
                key
            );
        }

        let (manager_role_id, log_channel_id) = manager
            .map(|options| (options.manager_role_id, options.log_channel_id))
            .unwrap_or((0, 0));

        GuildSettingsRepository::new(self.db)
            .create(CreateGuildSettingsParam {
                key,
                manager_role_id,
                log_channel_id,
            })
            .await
            .map_err(SetupError::PersistFailed)?;

        self.cache
            .set(key, GuildChannelSetting::from_raw(manager_role_id, log_channel_id))
            .await;

        tracing::info!("Configured LFG channel {} (managed: {})", key, request.managed());

        let welcome_id = self
            .channels
            .send_message(channel_id, self.welcome_message(channel_id, manager))
            .await
            .map_err(SetupError::AnnounceFailed)?;

        let pinned = match self
            .channels
            .pin_message(channel_id, welcome_id, PIN_REASON)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to pin welcome message in {}: {}", key, e);
                false
            }
        };

        Ok(SetupOutcome {
            deleted_messages: to_delete.len(),
            preserved_posts: event_posts.len(),
            pinned,
        })
    }

    fn log_probe(&self) -> CreateMessage {
        CreateMessage::new().embed(
            CreateEmbed::new()
                .color(INFO_COLOR_2)
                .title(format!(
                    "This is the channel {} will be logging events to.",
                    self.bot_name
                ))
                .description(format!(
                    "{} will only send messages here as frequently as your event managers \
                     update events.",
                    self.bot_name
                )),
        )
    }

    fn welcome_message(
        &self,
        channel_id: ChannelId,
        manager: Option<ManagerOptions>,
    ) -> CreateMessage {
        let mut embed = CreateEmbed::new()
            .color(SUCCESS_COLOR)
            .title(format!(
                "To get started, click on the '{CREATE_NEW_EVENT}' button below!"
            ))
            .field(
                "Joining/Leaving an event:",
                "Use the buttons under each event to join, join as an alternate, or leave it.",
                false,
            )
            .field(
                "Deleting your event:",
                "To delete your event, simply click on its `Delete` button.",
                false,
            );

        if let Some(options) = manager {
            embed = embed.field(
                format!("{} Manager Details:", self.bot_name),
                format!(
                    "{} Managers with the <@&{}> role may delete any event in this channel.  \
                     Deletions are logged to <#{}>.",
                    self.bot_name, options.manager_role_id, options.log_channel_id
                ),
                false,
            );
        }

        let create_button =
            CreateButton::new(custom_id(Route::Wizard(WizardStep::GameSelection), None))
                .label(CREATE_NEW_EVENT)
                .style(ButtonStyle::Success);

        CreateMessage::new()
            .content(format!(
                "Welcome to <#{}>, managed by <@{}>!",
                channel_id, self.bot_id
            ))
            .embed(embed)
            .components(vec![CreateActionRow::Buttons(vec![create_button])])
    }
}
