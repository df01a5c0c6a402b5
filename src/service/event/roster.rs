//! Roster buttons on a posted event.
//!
//! Clicks on one post are serialized: each click re-reads the post, applies its
//! change, and writes the post back before the next click on it runs.

use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, MessageId, RoleId, UserId};

use crate::{
    discord::DiscordChannels,
    error::wizard::WizardError,
    model::{
        event::{AlternateOutcome, EventPost, JoinOutcome, LeaveOutcome},
        notice::{Notice, SAFELY_DISMISS_MSG, SUCCESS_COLOR, WARN_COLOR},
        setting::SettingKey,
        wizard::RosterAction,
    },
    service::{
        event::embed::{build_event_buttons, build_event_embed, parse_event_embed},
        keyed_lock::KeyedLocks,
        settings_cache::SettingsCache,
    },
};

/// The clicked event and who clicked it.
pub struct RosterClick<'a> {
    pub key: SettingKey,
    pub message_id: MessageId,
    pub user_id: UserId,
    /// Roles of the clicking member.
    pub roles: &'a [RoleId],
}

#[derive(Debug)]
pub enum RosterReply {
    /// The event post was rewritten with this roster.
    Updated(EventPost),
    /// Ephemeral message to the clicking user; the post is unchanged.
    Notice(Notice),
}

pub struct RosterService<'a> {
    channels: &'a dyn DiscordChannels,
    cache: &'a SettingsCache,
    locks: &'a KeyedLocks<MessageId>,
}

impl<'a> RosterService<'a> {
    pub fn new(
        channels: &'a dyn DiscordChannels,
        cache: &'a SettingsCache,
        locks: &'a KeyedLocks<MessageId>,
    ) -> Self {
        Self {
            channels,
            cache,
            locks,
        }
    }

    /// Applies a roster button click to the event it was clicked on.
    ///
    /// # Returns
    /// - `Ok(RosterReply::Updated)` - Roster changed and the post was rewritten
    /// - `Ok(RosterReply::Notice)` - Nothing to change, or the event was deleted
    /// - `Err(WizardError::NotAnEventPost)` - The message has no event embed
    /// - `Err(WizardError::NotAllowedToDelete)` - Delete clicked by someone else
    /// - `Err(WizardError::DiscordFailed)` - The post could not be read, rewritten, or deleted
    pub async fn handle(
        &self,
        action: RosterAction,
        click: RosterClick<'_>,
    ) -> Result<RosterReply, WizardError> {
        let _guard = self.locks.lock(click.message_id).await;

        let embed = self
            .channels
            .message_embed(click.key.channel_id, click.message_id)
            .await
            .map_err(WizardError::discord("eventFetchFailed"))?;
        let mut event = embed
            .as_ref()
            .and_then(parse_event_embed)
            .ok_or(WizardError::NotAnEventPost)?;

        let changed = match action {
            RosterAction::Join => match event.join(click.user_id) {
                JoinOutcome::AlreadyMember => {
                    return Ok(already("You are already a member of this event."))
                }
                JoinOutcome::EventFull => {
                    return Ok(already("This event and its alternates list are full."))
                }
                JoinOutcome::Joined | JoinOutcome::JoinedAsAlternate => event,
            },
            RosterAction::Alternate => match event.join_alternate(click.user_id) {
                AlternateOutcome::AlreadyAlternate => {
                    return Ok(already("You are already an alternate for this event."))
                }
                AlternateOutcome::AlternatesFull => {
                    return Ok(already("The alternates list for this event is full."))
                }
                AlternateOutcome::Added | AlternateOutcome::Moved { .. } => event,
            },
            RosterAction::Leave => match event.leave(click.user_id) {
                LeaveOutcome::NotInEvent => return Ok(already("You are not part of this event.")),
                LeaveOutcome::Left { .. } => event,
            },
            RosterAction::Delete => return self.delete(&event, &click).await,
        };

        self.channels
            .edit_message(
                click.key.channel_id,
                click.message_id,
                EditMessage::new()
                    .embed(build_event_embed(&changed))
                    .components(build_event_buttons()),
            )
            .await
            .map_err(WizardError::discord("eventUpdateFailed"))?;

        Ok(RosterReply::Updated(changed))
    }

    async fn delete(
        &self,
        event: &EventPost,
        click: &RosterClick<'_>,
    ) -> Result<RosterReply, WizardError> {
        let setting = self.cache.get(click.key).await;
        let is_manager = setting
            .and_then(|setting| setting.manager_role_id)
            .is_some_and(|role_id| click.roles.contains(&role_id));

        if !event.is_creator(click.user_id) && !is_manager {
            return Err(WizardError::NotAllowedToDelete);
        }

        self.channels
            .delete_messages(
                click.key.channel_id,
                &[click.message_id],
                "Event deleted",
            )
            .await
            .map_err(WizardError::discord("eventDeleteFailed"))?;

        tracing::info!(
            "Event {} in {} deleted by {}",
            click.message_id,
            click.key,
            click.user_id
        );

        if !event.is_creator(click.user_id) {
            if let Some(log_channel_id) = setting.and_then(|setting| setting.log_channel_id) {
                self.send_audit(log_channel_id, event, click).await;
            }
        }

        Ok(RosterReply::Notice(
            Notice::new(SUCCESS_COLOR, "Event deleted.").description(SAFELY_DISMISS_MSG),
        ))
    }

    /// Best effort; the deletion already happened.
    async fn send_audit(&self, log_channel_id: ChannelId, event: &EventPost, click: &RosterClick<'_>) {
        let embed = CreateEmbed::new()
            .color(WARN_COLOR)
            .title("A manager deleted an event.")
            .field("Event:", event.activity.label(), false)
            .field("Start Time:", format!("<t:{}:F>", event.start.timestamp()), false)
            .field("Created by:", format!("<@{}>", event.creator_id), true)
            .field("Deleted by:", format!("<@{}>", click.user_id), true)
            .field("Channel:", format!("<#{}>", click.key.channel_id), true);

        if let Err(e) = self
            .channels
            .send_message(log_channel_id, CreateMessage::new().embed(embed))
            .await
        {
            tracing::warn!(
                "Failed to send delete audit message to log channel {}: {}",
                log_channel_id,
                e
            );
        }
    }
}

fn already(description: &str) -> RosterReply {
    RosterReply::Notice(Notice::new(WARN_COLOR, "Nothing to change.").description(format!(
        "{description}  {SAFELY_DISMISS_MSG}"
    )))
}
