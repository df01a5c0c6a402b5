//! Channel operations the bot performs against Discord.
//!
//! Flows talk to Discord through `DiscordChannels` so they can run against an
//! in-memory fake in tests. `SerenityChannels` is the production implementation
//! backed by the serenity HTTP client.

#[cfg(test)]
pub mod fake;

use std::sync::Arc;

use serde_json::json;
use serenity::{
    all::{
        ChannelId, CreateMessage, EditMessage, Embed, GetMessages, MessageId,
        PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId,
    },
    async_trait,
    http::Http,
};

use crate::{error::AppError, model::message::ChannelMessage};

/// Number of messages fetched when inspecting a channel before cleanup.
pub const MESSAGE_PAGE_LIMIT: u8 = 100;

#[async_trait]
pub trait DiscordChannels: Send + Sync {
    /// Fetches up to `limit` of the most recent messages in a channel, newest first.
    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError>;

    /// Sends a message and returns its id.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError>;

    /// Fetches one message and returns its first embed, if it has any.
    async fn message_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Embed>, AppError>;

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), AppError>;

    /// Deletes messages, recording `reason` in the audit log.
    async fn delete_messages(
        &self,
        channel_id: ChannelId,
        message_ids: &[MessageId],
        reason: &str,
    ) -> Result<(), AppError>;

    async fn pin_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reason: &str,
    ) -> Result<(), AppError>;

    /// Allows or denies `SEND_MESSAGES` for a role through a channel overwrite.
    async fn set_send_messages(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
        allow: bool,
    ) -> Result<(), AppError>;
}

/// `DiscordChannels` over the serenity HTTP client.
pub struct SerenityChannels {
    http: Arc<Http>,
}

impl SerenityChannels {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordChannels for SerenityChannels {
    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        let messages = channel_id
            .messages(self.http.as_ref(), GetMessages::new().limit(limit))
            .await?;

        Ok(messages.iter().map(ChannelMessage::from_message).collect())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError> {
        let sent = channel_id.send_message(self.http.as_ref(), message).await?;

        Ok(sent.id)
    }

    async fn message_embed(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Embed>, AppError> {
        let message = channel_id.message(self.http.as_ref(), message_id).await?;

        Ok(message.embeds.into_iter().next())
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), AppError> {
        channel_id
            .edit_message(self.http.as_ref(), message_id, message)
            .await?;

        Ok(())
    }

    async fn delete_messages(
        &self,
        channel_id: ChannelId,
        message_ids: &[MessageId],
        reason: &str,
    ) -> Result<(), AppError> {
        // Bulk delete rejects fewer than two ids
        match message_ids {
            [] => {}
            [message_id] => {
                self.http
                    .delete_message(channel_id, *message_id, Some(reason))
                    .await?
            }
            _ => {
                self.http
                    .delete_messages(channel_id, &json!({ "messages": message_ids }), Some(reason))
                    .await?
            }
        }

        Ok(())
    }

    async fn pin_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .pin_message(channel_id, message_id, Some(reason))
            .await?;

        Ok(())
    }

    async fn set_send_messages(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
        allow: bool,
    ) -> Result<(), AppError> {
        let (allow, deny) = if allow {
            (Permissions::SEND_MESSAGES, Permissions::empty())
        } else {
            (Permissions::empty(), Permissions::SEND_MESSAGES)
        };

        channel_id
            .create_permission(
                self.http.as_ref(),
                PermissionOverwrite {
                    allow,
                    deny,
                    kind: PermissionOverwriteType::Role(role_id),
                },
            )
            .await?;

        Ok(())
    }
}
