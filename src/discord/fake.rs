//! In-memory `DiscordChannels` used by service tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use serde_json::Value;
use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, Embed, MessageId, RoleId},
    async_trait,
};

use crate::{discord::DiscordChannels, error::AppError, model::message::ChannelMessage};

/// A channel operation recorded by `FakeChannels`.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch { channel_id: ChannelId, limit: u8 },
    /// `message` is the serialized `CreateMessage` payload.
    Send { channel_id: ChannelId, message: Value },
    /// `message` is the serialized `EditMessage` payload.
    Edit {
        channel_id: ChannelId,
        message_id: MessageId,
        message: Value,
    },
    Delete {
        channel_id: ChannelId,
        message_ids: Vec<MessageId>,
        reason: String,
    },
    Pin { channel_id: ChannelId, message_id: MessageId },
    Permission {
        channel_id: ChannelId,
        role_id: RoleId,
        allow: bool,
    },
}

/// Operations that can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fetch,
    Send(ChannelId),
    FetchMessage,
    Edit,
    Delete,
    Pin,
    Permission(RoleId),
}

pub struct FakeChannels {
    messages: Vec<ChannelMessage>,
    /// First embed of each existing post, rewritten by edits.
    posts: Mutex<HashMap<MessageId, Embed>>,
    failures: HashSet<Operation>,
    calls: Mutex<Vec<Call>>,
    next_message_id: AtomicU64,
}

impl FakeChannels {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            posts: Mutex::new(HashMap::new()),
            failures: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            next_message_id: AtomicU64::new(900_000),
        }
    }

    /// Messages returned by every fetch.
    pub fn with_messages(mut self, messages: Vec<ChannelMessage>) -> Self {
        self.messages = messages;
        self
    }

    /// A post whose embed `message_embed` returns until it is edited.
    pub fn with_post(self, message_id: MessageId, embed: Embed) -> Self {
        self.posts.lock().unwrap().insert(message_id, embed);
        self
    }

    /// Current embed of a post.
    pub fn post(&self, message_id: MessageId) -> Option<Embed> {
        self.posts.lock().unwrap().get(&message_id).cloned()
    }

    pub fn failing(mut self, operation: Operation) -> Self {
        self.failures.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Payloads of every message sent to `channel_id`, in order.
    pub fn sent_to(&self, channel_id: ChannelId) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Send {
                    channel_id: target,
                    message,
                } if target == channel_id => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call, operation: Operation) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);

        if self.failures.contains(&operation) {
            return Err(serenity::Error::Other("injected failure").into());
        }

        Ok(())
    }
}

#[async_trait]
impl DiscordChannels for FakeChannels {
    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, AppError> {
        self.record(Call::Fetch { channel_id, limit }, Operation::Fetch)?;

        Ok(self
            .messages
            .iter()
            .take(usize::from(limit))
            .cloned()
            .collect())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError> {
        let message = serde_json::to_value(&message).unwrap();
        self.record(
            Call::Send {
                channel_id,
                message,
            },
            Operation::Send(channel_id),
        )?;

        Ok(MessageId::new(
            self.next_message_id.fetch_add(1, Ordering::SeqCst),
        ))
    }

    async fn message_embed(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<Embed>, AppError> {
        if self.failures.contains(&Operation::FetchMessage) {
            return Err(serenity::Error::Other("injected failure").into());
        }

        let embed = self.post(message_id);
        // Lets concurrent callers interleave between read and write.
        tokio::task::yield_now().await;

        Ok(embed)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), AppError> {
        let message = serde_json::to_value(&message).unwrap();
        self.record(
            Call::Edit {
                channel_id,
                message_id,
                message: message.clone(),
            },
            Operation::Edit,
        )?;

        if let Some(embed) = message["embeds"].get(0) {
            let embed = serde_json::from_value(embed.clone()).unwrap();
            self.posts.lock().unwrap().insert(message_id, embed);
        }

        Ok(())
    }

    async fn delete_messages(
        &self,
        channel_id: ChannelId,
        message_ids: &[MessageId],
        reason: &str,
    ) -> Result<(), AppError> {
        self.record(
            Call::Delete {
                channel_id,
                message_ids: message_ids.to_vec(),
                reason: reason.to_string(),
            },
            Operation::Delete,
        )
    }

    async fn pin_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        _reason: &str,
    ) -> Result<(), AppError> {
        self.record(
            Call::Pin {
                channel_id,
                message_id,
            },
            Operation::Pin,
        )
    }

    async fn set_send_messages(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
        allow: bool,
    ) -> Result<(), AppError> {
        self.record(
            Call::Permission {
                channel_id,
                role_id,
                allow,
            },
            Operation::Permission(role_id),
        )
    }
}
