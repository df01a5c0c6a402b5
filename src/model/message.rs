//! Snapshot of a channel message, reduced to what channel cleanup needs.

use serenity::all::{Message, MessageId, UserId};

use crate::model::event::CREATED_BY_MARKER;

/// A message fetched from a channel before setup cleans it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub id: MessageId,
    pub author_id: UserId,
    /// Footer text of the first embed, if the message has one.
    pub footer: Option<String>,
}

impl ChannelMessage {
    pub fn from_message(message: &Message) -> Self {
        Self {
            id: message.id,
            author_id: message.author.id,
            footer: message
                .embeds
                .first()
                .and_then(|embed| embed.footer.as_ref())
                .map(|footer| footer.text.clone()),
        }
    }

    /// Whether this message is an event post previously created by the bot.
    pub fn is_event_post(&self, bot_id: UserId) -> bool {
        self.author_id == bot_id
            && self
                .footer
                .as_deref()
                .is_some_and(|text| text.contains(CREATED_BY_MARKER))
    }
}

/// Splits fetched messages into event posts to keep and messages to delete.
///
/// # Returns
/// - `(event_posts, to_delete)` - Message ids, each in fetch order
pub fn partition_for_cleanup(
    messages: &[ChannelMessage],
    bot_id: UserId,
) -> (Vec<MessageId>, Vec<MessageId>) {
    let (event_posts, to_delete): (Vec<_>, Vec<_>) = messages
        .iter()
        .partition(|message| message.is_event_post(bot_id));

    (
        event_posts.into_iter().map(|message| message.id).collect(),
        to_delete.into_iter().map(|message| message.id).collect(),
    )
}
