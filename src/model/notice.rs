//! Embed replies shown to the invoking user.
//!
//! A `Notice` is the display-only content of an ephemeral reply. Flows build them from
//! their outcome (or error) and the bot layer turns them into exactly one interaction
//! response.

use serenity::all::{
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};

pub const FAIL_COLOR: u32 = 0xe71212;
pub const WARN_COLOR: u32 = 0xe38f28;
pub const SUCCESS_COLOR: u32 = 0x0f8108;
pub const INFO_COLOR_1: u32 = 0x313bf9;
pub const INFO_COLOR_2: u32 = 0x6805e9;

pub const SAFELY_DISMISS_MSG: &str = "You may safely dismiss this message.";

/// A single embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Content of an embed reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub color: u32,
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<NoticeField>,
}

impl Notice {
    pub fn new(color: u32, title: impl Into<String>) -> Self {
        Self {
            color,
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(NoticeField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = NoticeField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Generic failure reply carrying a diagnostic code for support.
    ///
    /// Used for persistence errors and for interaction payloads that are missing
    /// data Discord guarantees to send. The code is the only detail exposed.
    pub fn something_went_wrong(code: &str) -> Self {
        Self::new(FAIL_COLOR, "Something went wrong...")
            .description(
                "You should not be able to get here.  Please try again and if the issue \
                 continues, report this issue to the developers with the error code below.",
            )
            .field("Error Code:", code, false)
    }

    /// Returns the value of the first field named `name`.
    #[cfg(test)]
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new().color(self.color).title(&self.title);

        if let Some(description) = &self.description {
            embed = embed.description(description);
        }

        for field in &self.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }

        embed
    }

    /// Wraps the notice in an ephemeral channel message response.
    pub fn ephemeral_reply(&self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .ephemeral(true)
                .embed(self.embed()),
        )
    }
}
