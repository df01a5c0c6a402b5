//! Event-creation wizard.
//!
//! Each step is a pure function of the interaction that triggered it: the activity
//! chosen so far travels in the custom ID payload, so abandoning the wizard at any
//! point leaves nothing behind. Steps:
//!
//! 1. `gameSel` - activity select menu, or a known activity picked from it
//! 2. `createCustomEvent` - custom activity modal
//! 3. `verifyCustomActivity` - validates the custom activity
//! 4. `finalize` - event details modal
//! 5. `createEvent` - posts the event

pub mod create_event;
pub mod custom_activity;
pub mod finalize;
pub mod game_selection;

use std::collections::HashMap;

use serenity::all::{
    CreateActionRow, CreateInteractionResponse, CreateInteractionResponseMessage, CreateModal,
};

use crate::{
    error::wizard::WizardError,
    model::{activity::Activity, notice::Notice},
};

/// Response of a wizard step.
#[derive(Debug)]
pub enum WizardReply {
    /// Ephemeral embed, with optional buttons or select menus.
    Ephemeral {
        notice: Notice,
        components: Vec<CreateActionRow>,
    },
    Modal(CreateModal),
}

impl WizardReply {
    pub fn notice(notice: Notice) -> Self {
        Self::Ephemeral {
            notice,
            components: Vec::new(),
        }
    }

    pub fn into_response(self) -> CreateInteractionResponse {
        match self {
            Self::Ephemeral { notice, components } => CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .ephemeral(true)
                    .embed(notice.embed())
                    .components(components),
            ),
            Self::Modal(modal) => CreateInteractionResponse::Modal(modal),
        }
    }
}

/// Values submitted through a modal, keyed by input custom ID.
#[derive(Debug, Default)]
pub struct ModalInputs(HashMap<String, String>);

impl ModalInputs {
    pub fn new(values: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Value of an input the bot put in the modal.
    pub fn required(&self, id: &'static str) -> Result<&str, WizardError> {
        self.0
            .get(id)
            .map(String::as_str)
            .ok_or(WizardError::MissingModalField(id))
    }

    /// Value of an optional input, empty when left blank.
    pub fn optional(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or_default()
    }
}

/// Decodes the activity carried by a step's custom ID.
pub fn activity_from_payload(payload: Option<&str>) -> Result<Activity, WizardError> {
    let payload = payload.unwrap_or_default();

    Activity::from_payload(payload).ok_or_else(|| WizardError::MalformedPayload(payload.to_string()))
}
