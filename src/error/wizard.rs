use thiserror::Error;

use crate::{
    error::AppError,
    model::notice::{Notice, FAIL_COLOR, WARN_COLOR},
};

/// Failures of component and modal interactions: wizard steps and roster buttons.
#[derive(Error, Debug)]
pub enum WizardError {
    /// A custom ID payload could not be decoded back into an activity.
    #[error("Malformed custom ID payload: '{0}'")]
    MalformedPayload(String),

    /// The game selection menu returned a key that is not in the catalogue.
    #[error("Unknown activity key: '{0}'")]
    UnknownActivity(String),

    /// The select menu submission carried no value.
    #[error("Select menu submission carried no value")]
    MissingSelection,

    /// A modal submission is missing one of the inputs the bot created.
    #[error("Modal submission is missing input '{0}'")]
    MissingModalField(&'static str),

    /// The interaction did not come from a guild channel.
    #[error("Interaction is not in a guild")]
    NotInGuild,

    #[error("Invalid start time: '{0}'")]
    InvalidStartTime(String),

    #[error("Invalid time zone: '{0}'")]
    InvalidTimeZone(String),

    #[error("Invalid start date: '{0}'")]
    InvalidStartDate(String),

    /// The clicked message does not carry a parsable event embed.
    #[error("Message is not an event post")]
    NotAnEventPost,

    /// Only the creator or a channel manager may delete an event.
    #[error("User is not allowed to delete this event")]
    NotAllowedToDelete,

    /// A Discord call the step depends on failed.
    #[error("Discord request '{code}' failed: {source}")]
    DiscordFailed {
        /// Diagnostic code shown to the user
        code: &'static str,
        #[source]
        source: AppError,
    },
}

impl WizardError {
    pub fn discord(code: &'static str) -> impl FnOnce(AppError) -> Self {
        move |source| Self::DiscordFailed { code, source }
    }

    /// Whether the failure is a bug or platform error rather than bad user input.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            Self::InvalidStartTime(_)
                | Self::InvalidTimeZone(_)
                | Self::InvalidStartDate(_)
                | Self::NotAllowedToDelete
        )
    }

    /// Converts the error into the ephemeral embed shown to the clicking user.
    ///
    /// Input problems get a specific message so the user can correct them; broken
    /// payloads and platform failures get the generic reply with a code.
    pub fn into_notice(&self) -> Notice {
        match self {
            Self::MalformedPayload(_) => Notice::something_went_wrong("wizardBadPayload"),
            Self::UnknownActivity(_) => Notice::something_went_wrong("wizardUnknownActivity"),
            Self::MissingSelection => Notice::something_went_wrong("wizardMissingSelection"),
            Self::MissingModalField(_) => Notice::something_went_wrong("wizardMissingModalField"),
            Self::NotInGuild => Notice::something_went_wrong("wizardNotInGuild"),
            Self::NotAnEventPost => Notice::something_went_wrong("eventNotParsed"),
            Self::DiscordFailed { code, .. } => Notice::something_went_wrong(code),
            Self::InvalidStartTime(input) => Notice::new(FAIL_COLOR, "Invalid start time.")
                .description(format!(
                    "`{input}` is not a time I understand.  Please use a format like `20:30`, \
                     `8:30 PM`, or `8 PM`."
                )),
            Self::InvalidTimeZone(input) => Notice::new(FAIL_COLOR, "Invalid time zone.")
                .description(format!(
                    "`{input}` is not a time zone I understand.  Please use `UTC`, an offset \
                     like `UTC-5` or `UTC+5:30`, or an abbreviation like `EST` or `CET`."
                )),
            Self::InvalidStartDate(input) => Notice::new(FAIL_COLOR, "Invalid start date.")
                .description(format!(
                    "`{input}` is not a date I understand.  Please use `YYYY-MM-DD`, \
                     `MM/DD/YYYY`, `today`, or `tomorrow`."
                )),
            Self::NotAllowedToDelete => Notice::new(WARN_COLOR, "Unable to delete event.")
                .description(
                    "Only the creator of this event or a manager of this channel may delete it.",
                ),
        }
    }
}
