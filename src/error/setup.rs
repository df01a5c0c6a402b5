use thiserror::Error;

use crate::{
    error::AppError,
    model::{
        notice::{Notice, NoticeField, FAIL_COLOR},
        setup::ManagerOptions,
    },
};

#[derive(Error, Debug)]
pub enum SetupError {
    /// The interaction arrived without a guild, channel, or subcommand.
    #[error("Setup interaction is missing its guild, channel, or subcommand")]
    MissingAllOptions,

    /// `with-manager-role` arrived with no options even though both are required.
    #[error("Setup interaction is missing the manager role and log channel options")]
    MissingManagerOptions,

    /// The channel already has a settings entry.
    #[error("Channel is already configured as an LFG channel")]
    AlreadyConfigured,

    /// The channel holds 100 or more messages, too many to clean in one page.
    #[error("Channel has too many messages to clean")]
    TooManyMessages,

    /// The recent message page could not be fetched.
    #[error("Failed to fetch recent channel messages: {0}")]
    FetchMessagesFailed(#[source] AppError),

    /// One or both of the manager role / log channel ids parsed as `0`.
    #[error("Manager options did not parse: {}", .0.error_code())]
    InvalidManagerOptions(ManagerOptions),

    /// The probe message could not be sent to the log channel.
    #[error("Failed to send probe message to log channel: {0}")]
    LogChannelUnreachable(#[source] AppError),

    /// A `SEND_MESSAGES` permission overwrite could not be applied.
    #[error("Failed to update channel permissions: {0}")]
    PermissionsFailed(#[source] AppError),

    /// The settings row could not be inserted.
    #[error("Failed to persist channel settings: {0}")]
    PersistFailed(#[source] AppError),

    /// Settings were stored but the welcome message could not be sent.
    #[error("Failed to send welcome message: {0}")]
    AnnounceFailed(#[source] AppError),
}

/// Fields explaining which permissions setup needs.
pub fn permission_fields(bot_name: &str) -> Vec<NoticeField> {
    vec![NoticeField {
        name: format!("Please make sure {bot_name} has the following permissions:"),
        value: "`MANAGE_GUILD`\n`MANAGE_CHANNELS`\n`MANAGE_ROLES`\n`MANAGE_MESSAGES`\n\n\
                The only permission that is required after setup completes is `MANAGE_MESSAGES`."
            .to_string(),
        inline: false,
    }]
}

impl SetupError {
    /// Whether the failure came from Discord or the database rather than the request.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::MissingAllOptions
                | Self::MissingManagerOptions
                | Self::FetchMessagesFailed(_)
                | Self::PermissionsFailed(_)
                | Self::PersistFailed(_)
                | Self::AnnounceFailed(_)
        )
    }

    /// Converts the error into the ephemeral embed shown to the admin.
    ///
    /// Maps errors to user-facing replies:
    /// - `MissingAllOptions` / `MissingManagerOptions` / `FetchMessagesFailed` /
    ///   `PersistFailed` → generic reply carrying a diagnostic code
    /// - `AlreadyConfigured` → points at `/delete lfg-channel`
    /// - `TooManyMessages` → two ways forward as inline fields
    /// - `InvalidManagerOptions` → `setupLog<log>Mgr<mgr>` error code
    /// - `LogChannelUnreachable` → asks for send permission in the log channel
    /// - `PermissionsFailed` / `AnnounceFailed` → required permission list
    pub fn into_notice(&self, bot_name: &str) -> Notice {
        match self {
            Self::MissingAllOptions => Notice::something_went_wrong("setupMissingAllOptions"),
            Self::MissingManagerOptions => {
                Notice::something_went_wrong("setupMissingRoleMgrOptions")
            }
            Self::FetchMessagesFailed(_) => {
                Notice::something_went_wrong("setupFetchMessagesFailed")
            }
            Self::PersistFailed(_) => Notice::something_went_wrong("setupDBInsertFailed"),
            Self::AlreadyConfigured => Notice::new(FAIL_COLOR, "Unable to setup LFG channel.")
                .description(
                    "This channel is already set as an LFG channel.  If you need to edit the \
                     channel, please run `/delete lfg-channel` in this channel and then run \
                     `/setup` again.\n\nThis will not harm any active events in this channel \
                     and simply resets the settings for this channel.",
                ),
            Self::TooManyMessages => Notice::new(FAIL_COLOR, "Unable to setup LFG channel.")
                .description(format!(
                    "{bot_name} attempted to clean this channel, but encountered too many \
                     messages (100 or more).  There are two ways to move forward:"
                ))
                .field(
                    "Is this channel a dedicated LFG Channel?",
                    "You either need to manually clean this channel or create a brand new \
                     channel for events.",
                    true,
                )
                .field(
                    "Is this a chat channel that you want events mixed into?",
                    "You do not need to run the `/setup` command, and instead should use the \
                     `/lfg create` command.",
                    true,
                ),
            Self::InvalidManagerOptions(options) => {
                Notice::new(FAIL_COLOR, "Unable to setup log channel or manager role.")
                    .description(format!(
                        "{bot_name} attempted to set the log channel or manager role, but one or \
                         both were undefined.  Please try again and if the issue continues, \
                         report this issue to the developers with the error code below."
                    ))
                    .field("Error Code:", options.error_code(), false)
            }
            Self::LogChannelUnreachable(_) => Notice::new(FAIL_COLOR, "Unable to setup log channel.")
                .description(format!(
                    "{bot_name} attempted to send a message to the specified log channel."
                ))
                .field(
                    format!("Please allow {bot_name} to send messages in the requested channel."),
                    bot_name,
                    false,
                ),
            Self::PermissionsFailed(_) => {
                Notice::new(FAIL_COLOR, "Unable to set lfg channel permissions.")
                    .description(format!(
                        "{bot_name} attempted to update the permissions for the current channel, \
                         but could not."
                    ))
                    .fields(permission_fields(bot_name))
            }
            Self::AnnounceFailed(_) => Notice::new(FAIL_COLOR, "Failed to send the initial message!")
                .fields(permission_fields(bot_name)),
        }
    }
}

/// Failures of `/delete lfg-channel`.
#[derive(Error, Debug)]
pub enum DeleteChannelError {
    /// The interaction arrived without a guild or channel.
    #[error("Delete interaction is missing its guild or channel")]
    MissingChannel,

    #[error("Channel is not an LFG channel")]
    NotConfigured,

    #[error("Failed to delete channel settings: {0}")]
    PersistFailed(#[source] AppError),
}

impl DeleteChannelError {
    pub fn into_notice(&self) -> Notice {
        match self {
            Self::MissingChannel => Notice::something_went_wrong("delChannelMissingOptions"),
            Self::NotConfigured => Notice::new(FAIL_COLOR, "Unable to delete LFG channel.")
                .description(
                    "This channel is not an LFG channel.  If you need to delete an LFG channel, \
                     please run `/delete lfg-channel` in the LFG channel you wish to delete.",
                ),
            Self::PersistFailed(_) => Notice::something_went_wrong("delChannelDBFailed"),
        }
    }
}
