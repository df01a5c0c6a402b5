//! Parameters of a single `/setup` invocation.

use serenity::all::CommandDataOptionValue;

use crate::model::setting::SettingKey;

pub const WITHOUT_MANAGER_ROLE: &str = "without-manager-role";
pub const WITH_MANAGER_ROLE: &str = "with-manager-role";
pub const MANAGER_ROLE_OPTION: &str = "manager-role";
pub const LOG_CHANNEL_OPTION: &str = "log-channel";

/// Raw ids supplied to `with-manager-role`; `0` when an option did not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerOptions {
    pub manager_role_id: u64,
    pub log_channel_id: u64,
}

impl ManagerOptions {
    /// Reads the manager role and log channel out of the subcommand options.
    ///
    /// # Returns
    /// - `None` - No options were sent at all
    /// - `Some(ManagerOptions)` - Options were sent; ids that are missing or of the
    ///   wrong type are `0`
    pub fn from_options<'a>(
        options: impl IntoIterator<Item = (&'a str, &'a CommandDataOptionValue)>,
    ) -> Option<Self> {
        let mut seen = false;
        let mut parsed = Self {
            manager_role_id: 0,
            log_channel_id: 0,
        };

        for (name, value) in options {
            seen = true;
            match (name, value) {
                (MANAGER_ROLE_OPTION, CommandDataOptionValue::Role(role_id)) => {
                    parsed.manager_role_id = role_id.get();
                }
                (LOG_CHANNEL_OPTION, CommandDataOptionValue::Channel(channel_id)) => {
                    parsed.log_channel_id = channel_id.get();
                }
                _ => {}
            }
        }

        seen.then_some(parsed)
    }

    pub fn is_complete(&self) -> bool {
        self.manager_role_id != 0 && self.log_channel_id != 0
    }

    /// Diagnostic code shown when one of the ids is missing.
    pub fn error_code(&self) -> String {
        format!("setupLog{}Mgr{}", self.log_channel_id, self.manager_role_id)
    }
}

/// Which `/setup` subcommand was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupVariant {
    WithoutManagerRole,
    /// `None` when Discord sent the subcommand without any options.
    WithManagerRole(Option<ManagerOptions>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupRequest {
    pub key: SettingKey,
    pub variant: SetupVariant,
}

impl SetupRequest {
    pub fn managed(&self) -> bool {
        matches!(self.variant, SetupVariant::WithManagerRole(_))
    }
}
