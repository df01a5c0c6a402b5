//! Slash command definitions.

pub mod delete;
pub mod setup;

use serenity::all::CreateCommand;

/// Every command the bot registers.
pub fn all(bot_name: &str) -> Vec<CreateCommand> {
    vec![setup::definition(bot_name), delete::definition(bot_name)]
}
