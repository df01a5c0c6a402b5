//! Ready event handler for bot initialization.
//!
//! Fired once the bot has connected to Discord's gateway. Registers the slash
//! commands, either globally or to the development guild.

use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `bot_name` - Name used in command descriptions
/// - `dev_guild_id` - Register commands to this guild only
pub async fn handle_ready(
    ctx: Context,
    ready: Ready,
    bot_name: &str,
    dev_guild_id: Option<GuildId>,
) {
    tracing::info!(
        "{} v{} is connected to Discord ({} guilds)",
        ready.user.name,
        env!("CARGO_PKG_VERSION"),
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("Run /setup to create an LFG channel")));

    let commands = command::all(bot_name);

    let result = match dev_guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
        None => Command::set_global_commands(&ctx.http, commands).await,
    };

    match result {
        Ok(registered) => tracing::info!(
            "Registered {} commands {}",
            registered.len(),
            dev_guild_id.map_or("globally".to_string(), |id| format!("to guild {id}"))
        ),
        Err(e) => tracing::error!("Failed to register commands: {}", e),
    }
}
