use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_BOT_NAME: &str = "Group Up";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Name the bot uses for itself in replies.
    pub bot_name: String,
    /// Register commands to this guild only, for development.
    pub dev_guild_id: Option<GuildId>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            bot_name: std::env::var("BOT_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            dev_guild_id: std::env::var("DEV_GUILD_ID")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(|value| parse_guild_id("DEV_GUILD_ID", &value))
                .transpose()?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_guild_id(name: &str, value: &str) -> Result<GuildId, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(GuildId::new)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}
