pub use super::command_count::Entity as CommandCount;
pub use super::guild_settings::Entity as GuildSettings;
