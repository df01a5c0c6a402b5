mod command_count;
mod guild_settings;
