use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

pub const NAME: &str = "delete";
pub const LFG_CHANNEL: &str = "lfg-channel";

pub fn definition(bot_name: &str) -> CreateCommand {
    CreateCommand::new(NAME)
        .description(format!("Removes {bot_name} settings."))
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            LFG_CHANNEL,
            format!(
                "Removes the LFG channel settings so {bot_name} stops managing this channel."
            ),
        ))
}
