use serenity::all::{
    ChannelId, ChannelType, CommandDataOption, CommandDataOptionValue, CommandOptionType,
    CreateCommand, CreateCommandOption, GuildId, Permissions,
};

use crate::model::{
    setting::SettingKey,
    setup::{
        ManagerOptions, SetupRequest, SetupVariant, LOG_CHANNEL_OPTION, MANAGER_ROLE_OPTION,
        WITHOUT_MANAGER_ROLE, WITH_MANAGER_ROLE,
    },
};

pub const NAME: &str = "setup";

pub fn definition(bot_name: &str) -> CreateCommand {
    CreateCommand::new(NAME)
        .description(format!(
            "Configures this channel to be a dedicated event channel to be managed by {bot_name}."
        ))
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            WITHOUT_MANAGER_ROLE,
            format!("This will configure {bot_name} without a manager role."),
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                WITH_MANAGER_ROLE,
                format!("This will configure {bot_name} with a manager role."),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Role,
                    MANAGER_ROLE_OPTION,
                    "This role will be allowed to manage all events in this channel.",
                )
                .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    LOG_CHANNEL_OPTION,
                    format!(
                        "This channel is where {bot_name} will send Audit Messages whenever a \
                         manager updates an event."
                    ),
                )
                .channel_types(vec![ChannelType::Text])
                .required(true),
            ),
        )
}

/// Builds the setup request from the invoked subcommand.
///
/// # Returns
/// - `Some(SetupRequest)` - The interaction names a guild and a known subcommand
/// - `None` - Guild or subcommand is missing
pub fn parse_request(
    guild_id: Option<GuildId>,
    channel_id: ChannelId,
    options: &[CommandDataOption],
) -> Option<SetupRequest> {
    let key = SettingKey::new(guild_id?, channel_id);
    let subcommand = options.first()?;

    let variant = match (subcommand.name.as_str(), &subcommand.value) {
        (WITHOUT_MANAGER_ROLE, _) => SetupVariant::WithoutManagerRole,
        (WITH_MANAGER_ROLE, CommandDataOptionValue::SubCommand(options)) => {
            SetupVariant::WithManagerRole(ManagerOptions::from_options(
                options
                    .iter()
                    .map(|option| (option.name.as_str(), &option.value)),
            ))
        }
        (WITH_MANAGER_ROLE, _) => SetupVariant::WithManagerRole(None),
        _ => return None,
    };

    Some(SetupRequest { key, variant })
}
