//! Slash command dispatch.

use serenity::all::{CommandInteraction, Context, EditInteractionResponse};

use crate::{
    bot::command::{delete, setup},
    discord::SerenityChannels,
    error::setup::{DeleteChannelError, SetupError},
    model::{notice::Notice, setting::SettingKey},
    service::{
        analytics::{command_counter, record_usage},
        delete::DeleteChannelService,
        setup::SetupService,
    },
    state::AppState,
};

pub async fn handle_command(state: &AppState, ctx: Context, command: CommandInteraction) {
    let notice = match command.data.name.as_str() {
        setup::NAME => return deferred_setup(state, &ctx, &command).await,
        delete::NAME => run_delete(state, &command).await,
        name => {
            tracing::warn!("Received unknown command '{}'", name);
            Notice::something_went_wrong("unknownCommand")
        }
    };

    if let Err(e) = command
        .create_response(&ctx.http, notice.ephemeral_reply())
        .await
    {
        tracing::error!(
            "Failed to respond to /{} in {}: {}",
            command.data.name,
            command.channel_id,
            e
        );
    }
}

/// Setup makes up to seven Discord calls, which can outlast the initial response
/// deadline, so the reply is deferred and filled in once setup finishes.
async fn deferred_setup(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /setup in {}: {}", command.channel_id, e);
        return;
    }

    let notice = run_setup(state, ctx, command).await;

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(notice.embed()))
        .await
    {
        tracing::error!(
            "Failed to send /setup result in {}: {}",
            command.channel_id,
            e
        );
    }
}

async fn run_setup(state: &AppState, ctx: &Context, command: &CommandInteraction) -> Notice {
    record_usage(&state.db, command_counter(setup::NAME));

    let Some(request) = setup::parse_request(
        command.guild_id,
        command.channel_id,
        &command.data.options,
    ) else {
        tracing::error!("Setup interaction {} arrived without guild or subcommand", command.id);
        return SetupError::MissingAllOptions.into_notice(&state.bot_name);
    };

    let channels = SerenityChannels::new(ctx.http.clone());
    let bot_id = ctx.cache.current_user().id;
    let service = SetupService::new(
        &state.db,
        &channels,
        &state.settings,
        bot_id,
        &state.bot_name,
    );

    match service.setup(request).await {
        Ok(outcome) => {
            tracing::info!(
                "Setup of {} complete: {} messages deleted, {} event posts kept",
                request.key,
                outcome.deleted_messages,
                outcome.preserved_posts
            );
            outcome.into_notice(&state.bot_name)
        }
        Err(e) => {
            if e.is_internal() {
                tracing::error!("Setup of {} failed: {}", request.key, e);
            } else {
                tracing::debug!("Setup of {} rejected: {}", request.key, e);
            }
            e.into_notice(&state.bot_name)
        }
    }
}

async fn run_delete(state: &AppState, command: &CommandInteraction) -> Notice {
    record_usage(&state.db, command_counter(delete::NAME));

    let Some(guild_id) = command.guild_id else {
        return DeleteChannelError::MissingChannel.into_notice();
    };
    let key = SettingKey::new(guild_id, command.channel_id);

    match DeleteChannelService::new(&state.db, &state.settings)
        .delete(key)
        .await
    {
        Ok(notice) => notice,
        Err(e) => {
            match &e {
                DeleteChannelError::PersistFailed(_) => {
                    tracing::error!("Deleting LFG channel {} failed: {}", key, e)
                }
                _ => tracing::debug!("Deleting LFG channel {} rejected: {}", key, e),
            }
            e.into_notice()
        }
    }
}
