//! Button and select menu dispatch.

use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateInteractionResponse,
};

use crate::{
    discord::SerenityChannels,
    error::wizard::WizardError,
    model::{
        notice::Notice,
        setting::SettingKey,
        wizard::{RosterAction, Route, WizardStep, GAME_SELECT_PAYLOAD},
    },
    service::{
        analytics::{button_counter, record_usage},
        event::roster::{RosterClick, RosterReply, RosterService},
        wizard::{custom_activity, finalize, game_selection, WizardReply},
    },
    state::AppState,
};

pub async fn handle_component(state: &AppState, ctx: Context, component: ComponentInteraction) {
    let custom_id = component.data.custom_id.as_str();

    let response = match state.router.resolve(custom_id) {
        Some((route, payload)) => {
            record_usage(&state.db, button_counter(route.id()));

            let result = match route {
                Route::Wizard(step) => wizard_step(step, payload, &component),
                Route::Roster(action) => roster(state, &ctx, action, &component).await,
            };

            result.unwrap_or_else(|e| {
                if e.is_internal() {
                    tracing::error!("Component '{}' failed: {}", custom_id, e);
                } else {
                    tracing::debug!("Component '{}' rejected: {}", custom_id, e);
                }
                e.into_notice().ephemeral_reply()
            })
        }
        None => {
            tracing::warn!("Received component with unknown custom ID '{}'", custom_id);
            Notice::something_went_wrong("unknownComponent").ephemeral_reply()
        }
    };

    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to component '{}': {}", custom_id, e);
    }
}

fn wizard_step(
    step: WizardStep,
    payload: Option<&str>,
    component: &ComponentInteraction,
) -> Result<CreateInteractionResponse, WizardError> {
    let reply = match (step, payload) {
        (WizardStep::GameSelection, None) => game_selection::game_menu(),
        (WizardStep::GameSelection, Some(GAME_SELECT_PAYLOAD)) => match &component.data.kind {
            ComponentInteractionDataKind::StringSelect { values } => {
                game_selection::pick_activity(values)?
            }
            _ => return Err(WizardError::MissingSelection),
        },
        (WizardStep::CreateCustomEvent, payload) => custom_activity::open_custom_modal(payload),
        (WizardStep::Finalize, payload) => finalize::finalize(payload)?,
        _ => {
            return Err(WizardError::MalformedPayload(
                component.data.custom_id.clone(),
            ))
        }
    };

    Ok(reply.into_response())
}

async fn roster(
    state: &AppState,
    ctx: &Context,
    action: RosterAction,
    component: &ComponentInteraction,
) -> Result<CreateInteractionResponse, WizardError> {
    let guild_id = component.guild_id.ok_or(WizardError::NotInGuild)?;
    let roles = component
        .member
        .as_ref()
        .map(|member| member.roles.as_slice())
        .unwrap_or_default();

    let channels = SerenityChannels::new(ctx.http.clone());
    let click = RosterClick {
        key: SettingKey::new(guild_id, component.channel_id),
        message_id: component.message.id,
        user_id: component.user.id,
        roles,
    };

    let reply = RosterService::new(&channels, &state.settings, &state.roster_locks)
        .handle(action, click)
        .await?;

    Ok(match reply {
        // The post was already rewritten
        RosterReply::Updated(event) => {
            tracing::debug!(
                "Event {} now has {}/{} members and {} alternates",
                component.message.id,
                event.members.len(),
                event.activity.max_members,
                event.alternates.len()
            );
            CreateInteractionResponse::Acknowledge
        }
        RosterReply::Notice(notice) => WizardReply::notice(notice).into_response(),
    })
}
