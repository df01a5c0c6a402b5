//! Modal submission dispatch.

use chrono::Utc;
use serenity::all::{ActionRowComponent, Context, ModalInteraction};

use crate::{
    discord::SerenityChannels,
    error::wizard::WizardError,
    model::{
        notice::Notice,
        setting::SettingKey,
        wizard::{Route, WizardStep},
    },
    service::{
        analytics::{button_counter, record_usage},
        wizard::{
            create_event::{create_event, EventCreator},
            custom_activity, ModalInputs, WizardReply,
        },
    },
    state::AppState,
};

pub async fn handle_modal(state: &AppState, ctx: Context, modal: ModalInteraction) {
    let custom_id = modal.data.custom_id.as_str();

    let response = match state.router.resolve(custom_id) {
        Some((route, payload)) => {
            record_usage(&state.db, button_counter(route.id()));

            submit(&ctx, route, payload, &modal)
                .await
                .map(WizardReply::into_response)
                .unwrap_or_else(|e| {
                    if e.is_internal() {
                        tracing::error!("Modal '{}' failed: {}", custom_id, e);
                    } else {
                        tracing::debug!("Modal '{}' rejected: {}", custom_id, e);
                    }
                    e.into_notice().ephemeral_reply()
                })
        }
        None => {
            tracing::warn!("Received modal with unknown custom ID '{}'", custom_id);
            Notice::something_went_wrong("unknownModal").ephemeral_reply()
        }
    };

    if let Err(e) = modal.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to modal '{}': {}", custom_id, e);
    }
}

async fn submit(
    ctx: &Context,
    route: Route,
    payload: Option<&str>,
    modal: &ModalInteraction,
) -> Result<WizardReply, WizardError> {
    let inputs = modal_inputs(modal);

    match route {
        Route::Wizard(WizardStep::VerifyCustomActivity) => {
            custom_activity::verify_custom_activity(&inputs)
        }
        Route::Wizard(WizardStep::CreateEvent) => {
            let guild_id = modal.guild_id.ok_or(WizardError::NotInGuild)?;
            let name = modal
                .member
                .as_ref()
                .and_then(|member| member.nick.clone())
                .unwrap_or_else(|| modal.user.display_name().to_string());
            let channels = SerenityChannels::new(ctx.http.clone());

            create_event(
                &channels,
                payload,
                &inputs,
                EventCreator {
                    key: SettingKey::new(guild_id, modal.channel_id),
                    user_id: modal.user.id,
                    name: &name,
                },
                Utc::now(),
            )
            .await
        }
        _ => Err(WizardError::MalformedPayload(modal.data.custom_id.clone())),
    }
}

fn modal_inputs(modal: &ModalInteraction) -> ModalInputs {
    ModalInputs::new(
        modal
            .data
            .components
            .iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::InputText(input) => Some((
                    input.custom_id.clone(),
                    input.value.clone().unwrap_or_default(),
                )),
                _ => None,
            }),
    )
}
