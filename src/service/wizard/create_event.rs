use chrono::{DateTime, Utc};
use serenity::all::{CreateMessage, UserId};

use crate::{
    discord::DiscordChannels,
    error::wizard::WizardError,
    model::{
        event::EventPost,
        notice::{Notice, SAFELY_DISMISS_MSG, SUCCESS_COLOR},
        setting::SettingKey,
    },
    service::{
        event::embed::{build_event_buttons, build_event_embed},
        wizard::{
            activity_from_payload,
            finalize::{DATE_INPUT, DESCRIPTION_INPUT, TIME_INPUT, ZONE_INPUT},
            ModalInputs, WizardReply,
        },
    },
    util::time::resolve_start,
};

/// Who submitted the details modal and where.
pub struct EventCreator<'a> {
    pub key: SettingKey,
    pub user_id: UserId,
    pub name: &'a str,
}

/// Posts the event described by the details modal.
///
/// # Arguments
/// - `channels` - Discord channel operations
/// - `payload` - Activity payload from the modal custom ID
/// - `inputs` - Submitted modal values
/// - `creator` - Submitting user and the channel the event goes to
/// - `now` - Current time, used to resolve `today` / `tomorrow`
///
/// # Returns
/// - `Ok(WizardReply)` - Confirmation with a link to the new post
/// - `Err(WizardError::InvalidStartTime | InvalidTimeZone | InvalidStartDate)` - Bad input
/// - `Err(WizardError::MalformedPayload)` - The custom ID lost its activity
/// - `Err(WizardError::DiscordFailed)` - The post could not be sent
pub async fn create_event(
    channels: &dyn DiscordChannels,
    payload: Option<&str>,
    inputs: &ModalInputs,
    creator: EventCreator<'_>,
    now: DateTime<Utc>,
) -> Result<WizardReply, WizardError> {
    let activity = activity_from_payload(payload)?;
    let start = resolve_start(
        inputs.required(TIME_INPUT)?,
        inputs.optional(ZONE_INPUT),
        inputs.optional(DATE_INPUT),
        now,
    )?;

    let description = Some(inputs.optional(DESCRIPTION_INPUT).trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    let event = EventPost::new(activity, start, description, creator.user_id, creator.name);

    let message_id = channels
        .send_message(
            creator.key.channel_id,
            CreateMessage::new()
                .embed(build_event_embed(&event))
                .components(build_event_buttons()),
        )
        .await
        .map_err(WizardError::discord("eventSendFailed"))?;

    tracing::info!(
        "Event '{}' created in {} by {}",
        event.activity.label(),
        creator.key,
        creator.user_id
    );

    let link = format!(
        "https://discord.com/channels/{}/{}/{}",
        creator.key.guild_id, creator.key.channel_id, message_id
    );

    Ok(WizardReply::notice(
        Notice::new(SUCCESS_COLOR, "Event created!")
            .description(format!("[Click here to view the event]({link}).  {SAFELY_DISMISS_MSG}")),
    ))
}
