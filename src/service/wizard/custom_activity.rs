use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateInputText, CreateModal, InputTextStyle,
};

use crate::{
    error::wizard::WizardError,
    model::{
        activity::{Activity, MAX_MEMBERS_LIMIT, SUBTITLE_MAX_LEN, TITLE_MAX_LEN},
        notice::{Notice, FAIL_COLOR, INFO_COLOR_2},
        wizard::{activity_custom_id, custom_id, Route, WizardStep},
    },
    service::wizard::{ModalInputs, WizardReply},
};

pub const TITLE_INPUT: &str = "activityTitle";
pub const SUBTITLE_INPUT: &str = "activitySubtitle";
pub const MAX_MEMBERS_INPUT: &str = "activityMaxMembers";

/// Opens the custom activity modal.
///
/// When reopened from the verification step the payload carries the activity
/// entered last time and the inputs are prefilled with it.
pub fn open_custom_modal(payload: Option<&str>) -> WizardReply {
    let prefill = payload.and_then(Activity::from_payload);

    let mut title = CreateInputText::new(InputTextStyle::Short, "Activity Title", TITLE_INPUT)
        .placeholder("The name of the game or event")
        .min_length(1)
        .max_length(TITLE_MAX_LEN as u16)
        .required(true);
    let mut subtitle =
        CreateInputText::new(InputTextStyle::Short, "Activity Subtitle", SUBTITLE_INPUT)
            .placeholder("The specific activity within the game or event")
            .max_length(SUBTITLE_MAX_LEN as u16)
            .required(false);
    let mut max_members =
        CreateInputText::new(InputTextStyle::Short, "Maximum Members", MAX_MEMBERS_INPUT)
            .placeholder(format!("A number from 1 to {MAX_MEMBERS_LIMIT}"))
            .min_length(1)
            .max_length(2)
            .required(true);

    if let Some(activity) = prefill {
        title = title.value(activity.title);
        subtitle = subtitle.value(activity.subtitle);
        max_members = max_members.value(activity.max_members.to_string());
    }

    WizardReply::Modal(
        CreateModal::new(
            custom_id(Route::Wizard(WizardStep::VerifyCustomActivity), None),
            "Create Custom Activity",
        )
        .components(vec![
            CreateActionRow::InputText(title),
            CreateActionRow::InputText(subtitle),
            CreateActionRow::InputText(max_members),
        ]),
    )
}

/// Validates the custom activity modal.
///
/// # Returns
/// - `Ok(WizardReply)` - Summary with continue/edit buttons, or the list of problems
///   with a button to try again
/// - `Err(WizardError::MissingModalField)` - The submission lacks an input
pub fn verify_custom_activity(inputs: &ModalInputs) -> Result<WizardReply, WizardError> {
    let title = inputs.required(TITLE_INPUT)?;
    let subtitle = inputs.optional(SUBTITLE_INPUT);
    let max_members = inputs.required(MAX_MEMBERS_INPUT)?;

    let activity = match Activity::from_custom_input(title, subtitle, max_members) {
        Ok(activity) => activity,
        Err(problems) => {
            let retry = CreateButton::new(custom_id(
                Route::Wizard(WizardStep::CreateCustomEvent),
                None,
            ))
            .label("Try Again")
            .style(ButtonStyle::Primary);

            return Ok(WizardReply::Ephemeral {
                notice: Notice::new(FAIL_COLOR, "Invalid custom activity.")
                    .description(problems.join("\n")),
                components: vec![CreateActionRow::Buttons(vec![retry])],
            });
        }
    };

    let proceed = CreateButton::new(activity_custom_id(WizardStep::Finalize, &activity))
        .label("Yes, continue")
        .style(ButtonStyle::Success);
    let edit = CreateButton::new(activity_custom_id(WizardStep::CreateCustomEvent, &activity))
        .label("Edit Custom Activity")
        .style(ButtonStyle::Secondary);

    Ok(WizardReply::Ephemeral {
        notice: Notice::new(INFO_COLOR_2, "Is this the activity you want to create?")
            .field("Activity:", activity.label(), true)
            .field("Maximum Members:", activity.max_members.to_string(), true),
        components: vec![CreateActionRow::Buttons(vec![proceed, edit])],
    })
}
