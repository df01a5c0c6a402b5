use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};

use crate::{
    error::wizard::WizardError,
    model::{
        activity::{Activity, KNOWN_ACTIVITIES},
        notice::{Notice, INFO_COLOR_1},
        wizard::{custom_id, Route, WizardStep, GAME_SELECT_PAYLOAD},
    },
    service::wizard::{finalize::details_modal, WizardReply},
};

/// Reply to the "Create New Event" button: the activity menu plus a custom option.
pub fn game_menu() -> WizardReply {
    let options = KNOWN_ACTIVITIES
        .iter()
        .map(|known| {
            CreateSelectMenuOption::new(known.activity().label(), known.key)
                .description(format!("Up to {} members", known.max_members))
        })
        .collect();

    let menu = CreateSelectMenu::new(
        custom_id(
            Route::Wizard(WizardStep::GameSelection),
            Some(GAME_SELECT_PAYLOAD),
        ),
        CreateSelectMenuKind::String { options },
    )
    .placeholder("Pick a game/activity");

    let custom = CreateButton::new(custom_id(
        Route::Wizard(WizardStep::CreateCustomEvent),
        None,
    ))
    .label("Create Custom Event")
    .style(ButtonStyle::Primary);

    WizardReply::Ephemeral {
        notice: Notice::new(INFO_COLOR_1, "Please select a game/activity from the menu below.")
            .description(
                "If your game/activity is not listed, click `Create Custom Event` to describe it \
                 yourself.",
            ),
        components: vec![
            CreateActionRow::SelectMenu(menu),
            CreateActionRow::Buttons(vec![custom]),
        ],
    }
}

/// Handles the select menu: a known activity skips straight to the details modal.
///
/// # Returns
/// - `Ok(WizardReply::Modal)` - Details modal for the picked activity
/// - `Err(WizardError::MissingSelection)` - No value was submitted
/// - `Err(WizardError::UnknownActivity)` - The key is not in the catalogue
pub fn pick_activity(values: &[String]) -> Result<WizardReply, WizardError> {
    let key = values.first().ok_or(WizardError::MissingSelection)?;
    let activity = Activity::known(key).ok_or_else(|| WizardError::UnknownActivity(key.clone()))?;

    Ok(WizardReply::Modal(details_modal(&activity)))
}
