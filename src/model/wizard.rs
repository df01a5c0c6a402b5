//! Identifiers for component and modal interactions.
//!
//! Every button, select menu, and modal the bot creates carries a custom ID of the
//! form `<routeId>[@<payload>]`. The route prefix selects the handler; the payload
//! carries the state of the flow so no step needs shared memory.

use crate::model::activity::{Activity, PAYLOAD_SEPARATOR};

/// Steps of the event-creation wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// "Create New Event" button and the activity select menu.
    GameSelection,
    /// Opens the custom activity modal.
    CreateCustomEvent,
    /// Custom activity modal submission.
    VerifyCustomActivity,
    /// Opens the event details modal.
    Finalize,
    /// Event details modal submission; posts the event.
    CreateEvent,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::GameSelection,
        WizardStep::CreateCustomEvent,
        WizardStep::VerifyCustomActivity,
        WizardStep::Finalize,
        WizardStep::CreateEvent,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::GameSelection => "gameSel",
            Self::CreateCustomEvent => "createCustomEvent",
            Self::VerifyCustomActivity => "verifyCustomActivity",
            Self::Finalize => "finalize",
            Self::CreateEvent => "createEvent",
        }
    }
}

/// Buttons attached to a posted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterAction {
    Join,
    Alternate,
    Leave,
    Delete,
}

impl RosterAction {
    pub const ALL: [RosterAction; 4] = [
        RosterAction::Join,
        RosterAction::Alternate,
        RosterAction::Leave,
        RosterAction::Delete,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Join => "joinEvent",
            Self::Alternate => "alternateEvent",
            Self::Leave => "leaveEvent",
            Self::Delete => "deleteEvent",
        }
    }
}

/// Any interaction target the component dispatcher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Wizard(WizardStep),
    Roster(RosterAction),
}

impl Route {
    pub fn id(self) -> &'static str {
        match self {
            Self::Wizard(step) => step.id(),
            Self::Roster(action) => action.id(),
        }
    }

    /// Every route, wizard steps first.
    pub fn all() -> impl Iterator<Item = Route> {
        WizardStep::ALL
            .into_iter()
            .map(Route::Wizard)
            .chain(RosterAction::ALL.into_iter().map(Route::Roster))
    }
}

/// Payload of the game selection menu.
pub const GAME_SELECT_PAYLOAD: &str = "pick";

/// Builds `<routeId>` or `<routeId>@<payload>`.
pub fn custom_id(route: Route, payload: Option<&str>) -> String {
    match payload {
        Some(payload) => format!("{}{}{}", route.id(), PAYLOAD_SEPARATOR, payload),
        None => route.id().to_string(),
    }
}

/// Builds the custom ID for a wizard step that carries an activity.
pub fn activity_custom_id(step: WizardStep, activity: &Activity) -> String {
    custom_id(Route::Wizard(step), Some(&activity.to_payload()))
}

/// Splits a custom ID into its route prefix and optional payload.
pub fn split_custom_id(custom_id: &str) -> (&str, Option<&str>) {
    match custom_id.split_once(PAYLOAD_SEPARATOR) {
        Some((prefix, payload)) => (prefix, Some(payload)),
        None => (custom_id, None),
    }
}
