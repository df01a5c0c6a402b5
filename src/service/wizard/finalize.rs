use serenity::all::{CreateActionRow, CreateInputText, CreateModal, InputTextStyle};

use crate::{
    error::wizard::WizardError,
    model::{
        activity::Activity,
        wizard::{activity_custom_id, WizardStep},
    },
    service::wizard::{activity_from_payload, WizardReply},
};

pub const TIME_INPUT: &str = "eventTime";
pub const ZONE_INPUT: &str = "eventTimeZone";
pub const DATE_INPUT: &str = "eventDate";
pub const DESCRIPTION_INPUT: &str = "eventDescription";

const DESCRIPTION_MAX_LEN: u16 = 1000;

/// Modal asking for the start time and description of an event for `activity`.
pub fn details_modal(activity: &Activity) -> CreateModal {
    let mut title = format!("Create {} Event", activity.label());
    if title.chars().count() > 45 {
        title = "Create Event".to_string();
    }

    CreateModal::new(activity_custom_id(WizardStep::CreateEvent, activity), title).components(
        vec![
            CreateActionRow::InputText(
                CreateInputText::new(InputTextStyle::Short, "Start Time:", TIME_INPUT)
                    .placeholder("20:30, 8:30 PM, or 8 PM")
                    .min_length(1)
                    .max_length(8)
                    .required(true),
            ),
            CreateActionRow::InputText(
                CreateInputText::new(InputTextStyle::Short, "Time Zone:", ZONE_INPUT)
                    .placeholder("UTC, UTC-5, EST, CET... (defaults to UTC)")
                    .max_length(9)
                    .required(false),
            ),
            CreateActionRow::InputText(
                CreateInputText::new(InputTextStyle::Short, "Start Date:", DATE_INPUT)
                    .placeholder("YYYY-MM-DD, MM/DD/YYYY, today, tomorrow")
                    .max_length(10)
                    .required(false),
            ),
            CreateActionRow::InputText(
                CreateInputText::new(InputTextStyle::Paragraph, "Description:", DESCRIPTION_INPUT)
                    .placeholder("Tell people what to expect")
                    .max_length(DESCRIPTION_MAX_LEN)
                    .required(false),
            ),
        ],
    )
}

/// Opens the details modal for the activity in the payload.
pub fn finalize(payload: Option<&str>) -> Result<WizardReply, WizardError> {
    let activity = activity_from_payload(payload)?;

    Ok(WizardReply::Modal(details_modal(&activity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_activity_into_create_step() {
        let WizardReply::Modal(modal) = finalize(Some("3@Apex Legends@Ranked")).unwrap() else {
            panic!("expected modal");
        };
        let json = serde_json::to_value(&modal).unwrap();

        assert_eq!(json["custom_id"], "createEvent@3@Apex Legends@Ranked");
        assert_eq!(json["components"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn long_labels_fall_back_to_a_short_title() {
        let activity = Activity {
            title: "A".repeat(35),
            subtitle: "B".repeat(40),
            max_members: 2,
        };
        let json = serde_json::to_value(details_modal(&activity)).unwrap();

        assert_eq!(json["title"], "Create Event");
    }

    #[test]
    fn malformed_payload_is_rejected() {
        assert!(matches!(
            finalize(Some("lots@of@garbage")),
            Err(WizardError::MalformedPayload(_))
        ));
        assert!(matches!(finalize(None), Err(WizardError::MalformedPayload(_))));
    }
}
