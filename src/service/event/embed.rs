//! Conversion between `EventPost` and the embed it is stored in.
//!
//! The embed layout:
//! - title: activity title
//! - description: event description, if any
//! - `Activity:` field with the subtitle, omitted when empty
//! - `Start Time:` field with a Discord timestamp tag
//! - `Members [n/max]:` and `Alternates:` fields, one mention per line or `None`.
//!   A roster longer than one field's 1024 characters continues in fields named with
//!   a zero-width space right after its heading.
//! - footer: `Created by: <name> | <id>`

use chrono::{DateTime, Utc};
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, Embed,
    EmbedField, UserId,
};

use crate::model::{
    activity::Activity,
    event::{EventPost, CREATED_BY_MARKER},
    notice::INFO_COLOR_1,
    wizard::{custom_id, RosterAction, Route},
};

const ACTIVITY_FIELD: &str = "Activity:";
const START_FIELD: &str = "Start Time:";
const MEMBERS_FIELD_PREFIX: &str = "Members [";
const ALTERNATES_FIELD: &str = "Alternates:";
const EMPTY_ROSTER: &str = "None";
const ROSTER_CONTINUATION: &str = "\u{200b}";

/// Discord's limit on a single embed field value.
pub const FIELD_VALUE_MAX_LEN: usize = 1024;

pub fn build_event_embed(event: &EventPost) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .color(INFO_COLOR_1)
        .title(&event.activity.title);

    if let Some(description) = &event.description {
        embed = embed.description(description);
    }

    if !event.activity.subtitle.is_empty() {
        embed = embed.field(ACTIVITY_FIELD, &event.activity.subtitle, false);
    }

    let members = render_roster(&event.members);
    let alternates = render_roster(&event.alternates);
    // Side by side only while neither roster needs continuation fields
    let inline = members.len() == 1 && alternates.len() == 1;

    embed = embed.field(
        START_FIELD,
        format!("<t:{}:F>", event.start.timestamp()),
        false,
    );

    let members_heading = format!(
        "{}{}/{}]:",
        MEMBERS_FIELD_PREFIX,
        event.members.len(),
        event.activity.max_members
    );

    embed
        .fields(roster_fields(members_heading, members, inline))
        .fields(roster_fields(ALTERNATES_FIELD.to_string(), alternates, inline))
        .footer(CreateEmbedFooter::new(event.footer_text()))
}

fn roster_fields(
    heading: String,
    chunks: Vec<String>,
    inline: bool,
) -> impl Iterator<Item = (String, String, bool)> {
    chunks.into_iter().enumerate().map(move |(index, chunk)| {
        let name = if index == 0 {
            heading.clone()
        } else {
            ROSTER_CONTINUATION.to_string()
        };
        (name, chunk, inline)
    })
}

/// Join, alternate, leave, and delete buttons shown under every event.
pub fn build_event_buttons() -> Vec<CreateActionRow> {
    let button = |action: RosterAction, label: &str, style: ButtonStyle| {
        CreateButton::new(custom_id(Route::Roster(action), None))
            .label(label)
            .style(style)
    };

    vec![CreateActionRow::Buttons(vec![
        button(RosterAction::Join, "Join", ButtonStyle::Success),
        button(RosterAction::Alternate, "Join as Alternate", ButtonStyle::Primary),
        button(RosterAction::Leave, "Leave", ButtonStyle::Secondary),
        button(RosterAction::Delete, "Delete", ButtonStyle::Danger),
    ])]
}

/// Reads an event back out of its embed.
///
/// # Returns
/// - `Some(EventPost)` - The embed has every field an event post carries
/// - `None` - The embed is not an event post or was edited into an unknown shape
pub fn parse_event_embed(embed: &Embed) -> Option<EventPost> {
    let title = embed.title.as_deref()?;
    let (creator_name, creator_id) = parse_footer(&embed.footer.as_ref()?.text)?;

    let field = |name: &str| {
        embed
            .fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    };

    let subtitle = field(ACTIVITY_FIELD).unwrap_or_default();
    let start = parse_timestamp_tag(field(START_FIELD)?)?;

    let (members_heading, members) =
        roster_section(&embed.fields, |name| name.starts_with(MEMBERS_FIELD_PREFIX))?;
    let (_, alternates) = roster_section(&embed.fields, |name| name == ALTERNATES_FIELD)?;
    let max_members = members_heading
        .strip_prefix(MEMBERS_FIELD_PREFIX)?
        .strip_suffix("]:")?
        .split_once('/')?
        .1
        .parse::<u8>()
        .ok()?;

    Some(EventPost {
        activity: Activity {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            max_members,
        },
        start,
        description: embed.description.clone().filter(|text| !text.is_empty()),
        creator_id,
        creator_name,
        members: parse_roster(&members)?,
        alternates: parse_roster(&alternates)?,
    })
}

/// Renders one mention per line, split into chunks that each fit a field value.
fn render_roster(users: &[UserId]) -> Vec<String> {
    if users.is_empty() {
        return vec![EMPTY_ROSTER.to_string()];
    }

    let mut chunks = vec![String::new()];

    for user_id in users {
        let mention = format!("<@{user_id}>");
        let Some(chunk) = chunks.last_mut() else {
            break;
        };

        if chunk.is_empty() {
            chunk.push_str(&mention);
        } else if chunk.len() + 1 + mention.len() <= FIELD_VALUE_MAX_LEN {
            chunk.push('\n');
            chunk.push_str(&mention);
        } else {
            chunks.push(mention);
        }
    }

    chunks
}

/// Finds the field matching `heading` and joins its value with the continuation
/// fields that follow it.
fn roster_section<'a>(
    fields: &'a [EmbedField],
    heading: impl Fn(&str) -> bool,
) -> Option<(&'a str, String)> {
    let start = fields.iter().position(|field| heading(&field.name))?;
    let value = fields[start..]
        .iter()
        .enumerate()
        .take_while(|(index, field)| *index == 0 || field.name == ROSTER_CONTINUATION)
        .map(|(_, field)| field.value.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    Some((fields[start].name.as_str(), value))
}

fn parse_roster(value: &str) -> Option<Vec<UserId>> {
    if value == EMPTY_ROSTER {
        return Some(Vec::new());
    }

    value
        .lines()
        .map(|line| {
            line.trim()
                .strip_prefix("<@")?
                .strip_suffix('>')?
                .parse::<u64>()
                .ok()
                .filter(|id| *id != 0)
                .map(UserId::new)
        })
        .collect()
}

fn parse_timestamp_tag(value: &str) -> Option<DateTime<Utc>> {
    let seconds = value
        .strip_prefix("<t:")?
        .strip_suffix(":F>")?
        .parse::<i64>()
        .ok()?;

    DateTime::from_timestamp(seconds, 0)
}

fn parse_footer(text: &str) -> Option<(String, UserId)> {
    let rest = text.strip_prefix(CREATED_BY_MARKER)?.trim_start();
    let (name, id) = rest.rsplit_once(" | ")?;
    let id = id.trim().parse::<u64>().ok().filter(|id| *id != 0)?;

    Some((name.to_string(), UserId::new(id)))
}
