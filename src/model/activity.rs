//! Activities an event can be created for.

/// Longest custom activity title accepted by the wizard.
pub const TITLE_MAX_LEN: usize = 35;
/// Longest custom activity subtitle accepted by the wizard.
pub const SUBTITLE_MAX_LEN: usize = 40;
pub const MAX_MEMBERS_LIMIT: u8 = 99;

/// Separator used when an activity is threaded through a custom ID.
pub const PAYLOAD_SEPARATOR: char = '@';

/// The game/activity an event is organized for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub title: String,
    /// Empty when the activity has no subtitle.
    pub subtitle: String,
    pub max_members: u8,
}

/// Entry in the catalogue offered by the game selection menu.
#[derive(Debug, Clone, Copy)]
pub struct KnownActivity {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub max_members: u8,
}

impl KnownActivity {
    pub fn activity(&self) -> Activity {
        Activity {
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            max_members: self.max_members,
        }
    }
}

/// Select menus hold at most 25 options.
#[rustfmt::skip]
pub const KNOWN_ACTIVITIES: &[KnownActivity] = &[
    KnownActivity { key: "d2-raid", title: "Destiny 2", subtitle: "Raid", max_members: 6 },
    KnownActivity { key: "d2-dungeon", title: "Destiny 2", subtitle: "Dungeon", max_members: 3 },
    KnownActivity { key: "d2-nightfall", title: "Destiny 2", subtitle: "Nightfall", max_members: 3 },
    KnownActivity { key: "d2-trials", title: "Destiny 2", subtitle: "Trials of Osiris", max_members: 3 },
    KnownActivity { key: "d2-gambit", title: "Destiny 2", subtitle: "Gambit", max_members: 4 },
    KnownActivity { key: "ffxiv-raid", title: "Final Fantasy XIV", subtitle: "Raid", max_members: 8 },
    KnownActivity { key: "ffxiv-dungeon", title: "Final Fantasy XIV", subtitle: "Dungeon", max_members: 4 },
    KnownActivity { key: "wow-raid", title: "World of Warcraft", subtitle: "Raid", max_members: 20 },
    KnownActivity { key: "wow-mythic", title: "World of Warcraft", subtitle: "Mythic+", max_members: 5 },
    KnownActivity { key: "valorant", title: "Valorant", subtitle: "Competitive", max_members: 5 },
    KnownActivity { key: "overwatch", title: "Overwatch 2", subtitle: "Competitive", max_members: 5 },
    KnownActivity { key: "apex", title: "Apex Legends", subtitle: "Ranked", max_members: 3 },
    KnownActivity { key: "lethal-company", title: "Lethal Company", subtitle: "", max_members: 4 },
    KnownActivity { key: "among-us", title: "Among Us", subtitle: "", max_members: 15 },
    KnownActivity { key: "minecraft", title: "Minecraft", subtitle: "", max_members: 10 },
    KnownActivity { key: "helldivers", title: "Helldivers 2", subtitle: "", max_members: 4 },
];

impl Activity {
    /// Looks up a catalogue activity by its select menu key.
    pub fn known(key: &str) -> Option<Self> {
        KNOWN_ACTIVITIES
            .iter()
            .find(|known| known.key == key)
            .map(KnownActivity::activity)
    }

    /// Validates the raw values of the custom activity modal.
    ///
    /// # Returns
    /// - `Ok(Activity)` - All values are acceptable
    /// - `Err(Vec<String>)` - One human-readable problem per invalid input
    pub fn from_custom_input(
        title: &str,
        subtitle: &str,
        max_members: &str,
    ) -> Result<Self, Vec<String>> {
        let title = title.trim();
        let subtitle = subtitle.trim();
        let mut problems = Vec::new();

        if title.is_empty() {
            problems.push("The activity title cannot be empty.".to_string());
        } else if title.chars().count() > TITLE_MAX_LEN {
            problems.push(format!(
                "The activity title must be at most {} characters.",
                TITLE_MAX_LEN
            ));
        }

        if subtitle.chars().count() > SUBTITLE_MAX_LEN {
            problems.push(format!(
                "The activity subtitle must be at most {} characters.",
                SUBTITLE_MAX_LEN
            ));
        }

        if title.contains(PAYLOAD_SEPARATOR) || subtitle.contains(PAYLOAD_SEPARATOR) {
            problems.push(format!(
                "The activity title and subtitle cannot contain `{}`.",
                PAYLOAD_SEPARATOR
            ));
        }

        let max_members = match max_members.trim().parse::<u8>() {
            Ok(count) if (1..=MAX_MEMBERS_LIMIT).contains(&count) => Some(count),
            _ => {
                problems.push(format!(
                    "The maximum members must be a whole number from 1 to {}.",
                    MAX_MEMBERS_LIMIT
                ));
                None
            }
        };

        match max_members {
            Some(max_members) if problems.is_empty() => Ok(Self {
                title: title.to_string(),
                subtitle: subtitle.to_string(),
                max_members,
            }),
            _ => Err(problems),
        }
    }

    /// Display label, e.g. `Destiny 2: Raid`.
    pub fn label(&self) -> String {
        if self.subtitle.is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.subtitle)
        }
    }

    /// Encodes the activity as `maxMembers@title@subtitle`.
    pub fn to_payload(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.max_members,
            self.title,
            self.subtitle,
            sep = PAYLOAD_SEPARATOR
        )
    }

    /// Decodes a payload produced by `to_payload`.
    pub fn from_payload(payload: &str) -> Option<Self> {
        let mut parts = payload.splitn(3, PAYLOAD_SEPARATOR);
        let max_members = parts.next()?.parse::<u8>().ok()?;
        let title = parts.next()?;
        let subtitle = parts.next()?;

        if title.is_empty() || max_members == 0 {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            max_members,
        })
    }
}
