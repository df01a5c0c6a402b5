//! Parsing of the start time, time zone, and date typed into the event details modal.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::wizard::WizardError;

const HOUR: i32 = 3600;

#[rustfmt::skip]
const ZONE_ABBREVIATIONS: &[(&str, i32)] = &[
    ("UTC", 0), ("GMT", 0), ("Z", 0), ("WET", 0),
    ("BST", 1), ("WEST", 1), ("CET", 1), ("CEST", 2), ("EET", 2), ("EEST", 3),
    ("EST", -5), ("EDT", -4), ("CST", -6), ("CDT", -5),
    ("MST", -7), ("MDT", -6), ("PST", -8), ("PDT", -7),
    ("AKST", -9), ("AKDT", -8), ("HST", -10),
];

/// Parses `HH:MM` (24 hour), `H:MM AM/PM`, or `H AM/PM`.
pub fn parse_time(input: &str) -> Result<NaiveTime, WizardError> {
    let invalid = || WizardError::InvalidStartTime(input.to_string());
    let normalized = input.trim().to_lowercase().replace(' ', "");

    let (clock, meridiem) = if let Some(clock) = normalized.strip_suffix("am") {
        (clock, Some(false))
    } else if let Some(clock) = normalized.strip_suffix("pm") {
        (clock, Some(true))
    } else {
        (normalized.as_str(), None)
    };

    let (hour, minute) = match clock.split_once(':') {
        Some((hour, minute)) if minute.len() == 2 => (hour, minute),
        Some(_) => return Err(invalid()),
        None if meridiem.is_some() => (clock, "00"),
        None => return Err(invalid()),
    };

    let hour = hour.parse::<u32>().map_err(|_| invalid())?;
    let minute = minute.parse::<u32>().map_err(|_| invalid())?;

    let hour = match meridiem {
        Some(_) if !(1..=12).contains(&hour) => return Err(invalid()),
        Some(false) => hour % 12,
        Some(true) => hour % 12 + 12,
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Parses `UTC`, `GMT`, `UTC±H[:MM]`, or a common US/EU abbreviation.
///
/// An empty input means UTC.
pub fn parse_zone(input: &str) -> Result<FixedOffset, WizardError> {
    let invalid = || WizardError::InvalidTimeZone(input.to_string());
    let normalized = input.trim().to_uppercase().replace(' ', "");

    if normalized.is_empty() {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    if let Some((_, hours)) = ZONE_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == normalized)
    {
        return FixedOffset::east_opt(hours * HOUR).ok_or_else(invalid);
    }

    let offset = normalized
        .strip_prefix("UTC")
        .or_else(|| normalized.strip_prefix("GMT"))
        .ok_or_else(invalid)?;

    let (sign, offset) = match offset.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(invalid()),
    };

    let (hours, minutes) = offset.split_once(':').unwrap_or((offset, "0"));
    let hours = parse_unsigned(hours).ok_or_else(invalid)?;
    let minutes = parse_unsigned(minutes).ok_or_else(invalid)?;

    if hours > 14 || minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * HOUR + minutes * 60)).ok_or_else(invalid)
}

/// Parses an unsigned run of ASCII digits, rejecting any sign.
fn parse_unsigned(digits: &str) -> Option<i32> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    digits.parse::<i32>().ok()
}

/// Parses `YYYY-MM-DD`, `MM/DD/YYYY`, `today`, or `tomorrow`.
///
/// An empty input means `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, WizardError> {
    let invalid = || WizardError::InvalidStartDate(input.to_string());
    let normalized = input.trim().to_lowercase();

    match normalized.as_str() {
        "" | "today" => Ok(today),
        "tomorrow" => today.succ_opt().ok_or_else(invalid),
        date => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(date, "%m/%d/%Y"))
            .map_err(|_| invalid()),
    }
}

/// Resolves the modal inputs into a UTC start time.
///
/// `today` and `tomorrow` are relative to `now` in the given zone.
pub fn resolve_start(
    time: &str,
    zone: &str,
    date: &str,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, WizardError> {
    let offset = parse_zone(zone)?;
    let time = parse_time(time)?;
    let today = now.with_timezone(&offset).date_naive();
    let date = parse_date(date, today)?;

    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|start| start.with_timezone(&Utc))
        .ok_or_else(|| WizardError::InvalidStartDate(date.to_string()))
}
