use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::day::DayOfWeek;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// One operating-hours row of a place, as the backend sends it.
///
/// Times are kept as the raw `HH:MM` strings. They are only parsed when a
/// window is needed, and anything unparsable counts as closed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingHoursEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<i64>,
    #[serde(default)]
    pub day_of_week: Option<String>,
    #[serde(default)]
    pub opening_time: Option<String>,
    #[serde(default)]
    pub closing_time: Option<String>,
}

impl OperatingHoursEntry {
    pub fn new(day_of_week: &str, opening_time: &str, closing_time: &str) -> Self {
        Self {
            id: None,
            place_id: None,
            day_of_week: Some(day_of_week.to_string()),
            opening_time: Some(opening_time.to_string()),
            closing_time: Some(closing_time.to_string()),
        }
    }

    /// `None` for a missing or unknown day, which then matches no day at all.
    pub fn day(&self) -> Option<DayOfWeek> {
        self.day_of_week.as_deref()?.parse().ok()
    }

    /// `None` when either side is missing, empty or malformed.
    pub fn window(&self) -> Option<Window> {
        Window::parse(self.opening_time.as_deref()?, self.closing_time.as_deref()?)
    }
}

/// An opening/closing pair in minutes since midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    opening: u16,
    closing: u16,
}

impl Window {
    pub fn new(opening: u16, closing: u16) -> Self {
        Self { opening, closing }
    }

    pub fn parse(opening: &str, closing: &str) -> Option<Self> {
        Some(Self::new(parse_minutes(opening)?, parse_minutes(closing)?))
    }

    pub fn opening(&self) -> u16 {
        self.opening
    }

    pub fn closing(&self) -> u16 {
        self.closing
    }

    /// Closing earlier than opening means the window runs past midnight.
    pub fn is_overnight(&self) -> bool {
        self.closing < self.opening
    }

    /// Both ends are inclusive.
    pub fn contains(&self, minute: u16) -> bool {
        if self.is_overnight() {
            minute >= self.opening || minute <= self.closing
        } else {
            minute >= self.opening && minute <= self.closing
        }
    }

    /// Minutes left until closing, assuming `minute` is inside the window.
    pub fn minutes_until_closing(&self, minute: u16) -> u16 {
        if self.is_overnight() && minute >= self.opening {
            self.closing + MINUTES_PER_DAY - minute
        } else {
            self.closing.saturating_sub(minute)
        }
    }
}

/// Parses `HH:MM` (or `HH:MM:SS`) into minutes since midnight.
pub fn parse_minutes(time: &str) -> Option<u16> {
    let time = time.trim();
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    Some((parsed.hour() * 60 + parsed.minute()) as u16)
}

/// Formats minutes since midnight back into `HH:MM`.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
