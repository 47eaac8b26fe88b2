use std::fmt::Display;

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    clock::Region,
    daily::{DailyHours, WeeklyHours},
    operating_hours::{OperatingHoursEntry, Window},
};

pub const DEFAULT_SOON_THRESHOLD_MIN: u16 = 60;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextEvent {
    #[serde(rename = "Opening Soon")]
    OpeningSoon,
    #[serde(rename = "Closing Soon")]
    ClosingSoon,
}

impl Display for NextEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NextEvent::OpeningSoon => write!(f, "Opening Soon"),
            NextEvent::ClosingSoon => write!(f, "Closing Soon"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaceStatus {
    pub open: bool,
    pub event: Option<NextEvent>,
}

/// The weekly operating hours of one place.
///
/// Holds the rows exactly as fetched. Every query selects the row for the
/// day in question: a specific weekday beats `Everyday`, which beats
/// `Except Holidays`, and ties go to the earlier row. Rows that are
/// missing or malformed read as closed, never as an error.
#[derive(Clone, Debug)]
pub struct Schedule {
    entries: Vec<OperatingHoursEntry>,
    soon_threshold_min: u16,
}

impl Schedule {
    pub fn new(entries: Vec<OperatingHoursEntry>) -> Self {
        Self {
            entries,
            soon_threshold_min: DEFAULT_SOON_THRESHOLD_MIN,
        }
    }

    pub fn with_soon_threshold(mut self, minutes: u16) -> Self {
        self.soon_threshold_min = minutes;
        self
    }

    pub fn entries(&self) -> &[OperatingHoursEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The row that governs `weekday`, if any.
    pub fn entry_for(&self, weekday: Weekday) -> Option<&OperatingHoursEntry> {
        self.entries
            .iter()
            .filter_map(|entry| entry.day().map(|day| (day, entry)))
            .filter(|(day, _)| day.applies_to(weekday))
            // min_by_key keeps the first of equal keys
            .min_by_key(|(day, _)| day.precedence())
            .map(|(_, entry)| entry)
    }

    fn window_for(&self, weekday: Weekday) -> Option<Window> {
        self.entry_for(weekday)?.window()
    }

    pub fn is_open(&self, timestamp: DateTime<FixedOffset>) -> bool {
        let Some(window) = self.window_for(timestamp.weekday()) else {
            debug!("No usable hours for {}", timestamp.weekday());
            return false;
        };
        window.contains(minute_of_day(timestamp))
    }

    /// Opening or closing within the threshold, judged on today's row only.
    pub fn next_event(&self, timestamp: DateTime<FixedOffset>) -> Option<NextEvent> {
        let window = self.window_for(timestamp.weekday())?;
        window_event(window, minute_of_day(timestamp), self.soon_threshold_min)
    }

    pub fn status(&self, timestamp: DateTime<FixedOffset>) -> PlaceStatus {
        PlaceStatus {
            open: self.is_open(timestamp),
            event: self.next_event(timestamp),
        }
    }

    pub fn weekly_hours(&self) -> WeeklyHours {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .map(|weekday| match self.window_for(weekday) {
            Some(window) => DailyHours::new_open(weekday, window),
            None => DailyHours::new_closed(weekday),
        })
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Whether a place with these rows is open right now in `region`.
pub fn is_open_now(entries: Option<&[OperatingHoursEntry]>, region: &Region) -> bool {
    match entries {
        None => false,
        Some(entries) => Schedule::new(entries.to_vec()).is_open(region.now()),
    }
}

/// Checks one opening/closing pair against `timestamp`.
///
/// Malformed times give `None`.
pub fn time_until_next_event(
    opening_time: &str,
    closing_time: &str,
    timestamp: DateTime<FixedOffset>,
    threshold_min: u16,
) -> Option<NextEvent> {
    let window = Window::parse(opening_time, closing_time)?;
    window_event(window, minute_of_day(timestamp), threshold_min)
}

fn window_event(window: Window, minute: u16, threshold_min: u16) -> Option<NextEvent> {
    if window.contains(minute) {
        if window.minutes_until_closing(minute) <= threshold_min {
            return Some(NextEvent::ClosingSoon);
        }
        return None;
    }
    if minute < window.opening() && window.opening() - minute <= threshold_min {
        return Some(NextEvent::OpeningSoon);
    }
    None
}

fn minute_of_day(timestamp: DateTime<FixedOffset>) -> u16 {
    (timestamp.hour() * 60 + timestamp.minute()) as u16
}
