use chrono::Weekday;
use serde::Serialize;

use super::{
    day::day_name,
    operating_hours::{format_minutes, Window},
};

/// Hours of a single day, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyHours {
    day: &'static str,
    opening: Option<String>,
    closing: Option<String>,
    open: bool,
}

impl DailyHours {
    pub fn new_open(weekday: Weekday, window: Window) -> Self {
        Self {
            day: day_name(weekday),
            opening: Some(format_minutes(window.opening())),
            closing: Some(format_minutes(window.closing())),
            open: true,
        }
    }

    pub fn new_closed(weekday: Weekday) -> Self {
        Self {
            day: day_name(weekday),
            opening: None,
            closing: None,
            open: false,
        }
    }

    pub fn day(&self) -> &'static str {
        self.day
    }

    pub fn open(&self) -> bool {
        self.open
    }

    pub fn opening(&self) -> Option<&str> {
        self.opening.as_deref()
    }

    pub fn closing(&self) -> Option<&str> {
        self.closing.as_deref()
    }
}

/// Monday first.
pub type WeeklyHours = [DailyHours; 7];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn closed_day_has_no_times() {
        let closed = DailyHours::new_closed(Weekday::Sun);
        assert!(!closed.open());
        assert_eq!(closed.opening(), None);
        assert_eq!(
            serde_json::to_string(&closed).unwrap(),
            r#"{"day":"Sunday","opening":null,"closing":null,"open":false}"#
        );
    }

    #[test]
    fn open_day_is_formatted() {
        let open = DailyHours::new_open(Weekday::Wed, Window::new(9 * 60 + 5, 22 * 60));
        assert_eq!(open.day(), "Wednesday");
        assert_eq!(open.opening(), Some("09:05"));
        assert_eq!(open.closing(), Some("22:00"));
    }
}
