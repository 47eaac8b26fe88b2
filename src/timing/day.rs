use std::str::FromStr;

use chrono::Weekday;

/// The day rule of an operating-hours row.
///
/// Besides a plain weekday the backend uses two sentinels: `Everyday` and
/// `Except Holidays`. Holidays are not modelled, so the latter simply means
/// Monday to Friday.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DayOfWeek {
    Day(Weekday),
    Everyday,
    ExceptHolidays,
}

impl DayOfWeek {
    pub fn applies_to(&self, weekday: Weekday) -> bool {
        match self {
            DayOfWeek::Day(day) => *day == weekday,
            DayOfWeek::Everyday => true,
            DayOfWeek::ExceptHolidays => weekday.num_days_from_monday() < 5,
        }
    }

    /// Lower wins when several rows apply to the same day.
    pub fn precedence(&self) -> u8 {
        match self {
            DayOfWeek::Day(_) => 0,
            DayOfWeek::Everyday => 1,
            DayOfWeek::ExceptHolidays => 2,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim() {
            "Everyday" => DayOfWeek::Everyday,
            "Except Holidays" => DayOfWeek::ExceptHolidays,
            "Monday" => DayOfWeek::Day(Weekday::Mon),
            "Tuesday" => DayOfWeek::Day(Weekday::Tue),
            "Wednesday" => DayOfWeek::Day(Weekday::Wed),
            "Thursday" => DayOfWeek::Day(Weekday::Thu),
            "Friday" => DayOfWeek::Day(Weekday::Fri),
            "Saturday" => DayOfWeek::Day(Weekday::Sat),
            "Sunday" => DayOfWeek::Day(Weekday::Sun),
            other => return Err(format!("Unknown day of week '{}'", other)),
        };
        Ok(day)
    }
}

/// English name of a weekday, matching the backend vocabulary.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_weekdays_and_sentinels() {
        assert_eq!("Tuesday".parse::<DayOfWeek>(), Ok(DayOfWeek::Day(Weekday::Tue)));
        assert_eq!("Everyday".parse::<DayOfWeek>(), Ok(DayOfWeek::Everyday));
        assert_eq!("Except Holidays".parse::<DayOfWeek>(), Ok(DayOfWeek::ExceptHolidays));
        assert!("Funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn except_holidays_covers_weekdays_only() {
        let rule = DayOfWeek::ExceptHolidays;
        assert!(rule.applies_to(Weekday::Mon));
        assert!(rule.applies_to(Weekday::Fri));
        assert!(!rule.applies_to(Weekday::Sat));
        assert!(!rule.applies_to(Weekday::Sun));
    }

    #[test]
    fn names_round_trip_through_parse() {
        for weekday in [Weekday::Mon, Weekday::Thu, Weekday::Sun] {
            assert_eq!(day_name(weekday).parse::<DayOfWeek>(), Ok(DayOfWeek::Day(weekday)));
        }
    }
}
