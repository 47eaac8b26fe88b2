use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::Tz;

const SECONDS_PER_HOUR: i32 = 60 * 60;

/// The timezone schedules are written in.
///
/// Either a fixed UTC offset or a named zone. All evaluation happens on the
/// wall clock of this region, whatever the host is configured to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Region {
    Fixed(FixedOffset),
    Named(Tz),
}

impl Region {
    /// Current wall-clock time in the region.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.at(Utc::now())
    }

    pub fn at(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Region::Fixed(offset) => instant.with_timezone(offset),
            Region::Named(tz) => {
                let local = instant.with_timezone(tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Builds the instant that reads `hour:minute` on the given local date.
    /// Mostly useful for tests and for replaying a schedule at a fixed time.
    pub fn local(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Option<DateTime<FixedOffset>> {
        let utc = match self {
            Region::Fixed(offset) => offset
                .with_ymd_and_hms(year, month, day, hour, minute, 0)
                .single()?
                .with_timezone(&Utc),
            Region::Named(tz) => tz
                .with_ymd_and_hms(year, month, day, hour, minute, 0)
                .earliest()?
                .with_timezone(&Utc),
        };
        Some(self.at(utc))
    }
}

impl Default for Region {
    /// UTC+7, where the schedules of the province are kept.
    fn default() -> Self {
        Region::Fixed(FixedOffset::east_opt(7 * SECONDS_PER_HOUR).unwrap())
    }
}

impl FromStr for Region {
    type Err = String;

    /// Accepts an IANA name (`Asia/Bangkok`) or an offset (`+07:00`, `-03:30`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(Region::Named(tz));
        }
        parse_offset(s)
            .map(Region::Fixed)
            .ok_or_else(|| format!("Unknown timezone '{}'", s))
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    // i32::parse takes its own sign, so "+-05:00" would slip through
    if !is_digits(hours) || !is_digits(minutes) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * SECONDS_PER_HOUR + minutes * 60))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
