use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use serde::Serialize;

use crate::error::ScheduleError;
use crate::table::format_clock;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A moment reduced to what the resolver needs: the weekday and the minute
/// of day.
///
/// Every constructor validates its input, so a `SchoolTime` always holds a
/// minute in `0..1440`. Callers holding raw hour/minute/day values must go
/// through [`SchoolTime::new`] before resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SchoolTime {
    weekday: Weekday,
    minute_of_day: u16,
}

impl SchoolTime {
    /// Builds a time from a day index (0 = Sunday .. 6 = Saturday), an hour
    /// and a minute.
    pub fn new(day_index: u32, hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        let weekday = weekday_from_index(day_index)?;
        Self::from_weekday(weekday, hour, minute)
    }

    pub fn from_weekday(weekday: Weekday, hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(ScheduleError::InvalidMinute(minute));
        }
        Ok(Self {
            weekday,
            minute_of_day: (hour * 60 + minute) as u16,
        })
    }

    /// Reads weekday, hour and minute in the datetime's own zone. Seconds are
    /// dropped, matching a display that refreshes once a minute.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            weekday: datetime.weekday(),
            minute_of_day: (datetime.hour() * 60 + datetime.minute()) as u16,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn day_index(&self) -> u32 {
        self.weekday.num_days_from_sunday()
    }

    pub fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    pub fn hour(&self) -> u16 {
        self.minute_of_day / 60
    }

    pub fn minute(&self) -> u16 {
        self.minute_of_day % 60
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }

    /// Moves forward by `minutes`, rolling over midnight into the next
    /// weekday. Whole weeks are dropped first, so any `u32` is accepted.
    pub fn plus_minutes(self, minutes: u32) -> Self {
        let day_minutes = MINUTES_PER_DAY as u32;
        let total = self.minute_of_day as u32 + minutes % (7 * day_minutes);
        let mut weekday = self.weekday;
        for _ in 0..total / day_minutes {
            weekday = weekday.succ();
        }
        Self {
            weekday,
            minute_of_day: (total % day_minutes) as u16,
        }
    }
}

impl fmt::Display for SchoolTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, format_clock(self.minute_of_day))
    }
}

/// Parses `"<day> HH:MM"`, e.g. `"mon 09:30"`, `"1 09:30"` or `"월 09:30"`.
impl FromStr for SchoolTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(day), Some(clock), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ScheduleError::MalformedTime(s.to_string()));
        };
        let weekday = parse_weekday(day)?;
        let (hour, minute) = parse_clock(clock)?;
        Self::from_weekday(weekday, hour, minute)
    }
}

fn weekday_from_index(index: u32) -> Result<Weekday, ScheduleError> {
    let weekday = match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        other => return Err(ScheduleError::InvalidDay(other)),
    };
    Ok(weekday)
}

/// Accepts a 0..=6 index, an English name or abbreviation, or a Korean day
/// syllable (with or without the trailing `요일`).
pub fn parse_weekday(raw: &str) -> Result<Weekday, ScheduleError> {
    let trimmed = raw.trim();
    if let Ok(index) = trimmed.parse::<u32>() {
        return weekday_from_index(index);
    }

    let korean = trimmed.trim_end_matches("요일");
    let weekday = match korean {
        "일" => Some(Weekday::Sun),
        "월" => Some(Weekday::Mon),
        "화" => Some(Weekday::Tue),
        "수" => Some(Weekday::Wed),
        "목" => Some(Weekday::Thu),
        "금" => Some(Weekday::Fri),
        "토" => Some(Weekday::Sat),
        _ => None,
    };
    if let Some(weekday) = weekday {
        return Ok(weekday);
    }

    trimmed
        .parse::<Weekday>()
        .map_err(|_| ScheduleError::UnknownDay(trimmed.to_string()))
}

/// Parses `HH:MM` into hour and minute, range-checking both.
pub fn parse_clock(raw: &str) -> Result<(u32, u32), ScheduleError> {
    let malformed = || ScheduleError::MalformedClock(raw.to_string());
    let (hour, minute) = raw.trim().split_once(':').ok_or_else(malformed)?;
    let hour: u32 = hour.parse().map_err(|_| malformed())?;
    let minute: u32 = minute.parse().map_err(|_| malformed())?;
    if hour > 23 {
        return Err(ScheduleError::InvalidHour(hour));
    }
    if minute > 59 {
        return Err(ScheduleError::InvalidMinute(minute));
    }
    Ok((hour, minute))
}
