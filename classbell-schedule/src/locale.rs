use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Language used for day names and composed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Korean,
    English,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Korean => "ko",
            Locale::English => "en",
        }
    }

    pub fn day_name(&self, weekday: Weekday) -> &'static str {
        match self {
            Locale::Korean => match weekday {
                Weekday::Sun => "일",
                Weekday::Mon => "월",
                Weekday::Tue => "화",
                Weekday::Wed => "수",
                Weekday::Thu => "목",
                Weekday::Fri => "금",
                Weekday::Sat => "토",
            },
            Locale::English => match weekday {
                Weekday::Sun => "Sunday",
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" | "ko-kr" | "ko_kr" => Ok(Locale::Korean),
            "en" | "english" | "en-us" | "en_us" => Ok(Locale::English),
            other => Err(ScheduleError::UnknownLocale(other.to_string())),
        }
    }
}
