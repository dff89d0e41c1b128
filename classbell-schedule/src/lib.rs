//! Class-period schedule for the Classbell greeting.
//!
//! This crate holds the pure part of the system: the static period table,
//! the validated [`SchoolTime`] input, the [`resolve`] function mapping a
//! moment to a [`ResolvedState`], and the localized [`DisplayMessage`] built
//! from a resolved state. Nothing here touches the clock or spawns tasks;
//! the refresh driver lives in `classbell-refresh`.

mod error;
mod locale;
mod message;
mod resolver;
mod table;
mod time;

pub use error::ScheduleError;
pub use locale::Locale;
pub use message::DisplayMessage;
pub use resolver::{resolve, ResolvedState};
pub use table::{
    PeriodDefinition, ScheduleTable, BREAK_MINUTES, FIRST_PERIOD_START, PERIOD_COUNT,
    PERIOD_MINUTES, SESSION_CLOSE,
};
pub use time::{parse_clock, parse_weekday, SchoolTime, MINUTES_PER_DAY};
