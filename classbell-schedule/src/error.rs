use thiserror::Error;

/// Errors raised while building schedule inputs from untrusted values.
///
/// The resolver itself never fails; these only come from constructors and
/// parsers that validate caller input before it reaches [`crate::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("day index must be 0 (Sunday) through 6 (Saturday), got {0}")]
    InvalidDay(u32),
    #[error("hour must be 0 through 23, got {0}")]
    InvalidHour(u32),
    #[error("minute must be 0 through 59, got {0}")]
    InvalidMinute(u32),
    #[error("unknown day name: {0}")]
    UnknownDay(String),
    #[error("malformed clock time {0:?}, expected HH:MM")]
    MalformedClock(String),
    #[error("malformed school time {0:?}, expected \"<day> HH:MM\"")]
    MalformedTime(String),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
