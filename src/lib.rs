//! Classbell: class-period greeting for a university assistant.
//!
//! Classbell tells a weekday apart into class periods, the breaks between
//! them and the hours outside the teaching day, and keeps a localized
//! greeting up to date on a timer.
//!
//! # Architecture
//!
//! The workspace is split into crates, re-exported here:
//!
//! * `classbell-schedule`: the period table, [`SchoolTime`], [`resolve`] and
//!   message composition. Pure, no clock access.
//! * `classbell-core`: errors, environment configuration, tracing setup.
//! * `classbell-refresh`: the [`RefreshDriver`] that re-resolves on a fixed
//!   cadence and publishes a [`DisplayState`].
//! * `classbell-cli`: the `classbell` binary.

pub use classbell_core::{config, errors, logging, ClassbellConfig, ClassbellError, CoreResult};
pub use classbell_refresh::{
    DisplayState, FixedClock, RefreshDriver, RefreshError, RefreshHandle, SystemClock, TimeSource,
};
pub use classbell_schedule::{
    resolve, DisplayMessage, Locale, PeriodDefinition, ResolvedState, ScheduleError,
    ScheduleTable, SchoolTime,
};

/// Resolves `time` and composes its greeting in one call.
pub fn greeting_at(time: SchoolTime, locale: Locale) -> DisplayMessage {
    DisplayMessage::compose(time, resolve(time), locale)
}
