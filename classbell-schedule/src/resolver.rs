use serde::{Deserialize, Serialize};

use crate::table::ScheduleTable;
use crate::time::SchoolTime;

/// Where a moment falls relative to the teaching day.
///
/// Exactly one variant applies to any `(weekday, minute)` pair. Values are
/// recomputed on every evaluation and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResolvedState {
    Weekend,
    BeforeHours,
    AfterHours,
    InClass {
        period_number: u8,
        minutes_remaining_in_period: u16,
    },
    OnBreak {
        preceding_period_number: u8,
        minutes_remaining_in_break: u16,
    },
}

impl ResolvedState {
    /// True while a period or the break between two periods is running.
    pub fn is_in_session(&self) -> bool {
        matches!(
            self,
            ResolvedState::InClass { .. } | ResolvedState::OnBreak { .. }
        )
    }

    pub fn minutes_remaining(&self) -> Option<u16> {
        match self {
            ResolvedState::InClass {
                minutes_remaining_in_period,
                ..
            } => Some(*minutes_remaining_in_period),
            ResolvedState::OnBreak {
                minutes_remaining_in_break,
                ..
            } => Some(*minutes_remaining_in_break),
            _ => None,
        }
    }

    /// The period a break leads into.
    pub fn upcoming_period(&self) -> Option<u8> {
        match self {
            ResolvedState::OnBreak {
                preceding_period_number,
                ..
            } => Some(preceding_period_number + 1),
            _ => None,
        }
    }

    /// Short tag used in logs and JSON consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedState::Weekend => "weekend",
            ResolvedState::BeforeHours => "before_hours",
            ResolvedState::AfterHours => "after_hours",
            ResolvedState::InClass { .. } => "in_class",
            ResolvedState::OnBreak { .. } => "on_break",
        }
    }
}

/// Resolves `now` against the standard ten-period table.
pub fn resolve(now: SchoolTime) -> ResolvedState {
    ScheduleTable::standard().resolve(now)
}

impl ScheduleTable {
    /// Maps a moment onto the schedule. Total over every valid
    /// [`SchoolTime`]; intervals are half-open so a boundary minute belongs to
    /// the interval it opens.
    pub fn resolve(&self, now: SchoolTime) -> ResolvedState {
        if now.is_weekend() {
            return ResolvedState::Weekend;
        }

        let minute = now.minute_of_day();
        let periods = self.periods();
        for (index, period) in periods.iter().enumerate() {
            let end = period.end_minute();
            if period.contains(minute) {
                return ResolvedState::InClass {
                    period_number: period.period_number,
                    minutes_remaining_in_period: end - minute,
                };
            }
            if let Some(next) = periods.get(index + 1) {
                if end <= minute && minute < next.start_minute {
                    return ResolvedState::OnBreak {
                        preceding_period_number: period.period_number,
                        minutes_remaining_in_break: next.start_minute - minute,
                    };
                }
            }
        }

        if minute < self.first_start() {
            ResolvedState::BeforeHours
        } else {
            ResolvedState::AfterHours
        }
    }
}
