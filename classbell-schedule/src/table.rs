use serde::{Deserialize, Serialize};

/// Number of class periods in a weekday.
pub const PERIOD_COUNT: usize = 10;
/// Length of every class period.
pub const PERIOD_MINUTES: u16 = 50;
/// Gap between the end of one period and the start of the next.
pub const BREAK_MINUTES: u16 = 10;
/// Minute of day at which period 1 starts (09:00).
pub const FIRST_PERIOD_START: u16 = 9 * 60;
/// Minute of day at which the teaching day is considered closed (19:00).
pub const SESSION_CLOSE: u16 = 19 * 60;

const fn period(number: u8) -> PeriodDefinition {
    PeriodDefinition {
        period_number: number,
        start_minute: (8 + number as u16) * 60,
    }
}

static STANDARD_PERIODS: [PeriodDefinition; PERIOD_COUNT] = [
    period(1),
    period(2),
    period(3),
    period(4),
    period(5),
    period(6),
    period(7),
    period(8),
    period(9),
    period(10),
];

/// A single class slot. Periods are half-open: `[start, start + 50)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDefinition {
    pub period_number: u8,
    pub start_minute: u16,
}

impl PeriodDefinition {
    pub fn end_minute(&self) -> u16 {
        self.start_minute + PERIOD_MINUTES
    }

    /// Whether `minute` falls inside the period. The end minute belongs to
    /// whatever follows.
    pub fn contains(&self, minute: u16) -> bool {
        self.start_minute <= minute && minute < self.end_minute()
    }

    /// Clock label such as `09:00 ~ 09:50`.
    pub fn clock_label(&self) -> String {
        format!(
            "{} ~ {}",
            format_clock(self.start_minute),
            format_clock(self.end_minute())
        )
    }
}

/// Ordered, immutable list of the day's class periods.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleTable {
    periods: &'static [PeriodDefinition],
}

impl ScheduleTable {
    /// The canonical ten-period table, 09:00 through 18:50.
    pub fn standard() -> Self {
        Self {
            periods: &STANDARD_PERIODS,
        }
    }

    pub fn periods(&self) -> &[PeriodDefinition] {
        self.periods
    }

    /// Looks a period up by its 1-based number.
    pub fn period(&self, number: u8) -> Option<&PeriodDefinition> {
        self.periods.iter().find(|p| p.period_number == number)
    }

    pub fn first_start(&self) -> u16 {
        self.periods
            .first()
            .map(|p| p.start_minute)
            .unwrap_or(FIRST_PERIOD_START)
    }

    pub fn last_end(&self) -> u16 {
        self.periods
            .last()
            .map(PeriodDefinition::end_minute)
            .unwrap_or(FIRST_PERIOD_START)
    }

    /// Break window `[end_n, start_{n+1})` that follows period `number`.
    /// The last period has no break after it.
    pub fn break_after(&self, number: u8) -> Option<(u16, u16)> {
        let index = self.periods.iter().position(|p| p.period_number == number)?;
        let next = self.periods.get(index + 1)?;
        Some((self.periods[index].end_minute(), next.start_minute))
    }
}

impl Default for ScheduleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Formats a minute of day as zero-padded `HH:MM`.
pub(crate) fn format_clock(minute_of_day: u16) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}
