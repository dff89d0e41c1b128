use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::resolver::ResolvedState;
use crate::table::{format_clock, ScheduleTable, PERIOD_MINUTES};
use crate::time::SchoolTime;

/// Display-ready greeting for one evaluation: a headline plus zero or more
/// detail lines (period info, countdown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMessage {
    pub headline: String,
    pub details: Vec<String>,
}

impl DisplayMessage {
    /// Composes the message for `state` using the standard table.
    pub fn compose(time: SchoolTime, state: ResolvedState, locale: Locale) -> Self {
        Self::compose_with(&ScheduleTable::standard(), time, state, locale)
    }

    /// Composes the message, looking period windows up in `table`.
    pub fn compose_with(
        table: &ScheduleTable,
        time: SchoolTime,
        state: ResolvedState,
        locale: Locale,
    ) -> Self {
        let day = locale.day_name(time.weekday());
        match state {
            ResolvedState::Weekend => Self {
                headline: match locale {
                    Locale::Korean => "좋은 주말 보내세요!".to_string(),
                    Locale::English => "Have a great weekend!".to_string(),
                },
                details: Vec::new(),
            },
            // Before and after hours read the same to the user.
            ResolvedState::BeforeHours | ResolvedState::AfterHours => match locale {
                Locale::Korean => Self {
                    headline: format!("오늘은 {day}요일"),
                    details: vec!["수업 시간이 아닙니다".to_string()],
                },
                Locale::English => Self {
                    headline: format!("Today is {day}"),
                    details: vec!["No classes right now".to_string()],
                },
            },
            ResolvedState::InClass {
                period_number,
                minutes_remaining_in_period,
            } => {
                let window = table
                    .period(period_number)
                    .map(|period| period.clock_label());
                match locale {
                    Locale::Korean => {
                        let mut details = Vec::with_capacity(2);
                        if let Some(window) = window {
                            details.push(format!(
                                "{period_number}교시: {window} ({PERIOD_MINUTES}분)"
                            ));
                        }
                        details.push(format!(
                            "다음 쉬는 시간까지 {minutes_remaining_in_period}분 남았어요"
                        ));
                        Self {
                            headline: format!("지금은 {day}요일 {period_number}교시에요"),
                            details,
                        }
                    }
                    Locale::English => {
                        let mut details = Vec::with_capacity(2);
                        if let Some(window) = window {
                            details.push(format!(
                                "Period {period_number}: {window} ({PERIOD_MINUTES} min)"
                            ));
                        }
                        if table.break_after(period_number).is_some() {
                            details.push(format!(
                                "{minutes_remaining_in_period} min until the next break"
                            ));
                        } else {
                            details.push(format!(
                                "{minutes_remaining_in_period} min until the period ends"
                            ));
                        }
                        Self {
                            headline: format!("It's {day}, period {period_number}"),
                            details,
                        }
                    }
                }
            }
            ResolvedState::OnBreak {
                preceding_period_number,
                minutes_remaining_in_break,
            } => {
                let upcoming = preceding_period_number + 1;
                let window = table
                    .break_after(preceding_period_number)
                    .map(|(start, end)| format!("{}~{}", format_clock(start), format_clock(end)));
                match locale {
                    Locale::Korean => {
                        let mut details = Vec::with_capacity(2);
                        if let Some(window) = window {
                            details.push(format!("쉬는 시간: {window}"));
                        }
                        details.push(format!(
                            "다음 수업까지 {minutes_remaining_in_break}분 남았어요"
                        ));
                        Self {
                            headline: format!("지금은 {day}요일 {upcoming}교시 쉬는 시간이에요"),
                            details,
                        }
                    }
                    Locale::English => {
                        let mut details = Vec::with_capacity(2);
                        if let Some(window) = window {
                            details.push(format!("Break: {window}"));
                        }
                        details.push(format!(
                            "{minutes_remaining_in_break} min until the next class"
                        ));
                        Self {
                            headline: format!("It's {day}, break before period {upcoming}"),
                            details,
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for DisplayMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline)?;
        for line in &self.details {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    fn message(text: &str, locale: Locale) -> DisplayMessage {
        let time: SchoolTime = text.parse().unwrap();
        DisplayMessage::compose(time, resolve(time), locale)
    }

    #[test]
    fn weekend_greeting_has_no_details() {
        let msg = message("sat 10:00", Locale::Korean);
        assert_eq!(msg.headline, "좋은 주말 보내세요!");
        assert!(msg.details.is_empty());
        assert_eq!(msg.to_string(), "좋은 주말 보내세요!");
    }

    #[test]
    fn class_message_names_period_and_countdown() {
        let msg = message("mon 09:10", Locale::Korean);
        assert_eq!(msg.headline, "지금은 월요일 1교시에요");
        assert_eq!(
            msg.details,
            vec![
                "1교시: 09:00 ~ 09:50 (50분)".to_string(),
                "다음 쉬는 시간까지 40분 남았어요".to_string(),
            ]
        );
    }

    #[test]
    fn break_message_points_at_the_next_period() {
        let msg = message("thu 13:52", Locale::Korean);
        assert_eq!(msg.headline, "지금은 목요일 6교시 쉬는 시간이에요");
        assert_eq!(
            msg.details,
            vec![
                "쉬는 시간: 13:50~14:00".to_string(),
                "다음 수업까지 8분 남았어요".to_string(),
            ]
        );
    }

    #[test]
    fn before_and_after_hours_collapse_to_one_message() {
        let early = message("tue 08:59", Locale::Korean);
        let late = message("tue 19:00", Locale::Korean);
        assert_eq!(early, late);
        assert_eq!(early.to_string(), "오늘은 화요일\n수업 시간이 아닙니다");
    }

    #[test]
    fn english_messages() {
        assert_eq!(
            message("fri 18:20", Locale::English).to_string(),
            "It's Friday, period 10\nPeriod 10: 18:00 ~ 18:50 (50 min)\n30 min until the period ends"
        );
        assert_eq!(
            message("fri 17:20", Locale::English).details.last().unwrap(),
            "30 min until the next break"
        );
        assert_eq!(
            message("wed 09:50", Locale::English).headline,
            "It's Wednesday, break before period 2"
        );
        assert_eq!(message("sun 12:00", Locale::English).headline, "Have a great weekend!");
        assert_eq!(message("mon 07:00", Locale::English).headline, "Today is Monday");
    }
}
