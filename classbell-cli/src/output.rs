use classbell_refresh::DisplayState;
use classbell_schedule::{Locale, ResolvedState, ScheduleTable, PERIOD_MINUTES};
use colored::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] classbell_core::ClassbellError),
    #[error("invalid time: {0}")]
    Schedule(#[from] classbell_schedule::ScheduleError),
    #[error(transparent)]
    Refresh(#[from] classbell_refresh::RefreshError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One JSON object per evaluation, tagged by `state`.
pub fn state_json(state: &DisplayState) -> Result<String, CliError> {
    Ok(serde_json::to_string(state)?)
}

/// The timetable as a JSON array of period definitions.
pub fn schedule_json(table: &ScheduleTable) -> Result<String, CliError> {
    Ok(serde_json::to_string(table.periods())?)
}

pub fn print_state(state: &DisplayState, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", state_json(state)?);
        return Ok(());
    }

    let headline = match state.state {
        ResolvedState::InClass { .. } => state.message.headline.blue().bold(),
        ResolvedState::OnBreak { .. } => state.message.headline.green().bold(),
        _ => state.message.headline.bold(),
    };
    println!("{headline}");
    for line in &state.message.details {
        println!("  {}", line.dimmed());
    }
    Ok(())
}

pub fn print_schedule(table: &ScheduleTable, locale: Locale, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", schedule_json(table)?);
        return Ok(());
    }

    for period in table.periods() {
        let label = match locale {
            Locale::Korean => format!(
                "{}교시: {} ({}분)",
                period.period_number,
                period.clock_label(),
                PERIOD_MINUTES
            ),
            Locale::English => format!(
                "Period {}: {} ({} min)",
                period.period_number,
                period.clock_label(),
                PERIOD_MINUTES
            ),
        };
        println!("{}", label.bold());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use classbell_refresh::{FixedClock, RefreshDriver};
    use classbell_schedule::SchoolTime;
    use serde_json::Value;

    use super::*;

    #[test]
    fn schedule_json_lists_every_period() {
        let json = schedule_json(&ScheduleTable::standard()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let periods = value.as_array().expect("an array of periods");

        assert_eq!(periods.len(), 10);
        assert_eq!(periods[0]["period_number"], 1);
        assert_eq!(periods[0]["start_minute"], 540);
        assert_eq!(periods[9]["period_number"], 10);
        assert_eq!(periods[9]["start_minute"], 1080);
    }

    #[test]
    fn state_json_is_tagged_by_state() {
        let at = SchoolTime::new(4, 13, 52).unwrap();
        let driver = RefreshDriver::new(
            Arc::new(FixedClock::new(at)),
            Locale::English,
            Duration::from_secs(60),
        )
        .unwrap();

        let value: Value = serde_json::from_str(&state_json(&driver.evaluate(3)).unwrap()).unwrap();
        assert_eq!(value["state"]["state"], "on_break");
        assert_eq!(value["state"]["preceding_period_number"], 5);
        assert_eq!(value["state"]["minutes_remaining_in_break"], 8);
        assert_eq!(value["tick"], 3);
        assert_eq!(value["message"]["headline"], "It's Thursday, break before period 6");
    }

    #[test]
    fn printing_succeeds_in_both_modes() {
        let table = ScheduleTable::standard();
        print_schedule(&table, Locale::Korean, false).unwrap();
        print_schedule(&table, Locale::English, true).unwrap();
    }
}
