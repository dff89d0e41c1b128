// Whole-domain checks for the period resolver: every minute of every day.
use classbell::{resolve, ResolvedState, ScheduleTable, SchoolTime};
use classbell_schedule::{FIRST_PERIOD_START, MINUTES_PER_DAY, SESSION_CLOSE};
use test_case::test_case;

fn all_times() -> impl Iterator<Item = SchoolTime> {
    (0..7u32).flat_map(|day| {
        (0..MINUTES_PER_DAY as u32)
            .map(move |minute| SchoolTime::new(day, minute / 60, minute % 60).expect("valid time"))
    })
}

#[test]
fn every_minute_resolves_to_exactly_the_expected_state() {
    let table = ScheduleTable::standard();
    let mut seen = 0usize;

    for time in all_times() {
        let state = resolve(time);
        let minute = time.minute_of_day();
        seen += 1;

        if time.is_weekend() {
            assert_eq!(state, ResolvedState::Weekend, "{time}");
            continue;
        }

        let in_period = table.periods().iter().find(|p| p.contains(minute));
        let in_break = table.periods().iter().find_map(|p| {
            table
                .break_after(p.period_number)
                .filter(|(start, end)| *start <= minute && minute < *end)
                .map(|(_, end)| (p.period_number, end))
        });
        assert!(
            in_period.is_none() || in_break.is_none(),
            "{time} is both in class and on break"
        );

        match (in_period, in_break) {
            (Some(period), None) => assert_eq!(
                state,
                ResolvedState::InClass {
                    period_number: period.period_number,
                    minutes_remaining_in_period: period.end_minute() - minute,
                },
                "{time}"
            ),
            (None, Some((preceding, next_start))) => assert_eq!(
                state,
                ResolvedState::OnBreak {
                    preceding_period_number: preceding,
                    minutes_remaining_in_break: next_start - minute,
                },
                "{time}"
            ),
            _ if minute < FIRST_PERIOD_START => {
                assert_eq!(state, ResolvedState::BeforeHours, "{time}")
            }
            _ => {
                assert_eq!(state, ResolvedState::AfterHours, "{time}");
                assert!(minute >= table.last_end());
            }
        }
    }

    assert_eq!(seen, 7 * 1440);
}

#[test]
fn in_session_only_between_first_start_and_last_end() {
    for time in all_times().filter(|t| !t.is_weekend()) {
        let minute = time.minute_of_day();
        let expected = (FIRST_PERIOD_START..1130).contains(&minute);
        assert_eq!(resolve(time).is_in_session(), expected, "{time}");
        if minute >= SESSION_CLOSE {
            assert_eq!(resolve(time), ResolvedState::AfterHours);
        }
    }
}

#[test]
fn countdowns_never_reach_zero() {
    for time in all_times() {
        if let Some(remaining) = resolve(time).minutes_remaining() {
            assert!((1..=50).contains(&remaining), "{time}: {remaining}");
        }
    }
}

#[test_case(1 ; "monday")]
#[test_case(3 ; "wednesday")]
#[test_case(5 ; "friday")]
fn documented_boundaries_hold_on_every_weekday(day: u32) {
    let at = |hour, minute| resolve(SchoolTime::new(day, hour, minute).unwrap());

    assert_eq!(
        at(9, 50),
        ResolvedState::OnBreak { preceding_period_number: 1, minutes_remaining_in_break: 10 }
    );
    assert_eq!(
        at(9, 59),
        ResolvedState::OnBreak { preceding_period_number: 1, minutes_remaining_in_break: 1 }
    );
    assert_eq!(
        at(10, 0),
        ResolvedState::InClass { period_number: 2, minutes_remaining_in_period: 50 }
    );
    assert_eq!(at(8, 59), ResolvedState::BeforeHours);
    assert_eq!(at(19, 0), ResolvedState::AfterHours);
}

#[test]
fn greeting_facade_matches_compose() {
    let time: SchoolTime = "tue 11:30".parse().unwrap();
    let message = classbell::greeting_at(time, classbell::Locale::Korean);
    assert_eq!(message.headline, "지금은 화요일 3교시에요");
    assert_eq!(message.details.last().unwrap(), "다음 쉬는 시간까지 20분 남았어요");
}
