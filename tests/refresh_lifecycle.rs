// End-to-end behaviour of the refresh driver across a period boundary.
use std::sync::Arc;
use std::time::Duration;

use chrono::FixedOffset;
use classbell::{
    ClassbellConfig, FixedClock, Locale, RefreshDriver, ResolvedState, SchoolTime, SystemClock,
    TimeSource,
};

#[tokio::test(start_paused = true)]
async fn follows_a_class_into_its_break_and_back() {
    let clock = Arc::new(FixedClock::new("thu 13:48".parse().unwrap()));
    let handle = RefreshDriver::new(clock.clone(), Locale::English, Duration::from_secs(60))
        .unwrap()
        .start();
    let mut reader = handle.subscribe();

    let mut kinds = vec![handle.current().state.kind()];
    for _ in 0..13 {
        clock.advance(1);
        reader.changed().await.unwrap();
        kinds.push(reader.borrow_and_update().state.kind());
    }
    kinds.dedup();
    assert_eq!(kinds, vec!["in_class", "on_break", "in_class"]);

    let last = handle.current();
    assert_eq!(last.tick, 13);
    assert_eq!(
        last.state,
        ResolvedState::InClass { period_number: 6, minutes_remaining_in_period: 49 }
    );
    assert_eq!(last.message.headline, "It's Thursday, period 6");

    handle.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn published_state_serializes_for_consumers() {
    let clock = Arc::new(FixedClock::new("sat 10:00".parse().unwrap()));
    let handle = RefreshDriver::new(clock, Locale::Korean, Duration::from_secs(60))
        .unwrap()
        .start();

    let json = serde_json::to_value(handle.current()).unwrap();
    assert_eq!(json["state"]["state"], "weekend");
    assert_eq!(json["message"]["headline"], "좋은 주말 보내세요!");
    assert_eq!(json["tick"], 0);

    drop(handle);
}

#[tokio::test]
async fn config_driven_driver_reads_the_offset_clock() {
    let config = ClassbellConfig {
        utc_offset: FixedOffset::east_opt(9 * 3600),
        ..ClassbellConfig::default()
    };
    let driver = RefreshDriver::from_config(&config).unwrap();
    assert_eq!(driver.interval(), Duration::from_secs(60));

    let expected: SchoolTime = SystemClock::from_config(&config).now();
    let evaluated = driver.evaluate(0);
    // The two reads may straddle a minute boundary.
    let drift = (evaluated.time.minute_of_day() as i32 - expected.minute_of_day() as i32).abs();
    assert!(drift <= 1 || drift == 1439);
}
