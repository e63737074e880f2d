//! Unit tests for timespan token parsing.
//!
//! Run with: cargo test --test timespan_unit_test

use chrono::{Duration, Utc};
use loadbank_api::repository::readings::window_cutoff;
use loadbank_api::routes::readings::parse_timespan;

#[test]
fn parses_each_unit() {
    assert_eq!(parse_timespan("10s"), 10);
    assert_eq!(parse_timespan("5m"), 300);
    assert_eq!(parse_timespan("2h"), 7200);
    assert_eq!(parse_timespan("1d"), 86400);
}

#[test]
fn zero_value_is_allowed() {
    assert_eq!(parse_timespan("0s"), 0);
    assert_eq!(parse_timespan("0d"), 0);
}

#[test]
fn malformed_tokens_fall_back_to_five_minutes() {
    // The dashboard treats the window selector as best-effort: anything
    // unparseable behaves like "5m".
    assert_eq!(parse_timespan("abc"), 300);
    assert_eq!(parse_timespan("7"), 300);
    assert_eq!(parse_timespan(""), 300);
    assert_eq!(parse_timespan("m"), 300);
    assert_eq!(parse_timespan("10x"), 300);
    assert_eq!(parse_timespan("-5m"), 300);
    assert_eq!(parse_timespan("1.5h"), 300);
    assert_eq!(parse_timespan("5 m"), 300);
}

#[test]
fn unit_must_be_the_last_character() {
    assert_eq!(parse_timespan("s10"), 300);
    assert_eq!(parse_timespan("10s "), 300);
}

#[test]
fn oversized_window_degrades_to_five_minutes() {
    // A well-formed token can carry a value no datetime arithmetic can
    // hold; the cutoff falls back instead of overflowing.
    let seconds = parse_timespan("10000000000000000s");
    assert_eq!(seconds, 10_000_000_000_000_000);

    let cutoff = window_cutoff(seconds);
    let expected = Utc::now() - Duration::seconds(300);
    assert!((expected - cutoff).num_seconds().abs() <= 1);
}

#[test]
fn window_cutoff_is_total_over_extreme_values() {
    // Beyond the TimeDelta range, and within TimeDelta but beyond the
    // representable datetime range; neither may panic.
    for seconds in [i64::MAX, i64::MIN, 1_000_000_000_000_000] {
        let cutoff = window_cutoff(seconds);
        let expected = Utc::now() - Duration::seconds(300);
        assert!((expected - cutoff).num_seconds().abs() <= 1);
    }
}

#[test]
fn window_cutoff_subtracts_ordinary_windows() {
    let cutoff = window_cutoff(10);
    let delta = (Utc::now() - cutoff).num_seconds();
    assert!((9..=11).contains(&delta));
}
