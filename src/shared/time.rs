use chrono::{DateTime, Utc};

/// Parses an RFC 3339 timestamp into UTC.
/// Returns None instead of an error so feed loading can skip bad rows.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Rounds a duration in seconds up to whole minutes, for rider-facing
/// arrival estimates. Negative inputs clamp to zero.
pub fn ceil_minutes(seconds: i64) -> u32 {
    if seconds <= 0 {
        return 0;
    }
    seconds.div_ceil(60) as u32
}

#[test]
fn valid_timestamp_test_1() {
    let ts = parse_timestamp("2025-03-01T08:00:00Z").unwrap();
    assert_eq!(ts.to_rfc3339(), "2025-03-01T08:00:00+00:00");
}

#[test]
fn valid_timestamp_test_2() {
    let ts = parse_timestamp("2025-03-01T08:00:00+07:00").unwrap();
    assert_eq!(ts.to_rfc3339(), "2025-03-01T01:00:00+00:00");
}

#[test]
fn invalid_timestamp_test_1() {
    assert!(parse_timestamp("2025-03-01 08:00:00").is_none());
}

#[test]
fn invalid_timestamp_test_2() {
    assert!(parse_timestamp("not a timestamp").is_none());
}

#[test]
fn ceil_minutes_test_1() {
    assert_eq!(ceil_minutes(0), 0);
}

#[test]
fn ceil_minutes_test_2() {
    assert_eq!(ceil_minutes(59), 1);
}

#[test]
fn ceil_minutes_test_3() {
    assert_eq!(ceil_minutes(60), 1);
}

#[test]
fn ceil_minutes_test_4() {
    assert_eq!(ceil_minutes(61), 2);
}

#[test]
fn ceil_minutes_test_5() {
    assert_eq!(ceil_minutes(-30), 0);
}
