use chrono::{DateTime, Duration, TimeZone, Utc};
use metroscope::{
    repository::Station,
    sim::position::{Leg, LegPosition, locate},
};

fn station(index: u32, id: &str, latitude: f64, longitude: f64) -> Station {
    Station {
        index,
        id: id.into(),
        name: id.into(),
        coordinate: (latitude, longitude).into(),
        ..Default::default()
    }
}

fn departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
}

fn six_minute_leg<'a>(from: &'a Station, to: &'a Station) -> Leg<'a> {
    Leg {
        from,
        to,
        departure: departure(),
        arrival: departure() + Duration::minutes(6),
    }
}

#[test]
fn progress_zero_at_departure_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = six_minute_leg(&from, &to);
    match locate(&leg, departure()) {
        Some(LegPosition::Moving {
            progress,
            coordinate,
            ..
        }) => {
            assert_eq!(progress, 0.0);
            assert!((coordinate.latitude - 10.77).abs() < 1e-9);
            assert!((coordinate.longitude - 106.70).abs() < 1e-9);
        }
        other => panic!("expected moving at departure, got {other:?}"),
    }
}

#[test]
fn progress_full_at_arrival_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = six_minute_leg(&from, &to);
    // The arrival instant still belongs to the leg, at progress 100.
    match locate(&leg, leg.arrival) {
        Some(LegPosition::Moving {
            progress,
            coordinate,
            ..
        }) => {
            assert_eq!(progress, 100.0);
            assert!((coordinate.latitude - 10.78).abs() < 1e-9);
            assert!((coordinate.longitude - 106.71).abs() < 1e-9);
        }
        other => panic!("expected moving at arrival, got {other:?}"),
    }
}

#[test]
fn midpoint_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = six_minute_leg(&from, &to);
    match locate(&leg, departure() + Duration::minutes(3)) {
        Some(LegPosition::Moving {
            progress,
            coordinate,
            bearing,
            speed_kmh,
            ..
        }) => {
            assert_eq!(progress, 50.0);
            assert!((coordinate.latitude - 10.775).abs() < 1e-9);
            assert!((coordinate.longitude - 106.705).abs() < 1e-9);
            assert!((0.0..360.0).contains(&bearing));
            assert!((speed_kmh - 15.6).abs() < 0.2);
        }
        other => panic!("expected moving at midpoint, got {other:?}"),
    }
}

#[test]
fn progress_monotonic_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = six_minute_leg(&from, &to);
    let mut last = -1.0;
    for second in (0..=360).step_by(10) {
        let now = departure() + Duration::seconds(second);
        match locate(&leg, now) {
            Some(LegPosition::Moving { progress, .. }) => {
                assert!(progress >= last);
                last = progress;
            }
            other => panic!("expected moving at +{second}s, got {other:?}"),
        }
    }
    assert_eq!(last, 100.0);
}

#[test]
fn at_station_before_departure_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = six_minute_leg(&from, &to);
    match locate(&leg, departure() - Duration::minutes(3)) {
        Some(LegPosition::AtStation {
            station_idx,
            coordinate,
        }) => {
            assert_eq!(station_idx, 0);
            assert_eq!(coordinate, from.coordinate);
        }
        other => panic!("expected at station 3 minutes out, got {other:?}"),
    }
}

#[test]
fn boarding_window_opens_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = six_minute_leg(&from, &to);
    assert!(locate(&leg, departure() - Duration::minutes(5)).is_some());
    assert!(locate(&leg, departure() - Duration::minutes(5) - Duration::seconds(1)).is_none());
}

#[test]
fn inactive_after_arrival_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = six_minute_leg(&from, &to);
    assert!(locate(&leg, leg.arrival + Duration::minutes(10)).is_none());
    assert!(locate(&leg, leg.arrival + Duration::seconds(1)).is_none());
}

#[test]
fn zero_duration_leg_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = Leg {
        from: &from,
        to: &to,
        departure: departure(),
        arrival: departure(),
    };
    assert!(locate(&leg, departure()).is_none());
}

#[test]
fn inverted_leg_test() {
    let from = station(0, "BEN", 10.77, 106.70);
    let to = station(1, "OPE", 10.78, 106.71);
    let leg = Leg {
        from: &from,
        to: &to,
        departure: departure(),
        arrival: departure() - Duration::minutes(1),
    };
    assert!(locate(&leg, departure()).is_none());
}
