use metroscope::{
    shared::geo::Coordinate,
    sim::chaos::{CrowdLevel, JITTER_DEGREES, crowd_level, jitter},
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn crowd_level_full_day_test() {
    let expected = [
        (0, CrowdLevel::Low),
        (1, CrowdLevel::Low),
        (2, CrowdLevel::Low),
        (3, CrowdLevel::Low),
        (4, CrowdLevel::Low),
        (5, CrowdLevel::Low),
        (6, CrowdLevel::Low),
        (7, CrowdLevel::High),
        (8, CrowdLevel::High),
        (9, CrowdLevel::High),
        (10, CrowdLevel::Medium),
        (11, CrowdLevel::Medium),
        (12, CrowdLevel::Medium),
        (13, CrowdLevel::Medium),
        (14, CrowdLevel::Medium),
        (15, CrowdLevel::Medium),
        (16, CrowdLevel::Medium),
        (17, CrowdLevel::High),
        (18, CrowdLevel::High),
        (19, CrowdLevel::High),
        (20, CrowdLevel::Low),
        (21, CrowdLevel::Low),
        (22, CrowdLevel::Low),
        (23, CrowdLevel::Low),
    ];
    for (hour, level) in expected {
        assert_eq!(crowd_level(hour), level, "hour {hour}");
    }
}

#[test]
fn crowd_level_label_test() {
    assert_eq!(CrowdLevel::Low.label(), "low");
    assert_eq!(CrowdLevel::Medium.label(), "medium");
    assert_eq!(CrowdLevel::High.label(), "high");
}

#[test]
fn jitter_bounds_test() {
    let origin = Coordinate {
        latitude: 10.77,
        longitude: 106.70,
    };
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let shaken = jitter(origin, &mut rng);
        assert!((shaken.latitude - origin.latitude).abs() <= JITTER_DEGREES);
        assert!((shaken.longitude - origin.longitude).abs() <= JITTER_DEGREES);
    }
}

#[test]
fn jitter_moves_both_axes_test() {
    let origin = Coordinate {
        latitude: 10.77,
        longitude: 106.70,
    };
    let mut rng = StdRng::seed_from_u64(7);
    let shaken = jitter(origin, &mut rng);
    assert_ne!(shaken.latitude, origin.latitude);
    assert_ne!(shaken.longitude, origin.longitude);
}
