use chrono::{DateTime, Local, Timelike, Utc};
use rand::Rng;

use crate::shared::geo::Coordinate;

/// Maximum simulated GPS error in degrees, applied independently per axis.
pub const JITTER_DEGREES: f64 = 0.000_05;

/// Coarse passenger-density class. Derived from the clock, not from sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub const fn label(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "low",
            CrowdLevel::Medium => "medium",
            CrowdLevel::High => "high",
        }
    }
}

/// Crowd class for an hour of day: morning and evening peaks are high, the
/// daytime span between them medium, nights low.
pub const fn crowd_level(hour: u32) -> CrowdLevel {
    match hour {
        7..=9 | 17..=19 => CrowdLevel::High,
        10..=16 => CrowdLevel::Medium,
        _ => CrowdLevel::Low,
    }
}

/// Crowd class at an instant, using the local wall clock.
pub fn crowd_level_at(instant: DateTime<Utc>) -> CrowdLevel {
    crowd_level(instant.with_timezone(&Local).hour())
}

/// Perturbs a position by up to [`JITTER_DEGREES`] per axis. Cosmetic
/// measurement noise for the map display, nothing downstream reads it back.
pub fn jitter<R: Rng>(coordinate: Coordinate, rng: &mut R) -> Coordinate {
    Coordinate {
        latitude: coordinate.latitude + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
        longitude: coordinate.longitude + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
    }
}
