use chrono::{DateTime, Duration, Utc};

use crate::{repository::Station, shared::geo::Coordinate};

/// How long before departure a train is shown holding at the platform.
pub const BOARDING_WINDOW_SECS: i64 = 5 * 60;

/// One resolved station-to-station leg of a trip, delay already applied.
#[derive(Debug, Clone, Copy)]
pub struct Leg<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
}

impl Leg<'_> {
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }
}

/// Where one leg puts the train at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub enum LegPosition {
    /// Holding at the departure platform inside the boarding window.
    AtStation {
        station_idx: u32,
        coordinate: Coordinate,
    },
    /// Underway between the two stations.
    Moving {
        from_idx: u32,
        to_idx: u32,
        coordinate: Coordinate,
        /// Completion of the leg in percent, 0 at departure, 100 at arrival.
        progress: f64,
        /// Rhumb-line heading from the origin station, degrees in `[0, 360)`.
        bearing: f64,
        /// Schedule-implied speed, rounded to one decimal.
        speed_kmh: f64,
    },
}

/// Evaluates a single leg against the clock. Returns None when the leg is
/// not active: already completed, or not yet inside the boarding window.
/// The arrival instant itself still belongs to the leg, at progress 100;
/// one tick later the leg goes inactive and the next one takes over.
pub fn locate(leg: &Leg, now: DateTime<Utc>) -> Option<LegPosition> {
    if leg.arrival <= leg.departure {
        return None;
    }
    if now < leg.departure {
        let window_open = leg.departure - Duration::seconds(BOARDING_WINDOW_SECS);
        if now >= window_open {
            return Some(LegPosition::AtStation {
                station_idx: leg.from.index,
                coordinate: leg.from.coordinate,
            });
        }
        return None;
    }
    if now > leg.arrival {
        return None;
    }

    let elapsed = (now - leg.departure).num_milliseconds() as f64;
    let total = leg.duration().num_milliseconds() as f64;
    let t = (elapsed / total).clamp(0.0, 1.0);
    let distance = leg.from.coordinate.haversine_distance(&leg.to.coordinate);
    let hours = total / 3_600_000.0;
    Some(LegPosition::Moving {
        from_idx: leg.from.index,
        to_idx: leg.to.index,
        coordinate: leg.from.coordinate.lerp(&leg.to.coordinate, t),
        progress: t * 100.0,
        bearing: leg.from.coordinate.rhumb_bearing(&leg.to.coordinate),
        speed_kmh: round_tenth(distance.as_kilometers() / hours),
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
