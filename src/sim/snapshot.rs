use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::chaos::CrowdLevel;
use crate::shared::geo::Coordinate;

/// Which kind of place a train currently occupies.
#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    AtStation {
        station_id: Arc<str>,
    },
    Moving {
        from_station_id: Arc<str>,
        to_station_id: Arc<str>,
        /// Completion of the current leg in percent.
        progress: f64,
    },
}

/// The computed state of one train at a single poll instant. Ephemeral:
/// superseded wholesale by the next tick, never persisted.
#[derive(Debug, Clone)]
pub struct TrainSnapshot {
    pub train_id: Arc<str>,
    pub line_id: Arc<str>,
    pub place: Place,
    pub coordinate: Coordinate,
    /// Heading in degrees, 0 while holding at a platform.
    pub bearing: f64,
    /// One-decimal km/h, 0 while holding at a platform.
    pub speed_kmh: f64,
    pub crowd: CrowdLevel,
    pub computed_at: DateTime<Utc>,
}

/// One whole fleet poll. `tick` orders snapshots so a slow computation can
/// never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub tick: u64,
    pub computed_at: DateTime<Utc>,
    pub trains: Vec<TrainSnapshot>,
}

impl FleetSnapshot {
    pub fn new(tick: u64, computed_at: DateTime<Utc>, trains: Vec<TrainSnapshot>) -> Self {
        Self {
            tick,
            computed_at,
            trains,
        }
    }
}
