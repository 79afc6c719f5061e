use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::shared::geo::Coordinate;

/// A physical metro station.
#[derive(Debug, Default, Clone)]
pub struct Station {
    /// The global internal index used for O(1) array lookups in the repository.
    pub index: u32,
    /// The unique external identifier.
    pub id: Arc<str>,
    /// The display name of the station.
    pub name: Arc<str>,
    pub coordinate: Coordinate,
    /// Below-grade platforms, relevant to the map layer.
    pub underground: bool,
    /// Non-revenue yard stop. Trains parked here are off-map.
    pub depot: bool,
    /// Serves more than one line.
    pub interchange: bool,
}

/// A named service grouping of trains (e.g. "Line 1 Ben Thanh - Suoi Tien").
#[derive(Debug, Default, Clone)]
pub struct Line {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
}

/// Whether a train takes part in the current service day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrainStatus {
    Active,
    #[default]
    Inactive,
}

/// A single physical train running one trip on one line.
#[derive(Debug, Default, Clone)]
pub struct Train {
    pub index: u32,
    pub id: Arc<str>,
    /// Pointer to the parent [`Line`].
    pub line_idx: u32,
    pub line_id: Arc<str>,
    pub status: TrainStatus,
}

/// One scheduled stop call. The span between consecutive entries of the same
/// train is the leg the position engine interpolates over.
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    /// Global internal index of this entry.
    pub index: u32,
    /// Internal index of the parent [`Train`].
    pub train_idx: u32,
    pub train_id: Arc<str>,
    pub line_id: Arc<str>,
    /// Station being called at. Held as an id, not an index: the station
    /// registry is a separate concern and resolution happens (and can fail,
    /// softly) at walk time.
    pub station_id: Arc<str>,
    /// The order of this call within the trip.
    pub order: u32,
    /// Scheduled arrival at the station, absolute UTC.
    pub arrival: DateTime<Utc>,
    /// Scheduled departure from the station, absolute UTC.
    pub departure: DateTime<Utc>,
    /// Whole-minute delay offset maintained by the upstream delay manager.
    /// Shifts both effective times.
    pub delay_minutes: i64,
}

impl ScheduleEntry {
    pub fn effective_arrival(&self) -> DateTime<Utc> {
        self.arrival + Duration::minutes(self.delay_minutes)
    }

    pub fn effective_departure(&self) -> DateTime<Utc> {
        self.departure + Duration::minutes(self.delay_minutes)
    }

    /// Scheduled hold time at the station.
    pub fn dwell(&self) -> Duration {
        self.departure - self.arrival
    }
}
