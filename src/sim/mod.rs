pub mod chaos;
pub mod eta;
pub mod position;
pub mod snapshot;
pub mod store;

pub use chaos::*;
pub use eta::*;
pub use position::*;
pub use snapshot::*;
pub use store::*;

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use tracing::warn;

use crate::repository::{Repository, Train, TrainStatus};

/// Computes where every active train is at one instant. Borrows the
/// repository: each tick builds one, runs it, and throws it away, so a poll
/// is a pure function of the clock and the timetable.
pub struct Simulator<'a> {
    repository: &'a Repository,
    now: DateTime<Utc>,
    jitter: bool,
}

impl<'a> Simulator<'a> {
    pub fn new(repository: &'a Repository) -> Self {
        Self {
            repository,
            now: Utc::now(),
            jitter: true,
        }
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// One position per active train that is currently somewhere on the map.
    /// Order is unspecified; entries are keyed by train id. A broken train
    /// drops out of the list, it never takes the fleet down with it.
    pub fn fleet(&self) -> Vec<TrainSnapshot> {
        self.repository
            .trains
            .par_iter()
            .filter(|train| train.status == TrainStatus::Active)
            .filter_map(|train| self.walk_train(train))
            .collect()
    }

    /// Same as [`fleet`](Self::fleet) restricted to one line. An unknown
    /// line id yields an empty list.
    pub fn line_fleet(&self, line_id: &str) -> Vec<TrainSnapshot> {
        let Some(trains) = self.repository.trains_by_line_id(line_id) else {
            return Vec::new();
        };
        trains
            .into_par_iter()
            .filter(|train| train.status == TrainStatus::Active)
            .filter_map(|train| self.walk_train(train))
            .collect()
    }

    /// The whole fleet wrapped with its tick number, ready for the store.
    pub fn snapshot(&self, tick: u64) -> FleetSnapshot {
        FleetSnapshot::new(tick, self.now, self.fleet())
    }

    /// Finds the single active leg of a train's trip, if any. Legs are in
    /// trip order and never overlap, so the first hit is the only hit; a
    /// train past its last arrival or before its first boarding window
    /// contributes nothing.
    fn walk_train(&self, train: &Train) -> Option<TrainSnapshot> {
        let entries = match self.repository.entries_by_train_id(&train.id) {
            Some(entries) if entries.len() >= 2 => entries,
            _ => {
                warn!("Train {} has no runnable legs, skipping it", train.id);
                return None;
            }
        };
        for pair in entries.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (Some(from_station), Some(to_station)) = (
                self.repository.station_by_id(&from.station_id),
                self.repository.station_by_id(&to.station_id),
            ) else {
                warn!("Train {} calls at an unresolvable station, skipping it", train.id);
                return None;
            };
            if !from_station.coordinate.is_finite() || !to_station.coordinate.is_finite() {
                warn!(
                    "Train {} passes a station without usable coordinates, skipping it",
                    train.id
                );
                return None;
            }
            let leg = Leg {
                from: from_station,
                to: to_station,
                departure: from.effective_departure(),
                arrival: to.effective_arrival(),
            };
            if leg.duration() <= Duration::zero() {
                warn!(
                    "Train {} has a zero-length leg {} -> {}, skipping the leg",
                    train.id, from.station_id, to.station_id
                );
                continue;
            }
            if let Some(found) = position::locate(&leg, self.now) {
                return Some(self.decorate(train, found));
            }
        }
        None
    }

    /// Layers the cosmetic and derived metrics over a raw position: GPS
    /// jitter, time-of-day crowd level, computation timestamp.
    fn decorate(&self, train: &Train, found: LegPosition) -> TrainSnapshot {
        let (place, coordinate, bearing, speed_kmh) = match found {
            LegPosition::AtStation {
                station_idx,
                coordinate,
            } => (
                Place::AtStation {
                    station_id: self.repository.stations[station_idx as usize].id.clone(),
                },
                coordinate,
                0.0,
                0.0,
            ),
            LegPosition::Moving {
                from_idx,
                to_idx,
                coordinate,
                progress,
                bearing,
                speed_kmh,
            } => (
                Place::Moving {
                    from_station_id: self.repository.stations[from_idx as usize].id.clone(),
                    to_station_id: self.repository.stations[to_idx as usize].id.clone(),
                    progress,
                },
                coordinate,
                bearing,
                speed_kmh,
            ),
        };
        let coordinate = if self.jitter {
            chaos::jitter(coordinate, &mut rand::thread_rng())
        } else {
            coordinate
        };
        TrainSnapshot {
            train_id: train.id.clone(),
            line_id: train.line_id.clone(),
            place,
            coordinate,
            bearing,
            speed_kmh,
            crowd: chaos::crowd_level_at(self.now),
            computed_at: self.now,
        }
    }
}
