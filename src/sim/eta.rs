use rand::Rng;
use thiserror::Error;

use super::snapshot::{FleetSnapshot, Place, TrainSnapshot};
use crate::{
    repository::{Repository, ScheduleEntry},
    shared::time::ceil_minutes,
};

pub const FALLBACK_MIN_MINUTES: u32 = 3;
pub const FALLBACK_MAX_MINUTES: u32 = 15;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Station id does not match any entry")]
    InvalidStationId,
    #[error("Line id does not match any entry")]
    InvalidLineId,
}

/// Minutes until the next train on a line reaches a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eta {
    pub minutes: u32,
    /// True when no live train could be projected and the value is a bounded
    /// placeholder rather than a schedule-derived estimate.
    pub fallback: bool,
}

/// Projects arrival times from live fleet snapshots instead of reading the
/// raw timetable, so a delayed or drifting train moves its estimate with it.
pub struct EtaProjector<'a> {
    repository: &'a Repository,
}

impl<'a> EtaProjector<'a> {
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    /// Minimum projected arrival across every live train of the line. When
    /// none of them reaches the station, a bounded placeholder is returned
    /// and flagged as such.
    pub fn project(
        &self,
        station_id: &str,
        line_id: &str,
        fleet: &FleetSnapshot,
    ) -> Result<Eta, self::Error> {
        self.repository
            .station_by_id(station_id)
            .ok_or(self::Error::InvalidStationId)?;
        self.repository
            .line_by_id(line_id)
            .ok_or(self::Error::InvalidLineId)?;

        let best = fleet
            .trains
            .iter()
            .filter(|snapshot| snapshot.line_id.as_ref() == line_id)
            .filter_map(|snapshot| self.seconds_to_station(snapshot, station_id))
            .min();

        match best {
            Some(seconds) => Ok(Eta {
                minutes: ceil_minutes(seconds),
                fallback: false,
            }),
            None => Ok(Eta {
                minutes: rand::thread_rng()
                    .gen_range(FALLBACK_MIN_MINUTES..=FALLBACK_MAX_MINUTES),
                fallback: true,
            }),
        }
    }

    /// Remaining travel time for one train: the unfinished share of its
    /// current leg plus the scheduled dwell and travel of every later leg up
    /// to the target. None when the target is not downstream of the train.
    fn seconds_to_station(&self, snapshot: &TrainSnapshot, station_id: &str) -> Option<i64> {
        let entries = self.repository.entries_by_train_id(&snapshot.train_id)?;
        match &snapshot.place {
            Place::Moving {
                from_station_id,
                to_station_id,
                progress,
            } => {
                let i = entries.windows(2).position(|pair| {
                    pair[0].station_id.as_ref() == from_station_id.as_ref()
                        && pair[1].station_id.as_ref() == to_station_id.as_ref()
                })?;
                let leg_secs = (entries[i + 1].effective_arrival()
                    - entries[i].effective_departure())
                .num_seconds();
                let acc = ((1.0 - progress / 100.0) * leg_secs as f64).round() as i64;
                remaining_from(&entries, i + 1, station_id, acc.max(0))
            }
            Place::AtStation { station_id: at } => {
                let i = entries
                    .iter()
                    .position(|entry| entry.station_id.as_ref() == at.as_ref())?;
                if entries[i].station_id.as_ref() == station_id {
                    return Some(0);
                }
                let next = i + 1;
                if next >= entries.len() {
                    return None;
                }
                let mut acc = (entries[i].effective_departure() - snapshot.computed_at)
                    .num_seconds()
                    .max(0);
                acc += (entries[next].effective_arrival() - entries[i].effective_departure())
                    .num_seconds()
                    .max(0);
                remaining_from(&entries, next, station_id, acc)
            }
        }
    }
}

/// Walks the trip forward from the station reached after `acc` seconds,
/// adding dwell and travel until the target station comes up.
fn remaining_from(
    entries: &[&ScheduleEntry],
    mut reach_idx: usize,
    station_id: &str,
    mut acc: i64,
) -> Option<i64> {
    loop {
        if entries[reach_idx].station_id.as_ref() == station_id {
            return Some(acc);
        }
        let next = reach_idx + 1;
        if next >= entries.len() {
            return None;
        }
        acc += entries[reach_idx].dwell().num_seconds().max(0);
        acc += (entries[next].effective_arrival() - entries[reach_idx].effective_departure())
            .num_seconds()
            .max(0);
        reach_idx = next;
    }
}
