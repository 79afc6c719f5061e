use std::{collections::HashMap, sync::Arc, time::Instant};

mod entities;
pub use entities::*;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    feed::{self, Feed},
    shared::time::parse_timestamp,
};

type IdToIndex = HashMap<Arc<str>, usize>;
type IdToIndexes = HashMap<Arc<str>, Box<[usize]>>;
type IdToIds = HashMap<Arc<str>, Box<[Arc<str>]>>;

/// Read-only store of the timetable the position engine walks. Built once
/// from a [`Feed`] and never mutated afterwards; delay updates arrive as a
/// fresh feed load, between polls.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub stations: Box<[Station]>,
    pub lines: Box<[Line]>,
    pub trains: Box<[Train]>,
    pub schedule: Box<[ScheduleEntry]>,

    station_lookup: IdToIndex,
    line_lookup: IdToIndex,
    train_lookup: IdToIndex,
    train_to_entries: IdToIndexes,
    line_to_trains: IdToIds,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Streams a timetable feed into the store. Rows that reference unknown
    /// ids or carry unparsable timestamps are dropped with a warning; only a
    /// failure to read the feed itself is an error.
    pub fn load_feed(mut self, feed: Feed) -> Result<Self, feed::Error> {
        self.load_stations(&feed)?;
        self.load_lines(&feed)?;
        self.load_trains(&feed)?;
        self.load_schedule(&feed)?;
        Ok(self)
    }

    fn load_stations(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading stations...");
        let now = Instant::now();
        let mut station_lookup: IdToIndex = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        feed.stream_stations(|(i, row)| {
            let value = Station {
                index: i as u32,
                id: row.station_id.into(),
                name: row.station_name.into(),
                coordinate: (row.latitude, row.longitude).into(),
                underground: row.underground == Some(1),
                depot: row.depot == Some(1),
                interchange: row.interchange == Some(1),
            };
            station_lookup.insert(value.id.clone(), i);
            stations.push(value);
        })?;
        self.stations = stations.into();
        self.station_lookup = station_lookup;
        debug!("Loading stations took {:?}", now.elapsed());
        Ok(())
    }

    fn load_lines(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading lines...");
        let now = Instant::now();
        let mut line_lookup: IdToIndex = HashMap::new();
        let mut lines: Vec<Line> = Vec::new();
        feed.stream_lines(|(i, row)| {
            let value = Line {
                index: i as u32,
                id: row.line_id.into(),
                name: row.line_name.into(),
            };
            line_lookup.insert(value.id.clone(), i);
            lines.push(value);
        })?;
        self.lines = lines.into();
        self.line_lookup = line_lookup;
        debug!("Loading lines took {:?}", now.elapsed());
        Ok(())
    }

    fn load_trains(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading trains...");
        let now = Instant::now();
        let mut train_lookup: IdToIndex = HashMap::new();
        let mut line_to_trains: HashMap<Arc<str>, Vec<Arc<str>>> = HashMap::new();
        let mut trains: Vec<Train> = Vec::new();
        feed.stream_trains(|(_, row)| {
            let Some(line_idx) = self.line_lookup.get(row.line_id.as_str()) else {
                warn!(
                    "Train {} references unknown line {}, dropping it",
                    row.train_id, row.line_id
                );
                return;
            };
            let status = if row.status.eq_ignore_ascii_case("active") {
                TrainStatus::Active
            } else {
                TrainStatus::Inactive
            };
            let index = trains.len();
            let value = Train {
                index: index as u32,
                id: row.train_id.into(),
                line_idx: *line_idx as u32,
                line_id: self.lines[*line_idx].id.clone(),
                status,
            };
            line_to_trains
                .entry(value.line_id.clone())
                .or_default()
                .push(value.id.clone());
            train_lookup.insert(value.id.clone(), index);
            trains.push(value);
        })?;
        self.trains = trains.into();
        self.train_lookup = train_lookup;
        self.line_to_trains = line_to_trains
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        debug!("Loading trains took {:?}", now.elapsed());
        Ok(())
    }

    fn load_schedule(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading schedule...");
        let now = Instant::now();
        let mut per_train: HashMap<Arc<str>, Vec<ScheduleEntry>> = HashMap::new();
        feed.stream_schedule(|(_, row)| {
            let Some(train_idx) = self.train_lookup.get(row.train_id.as_str()) else {
                warn!(
                    "Schedule row references unknown train {}, dropping it",
                    row.train_id
                );
                return;
            };
            // The feed is queryable by "active now": anything past its
            // scheduled/in-progress life is not walkable.
            if let Some(status) = &row.status
                && status != "scheduled"
                && status != "in-progress"
            {
                debug!(
                    "Schedule row for train {} has status {status}, dropping it",
                    row.train_id
                );
                return;
            }
            let (Some(arrival), Some(departure)) = (
                parse_timestamp(&row.arrival_time),
                parse_timestamp(&row.departure_time),
            ) else {
                warn!(
                    "Schedule row for train {} at {} has unparsable times, dropping it",
                    row.train_id, row.station_id
                );
                return;
            };
            let train = &self.trains[*train_idx];
            let entry = ScheduleEntry {
                index: 0,
                train_idx: *train_idx as u32,
                train_id: train.id.clone(),
                line_id: train.line_id.clone(),
                station_id: row.station_id.into(),
                order: row.order,
                arrival,
                departure,
                delay_minutes: row.delay_minutes.unwrap_or(0),
            };
            per_train.entry(entry.train_id.clone()).or_default().push(entry);
        })?;

        let mut per_train: Vec<(Arc<str>, Vec<ScheduleEntry>)> = per_train.into_iter().collect();
        per_train.par_iter_mut().for_each(|(_, entries)| {
            entries.sort_by_key(|entry| entry.order);
        });
        per_train.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut schedule: Vec<ScheduleEntry> = Vec::new();
        let mut train_to_entries: IdToIndexes = HashMap::new();
        for (train_id, entries) in per_train {
            let start = schedule.len();
            let indexes: Vec<usize> = (start..start + entries.len()).collect();
            for (offset, mut entry) in entries.into_iter().enumerate() {
                entry.index = (start + offset) as u32;
                schedule.push(entry);
            }
            train_to_entries.insert(train_id, indexes.into());
        }
        self.schedule = schedule.into();
        self.train_to_entries = train_to_entries;
        debug!("Loading schedule took {:?}", now.elapsed());
        Ok(())
    }

    /// Get a station with the given id.
    /// If no station is found with the given id None is returned.
    pub fn station_by_id(&self, id: &str) -> Option<&Station> {
        let index = self.station_lookup.get(id)?;
        Some(&self.stations[*index])
    }

    pub fn line_by_id(&self, id: &str) -> Option<&Line> {
        let index = self.line_lookup.get(id)?;
        Some(&self.lines[*index])
    }

    pub fn train_by_id(&self, id: &str) -> Option<&Train> {
        let index = self.train_lookup.get(id)?;
        Some(&self.trains[*index])
    }

    /// Returns the stop calls of a train in trip order.
    /// If no train was found with the given id None is returned.
    pub fn entries_by_train_id(&self, train_id: &str) -> Option<Vec<&ScheduleEntry>> {
        let entries = self.train_to_entries.get(train_id)?;
        Some(entries.iter().map(|i| &self.schedule[*i]).collect())
    }

    /// Returns all the trains that run on a line.
    /// If no line was found with the given id None is returned.
    pub fn trains_by_line_id(&self, line_id: &str) -> Option<Vec<&Train>> {
        let trains = self.line_to_trains.get(line_id)?;
        Some(
            trains
                .iter()
                .filter_map(|train_id| self.train_by_id(train_id))
                .collect(),
        )
    }
}
