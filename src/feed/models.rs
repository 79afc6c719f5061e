use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StationRow {
    pub station_id: String,
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub underground: Option<u8>,
    pub depot: Option<u8>,
    pub interchange: Option<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LineRow {
    pub line_id: String,
    pub line_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TrainRow {
    pub train_id: String,
    pub line_id: String,
    pub status: String,
}

/// One stop call. Consecutive rows of the same train form the legs the
/// position engine interpolates over.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScheduleRow {
    pub train_id: String,
    pub line_id: String,
    pub station_id: String,
    pub order: u32,
    pub arrival_time: String,
    pub departure_time: String,
    pub delay_minutes: Option<i64>,
    pub status: Option<String>,
}
