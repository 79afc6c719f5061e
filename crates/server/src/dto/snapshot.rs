use metroscope::sim::{Place, TrainSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSnapshotDto {
    pub train_id: String,
    pub line_id: String,
    /// "at_station" or "moving".
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
    pub bearing: f64,
    pub speed_kmh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_station_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_station_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    pub crowd_level: String,
    pub computed_at: String,
}

impl TrainSnapshotDto {
    pub fn from(snapshot: &TrainSnapshot) -> Self {
        let (status, station_id, from_station_id, to_station_id, progress) = match &snapshot.place
        {
            Place::AtStation { station_id } => (
                "at_station",
                Some(station_id.to_string()),
                None,
                None,
                None,
            ),
            Place::Moving {
                from_station_id,
                to_station_id,
                progress,
            } => (
                "moving",
                None,
                Some(from_station_id.to_string()),
                Some(to_station_id.to_string()),
                Some(*progress),
            ),
        };
        Self {
            train_id: snapshot.train_id.to_string(),
            line_id: snapshot.line_id.to_string(),
            status: status.to_string(),
            latitude: snapshot.coordinate.latitude,
            longitude: snapshot.coordinate.longitude,
            bearing: snapshot.bearing,
            speed_kmh: snapshot.speed_kmh,
            station_id,
            from_station_id,
            to_station_id,
            progress,
            crowd_level: snapshot.crowd.label().to_string(),
            computed_at: snapshot.computed_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetDto {
    pub tick: u64,
    pub computed_at: String,
    pub trains: Vec<TrainSnapshotDto>,
}
