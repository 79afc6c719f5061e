use metroscope::repository::{Line, Station};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub underground: bool,
    pub depot: bool,
    pub interchange: bool,
}

impl StationDto {
    pub fn from(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.to_string(),
            latitude: station.coordinate.latitude,
            longitude: station.coordinate.longitude,
            underground: station.underground,
            depot: station.depot,
            interchange: station.interchange,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub id: String,
    pub name: String,
}

impl LineDto {
    pub fn from(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.to_string(),
        }
    }
}
