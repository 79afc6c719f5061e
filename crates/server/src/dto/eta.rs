use metroscope::sim::Eta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaDto {
    pub eta_minutes: u32,
    pub is_estimate_fallback: bool,
}

impl EtaDto {
    pub fn from(eta: &Eta) -> Self {
        Self {
            eta_minutes: eta.minutes,
            is_estimate_fallback: eta.fallback,
        }
    }
}
