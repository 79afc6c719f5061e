use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use metroscope::sim::{EtaProjector, FleetSnapshot};

use crate::{dto::EtaDto, state::AppState};

/// Minutes until the next train on `line` reaches `station`, projected from
/// the live fleet. Falls back to a flagged placeholder when the line has no
/// projectable train.
pub async fn eta(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let (Some(station_id), Some(line_id)) = (params.get("station"), params.get("line")) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let fleet = state
        .store
        .latest()
        .unwrap_or_else(|| FleetSnapshot::new(0, Utc::now(), Vec::new()));
    let eta = EtaProjector::new(&state.repository)
        .project(station_id, line_id, &fleet)
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Json(EtaDto::from(&eta)).into_response())
}
