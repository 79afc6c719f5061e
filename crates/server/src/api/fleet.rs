use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::{
    dto::{FleetDto, TrainSnapshotDto},
    state::AppState,
};

/// Latest published fleet positions, optionally restricted to one line.
/// Before the first tick lands this is an empty list, never an error.
pub async fn fleet(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(snapshot) = state.store.latest() else {
        return Ok(Json(FleetDto {
            tick: 0,
            computed_at: Utc::now().to_rfc3339(),
            trains: Vec::new(),
        })
        .into_response());
    };
    let line_id = match params.get("line") {
        Some(line_id) => {
            state
                .repository
                .line_by_id(line_id)
                .ok_or(StatusCode::BAD_REQUEST)?;
            Some(line_id.as_str())
        }
        None => None,
    };
    let trains: Vec<_> = snapshot
        .trains
        .iter()
        .filter(|train| line_id.is_none_or(|line_id| train.line_id.as_ref() == line_id))
        .map(TrainSnapshotDto::from)
        .collect();
    Ok(Json(FleetDto {
        tick: snapshot.tick,
        computed_at: snapshot.computed_at.to_rfc3339(),
        trains,
    })
    .into_response())
}
