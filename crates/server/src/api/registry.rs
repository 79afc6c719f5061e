use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    dto::{LineDto, StationDto},
    state::AppState,
};

pub async fn stations(State(state): State<Arc<AppState>>) -> Response {
    let stations: Vec<_> = state
        .repository
        .stations
        .iter()
        .map(StationDto::from)
        .collect();
    Json(stations).into_response()
}

pub async fn lines(State(state): State<Arc<AppState>>) -> Response {
    let lines: Vec<_> = state.repository.lines.iter().map(LineDto::from).collect();
    Json(lines).into_response()
}
