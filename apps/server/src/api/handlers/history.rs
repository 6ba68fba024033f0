//! Search history endpoint handlers.
//!
//! - `POST /historial` records a completed search
//! - `GET /historial/{id}` reads one entry
//! - `GET /historial/usuario/{usuario_id}` lists a user's searches,
//!   most recent first

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::models::HistoryEntry;
use crate::services::history::CreateHistoryRequest;
use crate::state::AppState;
use crate::{Error, Result};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHistoryRequest>,
) -> Result<(StatusCode, Json<HistoryEntry>)> {
    let created = state.history.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<HistoryEntry>> {
    if id <= 0 {
        return Err(Error::Validation("id must be greater than 0".to_string()));
    }

    let entry = state.history.get_by_id(id).await?;
    Ok(Json(entry))
}

pub async fn get_by_usuario_id(
    State(state): State<AppState>,
    Path(usuario_id): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>> {
    let entries = state.history.get_by_usuario_id(&usuario_id).await?;
    Ok(Json(entries))
}
