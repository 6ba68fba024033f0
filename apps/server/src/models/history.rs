//! Search history audit record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One persisted search, as stored in `historial_busqueda`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    #[sqlx(rename = "id_usuario")]
    pub usuario_id: String,
    pub texto_busqueda: String,
    pub fecha_busqueda: DateTime<Utc>,
}
