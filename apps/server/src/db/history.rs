//! Search history store.
//!
//! Thin sqlx repository over the `historial_busqueda` table. Timestamps are
//! assigned by the service layer, not the database, so reads return exactly
//! what was written.

use sqlx::PgPool;

use crate::models::HistoryEntry;
use crate::Result;

#[derive(Clone)]
pub struct HistoryStore {
    pool: PgPool,
}

impl HistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, entry: NewHistoryEntry<'_>) -> Result<HistoryEntry> {
        let row = sqlx::query_as::<_, HistoryEntry>(
            r#"
            INSERT INTO historial_busqueda (id_usuario, texto_busqueda, fecha_busqueda)
            VALUES ($1, $2, $3)
            RETURNING id, id_usuario, texto_busqueda, fecha_busqueda
            "#,
        )
        .bind(entry.usuario_id)
        .bind(entry.texto_busqueda)
        .bind(entry.fecha_busqueda)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<HistoryEntry>> {
        let row = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, id_usuario, texto_busqueda, fecha_busqueda
            FROM historial_busqueda
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// All searches recorded for one user, most recent first.
    pub async fn get_by_usuario_id(&self, usuario_id: &str) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, id_usuario, texto_busqueda, fecha_busqueda
            FROM historial_busqueda
            WHERE id_usuario = $1
            ORDER BY fecha_busqueda DESC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Column values for a new row; the id is database-assigned.
#[derive(Debug, Clone, Copy)]
pub struct NewHistoryEntry<'a> {
    pub usuario_id: &'a str,
    pub texto_busqueda: &'a str,
    pub fecha_busqueda: chrono::DateTime<chrono::Utc>,
}
