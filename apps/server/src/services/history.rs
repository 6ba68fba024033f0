//! Search history service.
//!
//! Records that a search happened (free text, owning user, server-assigned
//! timestamp) and serves the two supported read shapes: by id and by user,
//! most recent first.

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::db::{HistoryStore, NewHistoryEntry};
use crate::models::HistoryEntry;
use crate::{Error, Result};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHistoryRequest {
    #[validate(length(min = 1, max = 500, message = "texto_busqueda must be 1-500 characters"))]
    pub texto_busqueda: String,

    #[validate(length(min = 1, max = 100, message = "usuario_id must be 1-100 characters"))]
    pub usuario_id: String,
}

pub struct HistoryService {
    store: HistoryStore,
}

impl HistoryService {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: CreateHistoryRequest) -> Result<HistoryEntry> {
        input
            .validate()
            .map_err(|e| Error::Validation(e.to_string()))?;

        let texto = input.texto_busqueda.trim();
        let usuario = input.usuario_id.trim();
        if texto.is_empty() || usuario.is_empty() {
            return Err(Error::Validation(
                "texto_busqueda and usuario_id must not be blank".to_string(),
            ));
        }

        let created = self
            .store
            .insert(NewHistoryEntry {
                usuario_id: usuario,
                texto_busqueda: texto,
                fecha_busqueda: Utc::now(),
            })
            .await?;

        tracing::info!(
            id = created.id,
            usuario_id = %created.usuario_id,
            "search history entry created"
        );

        Ok(created)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<HistoryEntry> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("history entry {} not found", id)))
    }

    pub async fn get_by_usuario_id(&self, usuario_id: &str) -> Result<Vec<HistoryEntry>> {
        if usuario_id.trim().is_empty() {
            return Err(Error::Validation("usuario_id must not be empty".to_string()));
        }

        self.store.get_by_usuario_id(usuario_id).await
    }
}
