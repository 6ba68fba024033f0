//! Search endpoint handlers.
//!
//! - `POST /search` with a structured request body
//! - `GET /search/autocomplete?q=term`
//! - `GET /search/suggest?q=term`
//!
//! For the two GET endpoints a missing or empty `q` is a caller error; the
//! orchestrator is never invoked for it.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::Product;
use crate::search::{PagedResponse, SearchRequest};
use crate::state::AppState;
use crate::{Error, Result};

pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<PagedResponse<Product>>> {
    let page = state.search.search(&request).await?;
    Ok(Json(page))
}

#[derive(Debug, Deserialize)]
pub struct TermQuery {
    pub q: Option<String>,
}

impl TermQuery {
    /// The partial term, or a validation error when `q` is missing/empty.
    fn require_term(&self) -> Result<&str> {
        match self.q.as_deref() {
            Some(term) if !term.is_empty() => Ok(term),
            _ => Err(Error::Validation(
                "query parameter 'q' is required".to_string(),
            )),
        }
    }
}

pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<TermQuery>,
) -> Result<Json<Vec<String>>> {
    let term = params.require_term()?;
    let completions = state.search.autocomplete(term).await?;
    Ok(Json(completions))
}

pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<TermQuery>,
) -> Result<Json<Vec<Product>>> {
    let term = params.require_term()?;
    let products = state.search.suggest(term).await?;
    Ok(Json(products))
}
