//! Shared test support: a scripted in-memory search gateway and fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use buscador::models::ProductDocument;
use buscador::search::{CompiledQuery, SearchGateway, SearchPage};
use buscador::services::{HistoryService, SearchService};
use buscador::{AppState, Config, Error};

/// Gateway double that replays scripted results and records what the
/// orchestrator asked for.
#[derive(Default)]
pub struct MockGateway {
    pub documents: Vec<ProductDocument>,
    pub total_count: i64,
    pub completions: Vec<String>,
    /// When set, every call fails with a provider error.
    pub fail: bool,
    pub calls: AtomicUsize,
    pub last_search_text: Mutex<Option<String>>,
    pub last_query: Mutex<Option<CompiledQuery>>,
    pub last_suggester: Mutex<Option<String>>,
}

impl MockGateway {
    pub fn with_documents(documents: Vec<ProductDocument>, total_count: i64) -> Self {
        Self {
            documents,
            total_count,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Provider("scripted failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SearchGateway for MockGateway {
    async fn search(
        &self,
        search_text: &str,
        query: &CompiledQuery,
    ) -> buscador::Result<SearchPage> {
        self.record_call()?;
        *self.last_search_text.lock().unwrap() = Some(search_text.to_string());
        *self.last_query.lock().unwrap() = Some(query.clone());
        Ok(SearchPage {
            documents: self.documents.clone(),
            total_count: self.total_count,
        })
    }

    async fn autocomplete(
        &self,
        search_text: &str,
        suggester: &str,
    ) -> buscador::Result<Vec<String>> {
        self.record_call()?;
        *self.last_search_text.lock().unwrap() = Some(search_text.to_string());
        *self.last_suggester.lock().unwrap() = Some(suggester.to_string());
        Ok(self.completions.clone())
    }

    async fn suggest(
        &self,
        search_text: &str,
        suggester: &str,
    ) -> buscador::Result<Vec<ProductDocument>> {
        self.record_call()?;
        *self.last_search_text.lock().unwrap() = Some(search_text.to_string());
        *self.last_suggester.lock().unwrap() = Some(suggester.to_string());
        Ok(self.documents.clone())
    }
}

pub fn product_document(id: &str, nombre: &str, precio: f64) -> ProductDocument {
    ProductDocument {
        id: id.to_string(),
        nombre: nombre.to_string(),
        precio: Some(precio),
        imagen: format!("https://img.example/{id}.jpg"),
        tiene_promocion: Some(false),
        calificacion: Some(4.0),
        ..ProductDocument::default()
    }
}

/// Application state backed by the given gateway. The history service gets a
/// lazy pool that never connects unless a history route is exercised.
pub fn test_state(gateway: Arc<MockGateway>) -> AppState {
    let config = Config::default();

    let search = Arc::new(SearchService::new(
        gateway,
        config.search.suggester_name.clone(),
    ));

    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://buscador@localhost/buscador_test")
        .expect("lazy test pool");
    let history = Arc::new(HistoryService::new(buscador::db::HistoryStore::new(pool)));

    AppState::with_services(config, search, history)
}
