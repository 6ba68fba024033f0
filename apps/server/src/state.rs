//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::db::{self, HistoryStore};
use crate::search::{AzureSearchGateway, SearchGateway};
use crate::services::{HistoryService, SearchService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search: Arc<SearchService>,
    pub history: Arc<HistoryService>,
}

impl AppState {
    /// Wire the connection pool, provider gateway, and services.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = db::connect(&config.database).await?;

        let gateway: Arc<dyn SearchGateway> = Arc::new(AzureSearchGateway::new(&config.search));
        let search = Arc::new(SearchService::new(
            gateway,
            config.search.suggester_name.clone(),
        ));
        let history = Arc::new(HistoryService::new(HistoryStore::new(pool)));

        Ok(Self {
            config: Arc::new(config),
            search,
            history,
        })
    }

    /// Build state from already-constructed collaborators. Used by tests to
    /// substitute a mock gateway without a database or provider connection.
    pub fn with_services(
        config: Config,
        search: Arc<SearchService>,
        history: Arc<HistoryService>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            search,
            history,
        }
    }
}
