//! Search orchestration.
//!
//! Coordinates planner, gateway, and response mapping for the three search
//! operations. The service owns no state beyond its collaborators and is safe
//! to invoke concurrently; every compiled query and result page lives only
//! for the duration of one call.

use std::sync::Arc;

use crate::models::Product;
use crate::search::{planner, PagedResponse, SearchGateway, SearchRequest};
use crate::Result;

pub struct SearchService {
    gateway: Arc<dyn SearchGateway>,
    suggester: String,
}

impl SearchService {
    pub fn new(gateway: Arc<dyn SearchGateway>, suggester: impl Into<String>) -> Self {
        Self {
            gateway,
            suggester: suggester.into(),
        }
    }

    /// Execute a filtered, sorted, paginated catalog search.
    ///
    /// An empty result set is a valid page with zero items and zero total,
    /// not an error.
    pub async fn search(&self, request: &SearchRequest) -> Result<PagedResponse<Product>> {
        let query = planner::plan(request);
        let search_text = planner::effective_search_text(request);

        let page = self.gateway.search(search_text, &query).await?;

        tracing::debug!(
            total = page.total_count,
            page = query.page_number,
            size = query.page_size,
            filtered = query.filter.is_some(),
            "search executed"
        );

        Ok(PagedResponse {
            current_page: query.page_number,
            page_size: query.page_size,
            total_count: page.total_count,
            items: page.documents.into_iter().map(Product::from).collect(),
        })
    }

    /// Term completions for a partial input. An empty term returns no
    /// completions without calling the provider.
    pub async fn autocomplete(&self, search_text: &str) -> Result<Vec<String>> {
        if search_text.is_empty() {
            return Ok(Vec::new());
        }

        self.gateway.autocomplete(search_text, &self.suggester).await
    }

    /// Ranked document suggestions for a partial input, mapped to the
    /// external product shape. Same empty-term short-circuit as autocomplete.
    pub async fn suggest(&self, search_text: &str) -> Result<Vec<Product>> {
        if search_text.is_empty() {
            return Ok(Vec::new());
        }

        let documents = self.gateway.suggest(search_text, &self.suggester).await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }
}
