//! Search gateway seam.
//!
//! The compiler core depends only on this trait plus the document shape; the
//! concrete provider adapter lives in [`super::azure`]. All three operations
//! are remote reads with no side effects. Timeouts, credentials, and transport
//! concerns belong entirely to the implementation — this layer neither sets
//! nor interprets deadlines, and never retries.

use async_trait::async_trait;

use super::planner::CompiledQuery;
use crate::models::ProductDocument;
use crate::Result;

/// Upper bound on autocomplete/suggest results returned by the provider.
pub const SUGGESTION_LIMIT: i32 = 5;

/// One bounded, ordered result window plus the total match count.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub documents: Vec<ProductDocument>,
    pub total_count: i64,
}

/// Executes compiled queries against the external search index.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Run a free-text + filter query and return one result window with the
    /// total match count.
    async fn search(&self, search_text: &str, query: &CompiledQuery) -> Result<SearchPage>;

    /// Fuzzy term completions for a partial input, at most
    /// [`SUGGESTION_LIMIT`] of them, via the named suggester.
    async fn autocomplete(&self, search_text: &str, suggester: &str) -> Result<Vec<String>>;

    /// Ranked candidate documents for a partial input, at most
    /// [`SUGGESTION_LIMIT`], via the named suggester.
    async fn suggest(&self, search_text: &str, suggester: &str) -> Result<Vec<ProductDocument>>;
}
