//! Azure AI Search gateway adapter.
//!
//! Talks to the index over the provider's REST surface
//! (`POST {endpoint}/indexes/{index}/docs/search|autocomplete|suggest`)
//! with an `api-key` header. Documents come back inside a `value` array and
//! the total match count, when requested, in `@odata.count`.
//!
//! Transport failures and non-success statuses surface as provider errors;
//! a response body that no longer matches [`ProductDocument`] is reported as
//! a mapping error so schema drift is distinguishable from outages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::gateway::{SearchGateway, SearchPage, SUGGESTION_LIMIT};
use super::planner::CompiledQuery;
use crate::config::SearchConfig;
use crate::models::ProductDocument;
use crate::{Error, Result};

pub struct AzureSearchGateway {
    client: reqwest::Client,
    endpoint: String,
    index_name: String,
    api_key: String,
    api_version: String,
}

impl AzureSearchGateway {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            index_name: config.index_name.clone(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
        }
    }

    fn docs_url(&self, operation: &str) -> String {
        format!(
            "{}/indexes/{}/docs/{}?api-version={}",
            self.endpoint, self.index_name, operation, self.api_version
        )
    }

    /// POST a query body and return the parsed JSON payload.
    async fn post_docs(&self, operation: &str, body: &impl Serialize) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(self.docs_url(operation))
            .header("api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Provider(format!(
                "index {} request failed with status {}: {}",
                operation, status, detail
            )));
        }

        response.json().await.map_err(Error::from)
    }
}

#[async_trait]
impl SearchGateway for AzureSearchGateway {
    async fn search(&self, search_text: &str, query: &CompiledQuery) -> Result<SearchPage> {
        let body = SearchBody {
            search: search_text,
            filter: query.filter.as_deref(),
            orderby: query.order_by.as_deref(),
            select: query.select.join(","),
            top: query.page_size,
            skip: query.skip,
            count: query.include_total_count,
        };

        let payload = self.post_docs("search", &body).await?;
        let parsed: SearchResponse = serde_json::from_value(payload)
            .map_err(|e| Error::Mapping(format!("unexpected search result shape: {e}")))?;

        Ok(SearchPage {
            documents: parsed.value,
            total_count: parsed.count.unwrap_or(0),
        })
    }

    async fn autocomplete(&self, search_text: &str, suggester: &str) -> Result<Vec<String>> {
        let body = AutocompleteBody {
            search: search_text,
            suggester_name: suggester,
            // Tolerate spelling errors in partial input.
            fuzzy: true,
            top: SUGGESTION_LIMIT,
        };

        let payload = self.post_docs("autocomplete", &body).await?;
        let parsed: AutocompleteResponse = serde_json::from_value(payload)
            .map_err(|e| Error::Mapping(format!("unexpected autocomplete result shape: {e}")))?;

        Ok(parsed.value.into_iter().map(|c| c.text).collect())
    }

    async fn suggest(&self, search_text: &str, suggester: &str) -> Result<Vec<ProductDocument>> {
        let body = SuggestBody {
            search: search_text,
            suggester_name: suggester,
            select: super::planner::SELECT_FIELDS.join(","),
            top: SUGGESTION_LIMIT,
        };

        let payload = self.post_docs("suggest", &body).await?;
        let parsed: SuggestResponse = serde_json::from_value(payload)
            .map_err(|e| Error::Mapping(format!("unexpected suggest result shape: {e}")))?;

        Ok(parsed.value)
    }
}

#[derive(Serialize)]
struct SearchBody<'a> {
    search: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orderby: Option<&'a str>,
    select: String,
    top: i32,
    skip: i32,
    count: bool,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "@odata.count")]
    count: Option<i64>,
    value: Vec<ProductDocument>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AutocompleteBody<'a> {
    search: &'a str,
    suggester_name: &'a str,
    fuzzy: bool,
    top: i32,
}

#[derive(Deserialize)]
struct AutocompleteResponse {
    value: Vec<Completion>,
}

#[derive(Deserialize)]
struct Completion {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestBody<'a> {
    search: &'a str,
    suggester_name: &'a str,
    select: String,
    top: i32,
}

#[derive(Deserialize)]
struct SuggestResponse {
    value: Vec<ProductDocument>,
}
