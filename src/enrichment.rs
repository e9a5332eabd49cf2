/*!
 * Company enrichment client.
 *
 * When local resolution fails, the resolver can consult an external company
 * search API for candidate names and re-score them against the catalogue.
 * The API is optional; resolution works without it.
 */

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::EnrichmentError;

const DEFAULT_ENDPOINT: &str = "https://api.companyenrich.com/companies/search";
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// External source of candidate company names
#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    /// Search for companies matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<String>, EnrichmentError>;
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    #[serde(rename = "semanticQuery")]
    semantic_query: &'a str,
    query: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    name: Option<String>,
    #[allow(dead_code)]
    domain: Option<String>,
}

/// HTTP client for the CompanyEnrich search API
pub struct CompanyEnrichApi {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl CompanyEnrichApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl EnrichmentClient for CompanyEnrichApi {
    async fn search(&self, query: &str) -> Result<Vec<String>, EnrichmentError> {
        let request = SearchRequest {
            semantic_query: query,
            query,
        };

        debug!("Querying enrichment API for '{query}'");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(EnrichmentError::AuthenticationError(format!(
                "status {status}"
            )));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EnrichmentError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| EnrichmentError::ParseError(e.to_string()))?;

        let names = body
            .items
            .into_iter()
            .filter_map(|item| item.name)
            .filter(|name| !name.trim().is_empty())
            .collect();
        Ok(names)
    }
}
