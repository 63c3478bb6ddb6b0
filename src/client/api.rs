use crate::client::traits::SuggestionSource;
use crate::client::types::SearchCriteria;
use crate::models::CottageSuggestion;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default backend location, overridable via `COTTAGE_API_URL` or `--base-url`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9090/demo/api";

const SUGGESTIONS_PATH: &str = "/cottages/suggestions";

/// HTTP client for the cottage suggestion API.
///
/// Issues a single GET to `{base_url}/cottages/suggestions` per search.
/// Non-2xx responses and transport errors both surface as `Err`; there is
/// no retry.
pub struct CottageApiClient {
    client: Client,
    base_url: String,
}

impl CottageApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("cottage-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn suggestions_url(&self) -> String {
        format!("{}{}", self.base_url, SUGGESTIONS_PATH)
    }
}

#[async_trait]
impl SuggestionSource for CottageApiClient {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<CottageSuggestion>> {
        let url = self.suggestions_url();
        let pairs = criteria.to_query_pairs();

        debug!("GET {} with {} query parameters", url, pairs.len());

        let response = self
            .client
            .get(&url)
            .query(&pairs)
            .send()
            .await
            .with_context(|| format!("Failed to reach suggestion backend at {}", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Suggestion backend returned status: {}", status);
            anyhow::bail!("Suggestion backend returned HTTP {}", status);
        }

        let suggestions: Vec<CottageSuggestion> = response
            .json()
            .await
            .context("Failed to decode suggestion response body")?;

        info!("Received {} cottage suggestions", suggestions.len());
        Ok(suggestions)
    }

    fn endpoint(&self) -> String {
        self.base_url.clone()
    }
}
