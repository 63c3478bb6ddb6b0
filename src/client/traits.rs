use crate::client::types::SearchCriteria;
use crate::models::CottageSuggestion;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for suggestion backends.
/// The session layer and tests depend on this seam rather than on the
/// concrete HTTP client.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Run one search and return the matching suggestions, in backend order.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<CottageSuggestion>>;

    /// Human-readable endpoint label, used in error panels.
    fn endpoint(&self) -> String;
}
