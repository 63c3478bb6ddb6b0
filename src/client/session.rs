use crate::client::traits::SuggestionSource;
use crate::client::types::SearchCriteria;
use crate::models::CottageSuggestion;
use tracing::{info, warn};

/// State of the search trigger. Mirrors the enabled/disabled search button:
/// `Loading` while a request is in flight, `Idle` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Loading,
}

/// Terminal result of one search attempt.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Backend answered; the list may be empty (not an error).
    Results(Vec<CottageSuggestion>),
    /// Transport failure or non-2xx status, to be rendered inline.
    Failed { endpoint: String, detail: String },
    /// A search was already in flight; no request was issued.
    Busy,
}

/// Drives searches against a [`SuggestionSource`] while enforcing the
/// trigger contract: at most one in-flight request, and the trigger always
/// returns to `Idle` on completion, whatever the outcome. There is no
/// cancellation and no request-id fencing.
pub struct SearchSession {
    state: TriggerState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: TriggerState::Idle,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Run one search. Failures are absorbed into the outcome; they never
    /// propagate to the caller.
    pub async fn run(
        &mut self,
        source: &dyn SuggestionSource,
        criteria: &SearchCriteria,
    ) -> SearchOutcome {
        if self.state == TriggerState::Loading {
            warn!("Search trigger ignored: a request is already in flight");
            return SearchOutcome::Busy;
        }

        self.state = TriggerState::Loading;
        info!("Searching for available cottages...");

        let result = source.search(criteria).await;
        self.state = TriggerState::Idle;

        match result {
            Ok(suggestions) => SearchOutcome::Results(suggestions),
            Err(err) => {
                warn!("Search failed: {:#}", err);
                SearchOutcome::Failed {
                    endpoint: source.endpoint(),
                    detail: format!("{:#}", err),
                }
            }
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            booker_name: None,
            city: None,
            required_places: 2,
            required_bedrooms: 1,
            max_lake_distance_meters: 500,
            max_city_distance_meters: 10_000,
            start_day: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            required_days: 3,
            max_start_shift_days: 0,
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SuggestionSource for FailingSource {
        async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<CottageSuggestion>> {
            Err(anyhow!("connection refused"))
        }

        fn endpoint(&self) -> String {
            "http://localhost:9090/demo/api".to_string()
        }
    }

    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SuggestionSource for CountingSource {
        async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<CottageSuggestion>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        fn endpoint(&self) -> String {
            "test".to_string()
        }
    }

    #[tokio::test]
    async fn failure_returns_trigger_to_idle() {
        let mut session = SearchSession::new();
        let outcome = session.run(&FailingSource, &criteria()).await;

        assert_eq!(session.state(), TriggerState::Idle);
        match outcome {
            SearchOutcome::Failed { endpoint, detail } => {
                assert_eq!(endpoint, "http://localhost:9090/demo/api");
                assert!(detail.contains("connection refused"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn success_returns_trigger_to_idle() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
        };
        let mut session = SearchSession::new();
        let outcome = session.run(&source, &criteria()).await;

        assert_eq!(session.state(), TriggerState::Idle);
        assert!(matches!(outcome, SearchOutcome::Results(ref s) if s.is_empty()));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn trigger_while_loading_issues_no_request() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
        };
        let mut session = SearchSession::new();
        session.state = TriggerState::Loading;

        let outcome = session.run(&source, &criteria()).await;

        assert!(matches!(outcome, SearchOutcome::Busy));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
