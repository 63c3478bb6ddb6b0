pub mod api;
pub mod session;
pub mod traits;
pub mod types;

pub use api::{CottageApiClient, DEFAULT_BASE_URL};
pub use session::{SearchOutcome, SearchSession, TriggerState};
pub use traits::SuggestionSource;
pub use types::SearchCriteria;
