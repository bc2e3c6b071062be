// file: src/controller/mod.rs
// description: search controller module exports
// reference: internal module structure

pub mod search;
pub mod state;
pub mod view;

pub use search::{PendingSearch, SEARCH_FAILED_MESSAGE, SearchController, SubmitOutcome};
pub use state::Phase;
pub use view::{ErrorBanner, ViewModel};
