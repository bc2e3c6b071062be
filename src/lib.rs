// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod exporter;
pub mod form;
pub mod models;
pub mod render;
pub mod utils;

pub use client::{HttpSearchClient, SearchTransport};
pub use config::{Config, FormConfig, RenderConfig, ServerConfig, SliderConfig};
pub use controller::{
    ErrorBanner, PendingSearch, Phase, SEARCH_FAILED_MESSAGE, SearchController, SubmitOutcome,
    ViewModel,
};
pub use error::{Result, SearchError, ValidationError};
pub use exporter::{ExportedSearch, HtmlExporter, JsonExporter};
pub use form::Slider;
pub use models::{
    FormState, FormValue, FormVariant, ImageFile, QueryType, SearchRequest, SearchResponse,
    SearchResult,
};
pub use render::{ResultCard, ResultsRenderer, ResultsView};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let controller = SearchController::new(&config.form, ResultsRenderer::default());
        assert_eq!(controller.phase(), Phase::Idle);
    }
}
