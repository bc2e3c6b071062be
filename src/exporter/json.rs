// file: src/exporter/json.rs
// description: json export of rendered search results

use crate::error::{Result, SearchError};
use crate::models::{SearchResponse, SearchResult};
use crate::render::ResultsView;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Readable back as a `SearchResponse`; the extra keys are ignored.
#[derive(Debug, Serialize)]
pub struct ExportedSearch {
    pub exported_at: String,
    pub total_results: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn export(&self, view: &ResultsView, path: &Path) -> Result<ExportedSearch> {
        let export = ExportedSearch {
            exported_at: Utc::now().to_rfc3339(),
            total_results: view.len(),
            results: view.to_results(),
        };

        let serialized = if self.pretty {
            serde_json::to_string_pretty(&export)
        } else {
            serde_json::to_string(&export)
        };
        let body = serialized
            .map_err(|e| SearchError::Export(format!("Failed to serialize results: {}", e)))?;

        fs::write(path, body).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Exported {} result(s) to {}", export.total_results, path.display());
        Ok(export)
    }

    pub fn load(path: &Path) -> Result<SearchResponse> {
        let body = fs::read_to_string(path).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}
