// file: src/exporter/html.rs
// description: writes the view model as a standalone html page

use crate::controller::ViewModel;
use crate::error::{Result, SearchError};
use crate::render::html::render_page;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct HtmlExporter {
    title: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new("Image Search Results")
    }
}

impl HtmlExporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn export(&self, view_model: &ViewModel, path: &Path) -> Result<()> {
        let page = render_page(&self.title, view_model);

        fs::write(path, page).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Wrote {} card(s) to {}",
            view_model.results.len(),
            path.display()
        );
        Ok(())
    }
}
