// file: src/models/form.rs
// description: search form state, query types and uploaded image files
// reference: mirrors the fields of the search form

use crate::config::FormConfig;
use crate::error::{Result, SearchError};
use crate::form::Slider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    #[default]
    Text,
    Image,
    Hybrid,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Text => "text",
            QueryType::Image => "image",
            QueryType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which form layout is in use. The two layouts send different field sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum FormVariant {
    /// Query-type selector with a PCA on/off toggle.
    #[serde(rename = "selector")]
    #[value(name = "selector")]
    QuerySelector,

    /// Weight and PCA sliders always visible, each with a value label.
    #[serde(rename = "sliders")]
    #[value(name = "sliders")]
    Sliders,
}

impl FormVariant {
    pub fn has_slider_labels(&self) -> bool {
        matches!(self, FormVariant::Sliders)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self { name, mime, bytes }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                SearchError::InvalidInput(format!("Path has no file name: {}", path.display()))
            })?;

        Ok(Self::new(name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub query_type: QueryType,
    pub text_query: String,
    pub image_file: Option<ImageFile>,
    pub text_weight: Slider,
    pub use_pca: bool,
    pub num_components: Slider,
}

impl FormState {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            query_type: QueryType::default(),
            text_query: String::new(),
            image_file: None,
            text_weight: Slider::from_config(&config.text_weight),
            use_pca: false,
            num_components: Slider::from_config(&config.num_components),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text_query.is_empty()
    }

    pub fn has_image(&self) -> bool {
        self.image_file.is_some()
    }
}
