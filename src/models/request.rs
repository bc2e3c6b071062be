// file: src/models/request.rs
// description: multipart search request payload
// reference: https://docs.rs/reqwest/latest/reqwest/multipart/

use crate::error::{Result, SearchError};
use crate::models::ImageFile;
use reqwest::multipart::{Form, Part};

pub const FIELD_TEXT_QUERY: &str = "text_query";
pub const FIELD_IMAGE_QUERY: &str = "image_query";
pub const FIELD_TEXT_WEIGHT: &str = "text_weight";
pub const FIELD_USE_PCA: &str = "use_pca";
pub const FIELD_NUM_COMPONENTS: &str = "num_components";
pub const FIELD_QUERY_TYPE: &str = "query_type";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(ImageFile),
}

/// Ordered multipart fields for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    fields: Vec<(&'static str, FormValue)>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.push((name, FormValue::Text(value.into())));
    }

    pub fn push_file(&mut self, name: &'static str, file: ImageFile) {
        self.fields.push((name, FormValue::File(file)));
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FormValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn file(&self, name: &str) -> Option<&ImageFile> {
        match self.get(name) {
            Some(FormValue::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_multipart(&self) -> Result<Form> {
        let mut form = Form::new();

        for (name, value) in &self.fields {
            form = match value {
                FormValue::Text(text) => form.text(*name, text.clone()),
                FormValue::File(file) => {
                    let part = Part::bytes(file.bytes.clone())
                        .file_name(file.name.clone())
                        .mime_str(&file.mime)
                        .map_err(|e| {
                            SearchError::InvalidInput(format!(
                                "Invalid content type {} for {}: {}",
                                file.mime, file.name, e
                            ))
                        })?;
                    form.part(*name, part)
                }
            };
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_kind() {
        let mut request = SearchRequest::new();
        request.push_text(FIELD_TEXT_QUERY, "a red bus");
        request.push_file(FIELD_IMAGE_QUERY, ImageFile::new("bus.png", vec![0u8; 4]));

        assert_eq!(request.text(FIELD_TEXT_QUERY), Some("a red bus"));
        assert!(request.text(FIELD_IMAGE_QUERY).is_none());
        assert_eq!(request.file(FIELD_IMAGE_QUERY).unwrap().name, "bus.png");
        assert!(!request.contains(FIELD_TEXT_WEIGHT));
        assert_eq!(
            request.field_names(),
            vec![FIELD_TEXT_QUERY, FIELD_IMAGE_QUERY]
        );
    }

    #[test]
    fn test_to_multipart_builds() {
        let mut request = SearchRequest::new();
        request.push_text(FIELD_NUM_COMPONENTS, "50");
        request.push_file(FIELD_IMAGE_QUERY, ImageFile::new("x.jpg", vec![1]));

        let form = request.to_multipart().unwrap();
        assert!(!form.boundary().is_empty());
    }
}
