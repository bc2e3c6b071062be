// file: src/utils/validation.rs
// description: input validation helpers for paths, urls and output files
// reference: input validation patterns

use crate::error::{Result, SearchError};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_image_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            SearchError::InvalidInput(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(SearchError::InvalidInput(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SearchError::InvalidInput(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_output_path(path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(SearchError::InvalidInput(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(SearchError::InvalidInput(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_image_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("query.jpg");
        fs::write(&file_path, "jpeg").unwrap();

        assert!(Validator::validate_image_path(&file_path).is_ok());
        assert!(Validator::validate_image_path(temp.path()).is_err());
        assert!(Validator::validate_image_path(Path::new("/nonexistent.jpg")).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://127.0.0.1:5000").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_output_path() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_output_path(&temp.path().join("out.html")).is_ok());
        assert!(Validator::validate_output_path(temp.path()).is_err());
        assert!(Validator::validate_output_path(&temp.path().join("missing/out.html")).is_err());
        assert!(Validator::validate_output_path(Path::new("out.html")).is_ok());
    }
}
