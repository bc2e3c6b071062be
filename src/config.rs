// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::models::FormVariant;
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub form: FormConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub search_path: String,
    pub images_path: String,
    /// No timeout unless set.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    pub variant: FormVariant,
    pub text_weight: SliderConfig,
    pub num_components: SliderConfig,
}

/// Range input bounds, mirroring `min`/`max`/`step`/`value` on the control.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub results_limit: Option<usize>,
}

impl ServerConfig {
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.search_path)
    }

    /// Absolute image base for rendering outside the server's own origin.
    pub fn image_base_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.images_path)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("IMAGE_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                search_path: "/search".to_string(),
                images_path: "/images/".to_string(),
                timeout_secs: None,
            },
            form: FormConfig {
                variant: FormVariant::QuerySelector,
                text_weight: SliderConfig {
                    min: 0.0,
                    max: 1.0,
                    step: 0.1,
                    default: 0.5,
                },
                num_components: SliderConfig {
                    min: 1.0,
                    max: 512.0,
                    step: 1.0,
                    default: 50.0,
                },
            },
            render: RenderConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.server.base_url)
            .map_err(|e| SearchError::Config(e.to_string()))?;

        if !self.server.search_path.starts_with('/') {
            return Err(SearchError::Config(
                "search_path must start with '/'".to_string(),
            ));
        }

        if self.server.timeout_secs == Some(0) {
            return Err(SearchError::Config(
                "timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        self.form.text_weight.validate("text_weight")?;
        self.form.num_components.validate("num_components")?;

        Ok(())
    }
}

impl SliderConfig {
    fn validate(&self, name: &str) -> Result<()> {
        if self.min.is_nan() || self.max.is_nan() || self.min >= self.max {
            return Err(SearchError::Config(format!(
                "{name}: min must be less than max"
            )));
        }

        if self.step.is_nan() || self.step <= 0.0 {
            return Err(SearchError::Config(format!(
                "{name}: step must be greater than 0"
            )));
        }

        if self.default < self.min || self.default > self.max {
            return Err(SearchError::Config(format!(
                "{name}: default {} outside [{}, {}]",
                self.default, self.min, self.max
            )));
        }

        Ok(())
    }
}
