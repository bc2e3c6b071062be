// file: src/client/http.rs
// description: reqwest client posting multipart search requests
// reference: https://docs.rs/reqwest/latest/reqwest/multipart/

use crate::client::SearchTransport;
use crate::config::ServerConfig;
use crate::error::{Result, SearchError};
use crate::models::{ErrorResponse, SearchRequest, SearchResponse};
use crate::utils::telemetry::HealthCheck;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const MAX_DETAIL_LEN: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    base_url: String,
    search_url: String,
}

impl HttpSearchClient {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search_url: config.search_url(),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    pub async fn ping(&self) -> HealthCheck {
        let start = Instant::now();
        let url = format!("{}/", self.base_url);
        debug!("Probing search service at {}", url);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                HealthCheck::healthy("search-service", start.elapsed())
            }
            Ok(response) => HealthCheck::degraded(
                "search-service",
                format!("{} returned {}", url, response.status()),
                start.elapsed(),
            ),
            Err(e) => HealthCheck::unhealthy(
                "search-service",
                format!("{} unreachable: {}", url, e),
                start.elapsed(),
            ),
        }
    }
}

#[async_trait]
impl SearchTransport for HttpSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        debug!(
            "Posting {} field(s) to {}: {:?}",
            request.len(),
            self.search_url,
            request.field_names()
        );

        let response = self
            .client
            .post(&self.search_url)
            .multipart(request.to_multipart()?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(&body);
            debug!("Search failed with {}: {:?}", status, detail);
            return Err(SearchError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        info!("Received {} result(s)", parsed.len());
        Ok(parsed)
    }
}

fn error_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return Some(parsed.error);
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_DETAIL_LEN).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"error": "no query"}"#),
            Some("no query".to_string())
        );
        assert_eq!(error_detail("  "), None);
        assert_eq!(
            error_detail("Internal Server Error"),
            Some("Internal Server Error".to_string())
        );
        assert_eq!(error_detail(&"x".repeat(500)).unwrap().len(), MAX_DETAIL_LEN);
    }

    #[test]
    fn test_client_urls() {
        let mut config = Config::default_config().server;
        config.base_url = "http://search.local/".to_string();
        let client = HttpSearchClient::new(&config).unwrap();
        assert_eq!(client.search_url(), "http://search.local/search");
    }
}
