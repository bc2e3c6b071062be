// file: src/client/transport.rs
// description: transport seam between the controller and the search service

use crate::error::Result;
use crate::models::{SearchRequest, SearchResponse};
use async_trait::async_trait;

#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}
