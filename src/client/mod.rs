// file: src/client/mod.rs
// description: search service client module exports
// reference: internal module structure

pub mod http;
pub mod transport;

pub use http::HttpSearchClient;
pub use transport::SearchTransport;
