// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod form;
pub mod request;
pub mod search_result;

pub use form::{FormState, FormVariant, ImageFile, QueryType};
pub use request::{FormValue, SearchRequest};
pub use search_result::{ErrorResponse, SearchResponse, SearchResult};
