// file: src/exporter/mod.rs
// description: result export module exports
// reference: internal module structure

pub mod html;
pub mod json;

pub use html::HtmlExporter;
pub use json::{ExportedSearch, JsonExporter};
