// file: src/render/mod.rs
// description: results rendering module exports
// reference: internal module structure

pub mod html;
pub mod results;
pub mod terminal;

pub use results::{ResultCard, ResultsRenderer, ResultsView};
