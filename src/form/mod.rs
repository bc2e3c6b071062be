// file: src/form/mod.rs
// description: form input handling module exports
// reference: internal module structure

pub mod payload;
pub mod slider;
pub mod validation;

pub use payload::build_request;
pub use slider::Slider;
pub use validation::validate_form;
