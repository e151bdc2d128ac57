// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod format;
pub mod logging;
pub mod validation;

pub use format::{format_bool, format_optional_int};
pub use validation::Validator;
