// file: src/repository/mod.rs
// description: Repository listing module exports
// reference: Internal module structure

pub mod listing;

pub use listing::{load_repositories, parse_repositories};
