// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod filter;
pub mod mirror;
pub mod models;
pub mod repository;
pub mod utils;

pub use config::{Config, FilterConfig, MirrorConfig};
pub use error::{MirrorError, Result};
pub use filter::{
    FilterCriteria, NameFilter, Rejection, RepositorySelector, SelectionStats,
    filter_repositories, has_intersection,
};
pub use mirror::{MirrorSettings, settings_for_all};
pub use models::Repository;
pub use repository::{load_repositories, parse_repositories};
pub use utils::{Validator, format_bool, format_optional_int};
