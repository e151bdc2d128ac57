// file: src/filter/mod.rs
// description: repository selection module exports
// reference: internal module structure

pub mod criteria;
pub mod intersection;
pub mod name;
pub mod selector;

pub use criteria::{FilterCriteria, Rejection, filter_repositories};
pub use intersection::has_intersection;
pub use name::NameFilter;
pub use selector::{RepositorySelector, SelectionStats};
