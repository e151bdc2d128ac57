// file: src/repository/listing.rs
// description: loading saved GitHub repository listings from disk
// reference: https://docs.rs/serde_json

use crate::error::{MirrorError, Result};
use crate::models::Repository;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a JSON array of repository objects, such as a saved
/// `GET /orgs/{org}/repos` response.
pub fn load_repositories(path: &Path) -> Result<Vec<Repository>> {
    let content = fs::read_to_string(path).map_err(|source| MirrorError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    let repos = parse_repositories(&content)?;
    info!("Loaded {} repositories from {}", repos.len(), path.display());
    Ok(repos)
}

pub fn parse_repositories(content: &str) -> Result<Vec<Repository>> {
    Ok(serde_json::from_str(content)?)
}
