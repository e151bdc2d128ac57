// file: src/utils/validation.rs
// description: validation of configured filter and mirror values
// reference: input validation patterns

use crate::error::{MirrorError, Result};
use regex::Regex;

pub const KNOWN_VISIBILITIES: [&str; 3] = ["public", "private", "internal"];

pub struct Validator;

impl Validator {
    pub fn validate_visibility(value: &str) -> Result<()> {
        if !KNOWN_VISIBILITIES.contains(&value) {
            return Err(MirrorError::Validation(format!(
                "Unknown visibility {:?} (expected one of {})",
                value,
                KNOWN_VISIBILITIES.join(", ")
            )));
        }
        Ok(())
    }

    pub fn validate_visibilities(values: &[String]) -> Result<()> {
        values
            .iter()
            .try_for_each(|value| Self::validate_visibility(value))
    }

    pub fn validate_pattern(pattern: &str) -> Result<()> {
        Regex::new(pattern)
            .map(|_| ())
            .map_err(|source| MirrorError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn validate_host(host: &str) -> Result<()> {
        if host.trim().is_empty() {
            return Err(MirrorError::Validation("Host cannot be empty".to_string()));
        }

        if host.contains("://") || host.contains('/') {
            return Err(MirrorError::Validation(format!(
                "Host must be a bare name like github.com: {}",
                host
            )));
        }

        Ok(())
    }

    /// `owner/name` with no empty or traversing segments.
    pub fn validate_full_name(full_name: &str) -> Result<()> {
        let segments: Vec<&str> = full_name.split('/').collect();

        let valid = segments.len() == 2
            && segments
                .iter()
                .all(|s| !s.is_empty() && *s != "." && *s != "..");

        if !valid {
            return Err(MirrorError::Validation(format!(
                "Invalid repository name: {:?}",
                full_name
            )));
        }

        Ok(())
    }

    /// Splits a comma separated list, dropping blanks.
    pub fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
