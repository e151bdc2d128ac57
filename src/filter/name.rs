// file: src/filter/name.rs
// description: include and exclude regex patterns over repository names
// reference: https://docs.rs/regex

use crate::error::{MirrorError, Result};
use regex::Regex;

#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl NameFilter {
    /// Blank patterns count as unset. Anything else is compiled as given,
    /// surrounding whitespace included.
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            include: Self::compile(include)?,
            exclude: Self::compile(exclude)?,
        })
    }

    fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
        match pattern.filter(|p| !p.trim().is_empty()) {
            Some(pattern) => Regex::new(pattern)
                .map(Some)
                .map_err(|source| MirrorError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    pub fn matches(&self, name: Option<&str>) -> bool {
        let Some(name) = name else {
            return self.include.is_none();
        };

        if let Some(include) = &self.include
            && !include.is_match(name)
        {
            return false;
        }

        if let Some(exclude) = &self.exclude
            && exclude.is_match(name)
        {
            return false;
        }

        true
    }
}
