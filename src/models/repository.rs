// file: src/models/repository.rs
// description: repository descriptor as returned by the GitHub REST API
// reference: https://docs.github.com/en/rest/repos/repos

use serde::{Deserialize, Serialize};

/// A repository listing entry. Every field is optional because partial
/// listings and older API versions omit some of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub clone_url: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub fork: Option<bool>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub stargazers_count: Option<i64>,
    #[serde(default)]
    pub watchers_count: Option<i64>,
    #[serde(default)]
    pub subscribers_count: Option<i64>,
    #[serde(default)]
    pub forks_count: Option<i64>,
}

impl Repository {
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit('/')
            .next()
            .map(str::to_string)
            .filter(|n| !n.is_empty());

        Self {
            name,
            full_name: Some(full_name),
            ..Self::default()
        }
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = Some(topics.into_iter().map(Into::into).collect());
        self
    }

    /// Missing flag means not archived.
    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }

    pub fn is_fork(&self) -> bool {
        self.fork.unwrap_or(false)
    }

    /// Missing flag means public.
    pub fn is_public(&self) -> bool {
        !self.private.unwrap_or(false)
    }

    pub fn topics(&self) -> &[String] {
        self.topics.as_deref().unwrap_or(&[])
    }

    /// Name used for pattern matching and log lines.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unnamed>")
    }
}
