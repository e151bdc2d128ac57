// file: src/filter/criteria.rs
// description: attribute filter over visibility, archived flag and topics
// reference: repository selection rules for mirroring

use crate::filter::intersection::has_intersection;
use crate::models::Repository;
use serde::{Deserialize, Serialize};

/// Attribute criteria. Empty lists and `false` disable the matching rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub included_topics: Vec<String>,
    #[serde(default)]
    pub excluded_topics: Vec<String>,
    #[serde(default)]
    pub exclude_archived: bool,
    #[serde(default)]
    pub visibilities: Vec<String>,
}

/// The first rule a repository failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    Visibility,
    Archived,
    MissingTopic,
    ExcludedTopic,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::Visibility => "visibility",
            Rejection::Archived => "archived",
            Rejection::MissingTopic => "missing included topic",
            Rejection::ExcludedTopic => "excluded topic",
        }
    }
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.included_topics.is_empty()
            && self.excluded_topics.is_empty()
            && !self.exclude_archived
            && self.visibilities.is_empty()
    }

    pub fn matches(&self, repo: &Repository) -> bool {
        self.check(repo).is_ok()
    }

    pub fn check(&self, repo: &Repository) -> Result<(), Rejection> {
        if !self.visibilities.is_empty() {
            let allowed = repo
                .visibility
                .as_ref()
                .is_some_and(|v| self.visibilities.contains(v));
            if !allowed {
                return Err(Rejection::Visibility);
            }
        }

        if self.exclude_archived && repo.is_archived() {
            return Err(Rejection::Archived);
        }

        let topics = repo.topics();

        if !self.included_topics.is_empty()
            && !has_intersection(topics, self.included_topics.as_slice())
        {
            return Err(Rejection::MissingTopic);
        }

        if !self.excluded_topics.is_empty()
            && has_intersection(topics, self.excluded_topics.as_slice())
        {
            return Err(Rejection::ExcludedTopic);
        }

        Ok(())
    }
}

/// Keeps the repositories matching every active rule, in input order.
pub fn filter_repositories(repos: Vec<Repository>, criteria: &FilterCriteria) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|repo| criteria.matches(repo))
        .collect()
}
