// file: src/filter/selector.rs
// description: combined name and attribute selection of repositories to mirror
// reference: internal selection pipeline

use crate::config::FilterConfig;
use crate::error::Result;
use crate::filter::criteria::{FilterCriteria, Rejection};
use crate::filter::name::NameFilter;
use crate::models::Repository;
use crate::utils::logging::{format_dropped, format_kept};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStats {
    pub total: usize,
    pub kept: usize,
    pub by_name: usize,
    pub by_visibility: usize,
    pub by_archived: usize,
    pub by_missing_topic: usize,
    pub by_excluded_topic: usize,
}

impl SelectionStats {
    pub fn dropped(&self) -> usize {
        self.total - self.kept
    }

    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Visibility => self.by_visibility += 1,
            Rejection::Archived => self.by_archived += 1,
            Rejection::MissingTopic => self.by_missing_topic += 1,
            Rejection::ExcludedTopic => self.by_excluded_topic += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepositorySelector {
    names: NameFilter,
    criteria: FilterCriteria,
}

impl RepositorySelector {
    pub fn new(names: NameFilter, criteria: FilterCriteria) -> Self {
        Self { names, criteria }
    }

    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let names = NameFilter::new(
            config.name_pattern.as_deref(),
            config.exclude_pattern.as_deref(),
        )?;

        Ok(Self::new(names, config.criteria()))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn select(&self, repos: Vec<Repository>) -> Vec<Repository> {
        self.select_with_stats(repos).0
    }

    pub fn select_with_stats(&self, repos: Vec<Repository>) -> (Vec<Repository>, SelectionStats) {
        let mut stats = SelectionStats {
            total: repos.len(),
            ..SelectionStats::default()
        };

        let kept: Vec<Repository> = repos
            .into_iter()
            .filter(|repo| {
                if !self.names.matches(match_name(repo)) {
                    debug!("Dropping {}: name pattern", repo.display_name());
                    stats.by_name += 1;
                    return false;
                }

                match self.criteria.check(repo) {
                    Ok(()) => true,
                    Err(rejection) => {
                        debug!("Dropping {}: {}", repo.display_name(), rejection.as_str());
                        stats.record(rejection);
                        false
                    }
                }
            })
            .collect();

        stats.kept = kept.len();
        info!(
            "Selected {} of {} repositories ({} dropped)",
            stats.kept,
            stats.total,
            stats.dropped()
        );

        (kept, stats)
    }

    /// Console lines explaining the decision for each repository, in input order.
    pub fn explain(&self, repos: &[Repository]) -> Vec<String> {
        repos
            .iter()
            .map(|repo| {
                if !self.names.matches(match_name(repo)) {
                    return format_dropped(repo.display_name(), "name pattern");
                }

                match self.criteria.check(repo) {
                    Ok(()) => format_kept(repo.display_name()),
                    Err(rejection) => format_dropped(repo.display_name(), rejection.as_str()),
                }
            })
            .collect()
    }
}

fn match_name(repo: &Repository) -> Option<&str> {
    repo.full_name.as_deref().or(repo.name.as_deref())
}
