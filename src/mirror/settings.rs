// file: src/mirror/settings.rs
// description: per-repository git config metadata and destination paths for mirrors
// reference: zoekt git-config conventions (zoekt.* keys)

use crate::config::MirrorConfig;
use crate::error::{MirrorError, Result};
use crate::models::Repository;
use crate::utils::{Validator, format_bool, format_optional_int};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const WEB_URL_TYPE: &str = "github";

/// Git config entries describing one mirrored repository, plus where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSettings {
    pub full_name: String,
    pub clone_url: Option<String>,
    pub destination: PathBuf,
    pub entries: BTreeMap<String, String>,
}

impl MirrorSettings {
    pub fn for_repository(repo: &Repository, config: &MirrorConfig) -> Result<Self> {
        let full_name = repo.full_name.as_deref().ok_or_else(|| {
            MirrorError::Validation(format!(
                "Repository {} has no full name",
                repo.display_name()
            ))
        })?;
        Validator::validate_full_name(full_name)?;

        let entries = metadata_entries(repo, &config.host, full_name);
        let destination = config
            .dest_dir
            .join(&config.host)
            .join(format!("{}.git", full_name));

        debug!("Mirror destination for {}: {}", full_name, destination.display());

        Ok(Self {
            full_name: full_name.to_string(),
            clone_url: repo.clone_url.clone(),
            destination,
            entries,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

fn metadata_entries(repo: &Repository, host: &str, full_name: &str) -> BTreeMap<String, String> {
    let entries = [
        ("zoekt.web-url-type", WEB_URL_TYPE.to_string()),
        ("zoekt.web-url", repo.html_url.clone().unwrap_or_default()),
        ("zoekt.name", format!("{}/{}", host, full_name)),
        ("zoekt.github-stars", format_optional_int(repo.stargazers_count)),
        ("zoekt.github-watchers", format_optional_int(repo.watchers_count)),
        (
            "zoekt.github-subscribers",
            format_optional_int(repo.subscribers_count),
        ),
        ("zoekt.github-forks", format_optional_int(repo.forks_count)),
        ("zoekt.archived", format_bool(repo.is_archived()).to_string()),
        ("zoekt.fork", format_bool(repo.is_fork()).to_string()),
        ("zoekt.public", format_bool(repo.is_public()).to_string()),
    ];

    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Settings for every repository, skipping (and logging) ones that cannot be named.
pub fn settings_for_all(repos: &[Repository], config: &MirrorConfig) -> Vec<MirrorSettings> {
    repos
        .iter()
        .filter_map(|repo| match MirrorSettings::for_repository(repo, config) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("Skipping {}: {}", repo.display_name(), e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mirror_config() -> MirrorConfig {
        MirrorConfig {
            host: "github.com".to_string(),
            dest_dir: PathBuf::from("/srv/mirrors"),
        }
    }

    #[test]
    fn test_settings_for_full_repository() {
        let repo = Repository {
            html_url: Some("https://github.com/sourcegraph/zoekt".to_string()),
            clone_url: Some("https://github.com/sourcegraph/zoekt.git".to_string()),
            private: Some(false),
            archived: Some(false),
            fork: Some(true),
            stargazers_count: Some(1200),
            watchers_count: Some(1200),
            subscribers_count: Some(40),
            forks_count: Some(0),
            ..Repository::new("sourcegraph/zoekt")
        };

        let settings = MirrorSettings::for_repository(&repo, &mirror_config()).unwrap();

        assert_eq!(
            settings.destination,
            PathBuf::from("/srv/mirrors/github.com/sourcegraph/zoekt.git")
        );
        assert_eq!(
            settings.clone_url.as_deref(),
            Some("https://github.com/sourcegraph/zoekt.git")
        );
        assert_eq!(settings.get("zoekt.web-url-type"), Some("github"));
        assert_eq!(
            settings.get("zoekt.web-url"),
            Some("https://github.com/sourcegraph/zoekt")
        );
        assert_eq!(settings.get("zoekt.name"), Some("github.com/sourcegraph/zoekt"));
        assert_eq!(settings.get("zoekt.github-stars"), Some("1200"));
        assert_eq!(settings.get("zoekt.github-subscribers"), Some("40"));
        assert_eq!(settings.get("zoekt.github-forks"), Some("0"));
        assert_eq!(settings.get("zoekt.archived"), Some("0"));
        assert_eq!(settings.get("zoekt.fork"), Some("1"));
        assert_eq!(settings.get("zoekt.public"), Some("1"));
        assert_eq!(settings.entries.len(), 10);
    }

    #[test]
    fn test_missing_counts_are_empty() {
        let repo = Repository {
            private: Some(true),
            archived: Some(true),
            ..Repository::new("acme/vault")
        };

        let settings = MirrorSettings::for_repository(&repo, &mirror_config()).unwrap();

        assert_eq!(settings.get("zoekt.web-url"), Some(""));
        assert_eq!(settings.get("zoekt.github-stars"), Some(""));
        assert_eq!(settings.get("zoekt.github-watchers"), Some(""));
        assert_eq!(settings.get("zoekt.archived"), Some("1"));
        assert_eq!(settings.get("zoekt.public"), Some("0"));
        assert_eq!(settings.get("zoekt.fork"), Some("0"));
    }

    #[test]
    fn test_unnamed_repository_rejected() {
        let err = MirrorSettings::for_repository(&Repository::default(), &mirror_config())
            .unwrap_err();
        assert!(matches!(err, MirrorError::Validation(_)));

        let traversal = Repository::new("../escape");
        assert!(MirrorSettings::for_repository(&traversal, &mirror_config()).is_err());
    }

    #[test]
    fn test_settings_for_all_skips_invalid() {
        let repos = vec![
            Repository::new("acme/one"),
            Repository::default(),
            Repository::new("acme/two"),
        ];

        let all = settings_for_all(&repos, &mirror_config());

        let names: Vec<&str> = all.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["acme/one", "acme/two"]);
    }
}
