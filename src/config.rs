// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{MirrorError, Result};
use crate::filter::FilterCriteria;
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    pub mirror: MirrorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterConfig {
    #[serde(default, deserialize_with = "list_or_csv")]
    pub included_topics: Vec<String>,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub excluded_topics: Vec<String>,
    #[serde(default)]
    pub exclude_archived: bool,
    #[serde(default, deserialize_with = "list_or_csv")]
    pub visibility: Vec<String>,
    #[serde(default)]
    pub name_pattern: Option<String>,
    #[serde(default)]
    pub exclude_pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MirrorConfig {
    pub host: String,
    pub dest_dir: PathBuf,
}

impl FilterConfig {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            included_topics: self.included_topics.clone(),
            excluded_topics: self.excluded_topics.clone(),
            exclude_archived: self.exclude_archived,
            visibilities: self.visibility.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListValue {
    List(Vec<String>),
    Csv(String),
}

// Environment overrides arrive as a single comma separated string. They are
// read without type parsing so topics like `2024` or `007` stay verbatim;
// `config` still coerces "true"/"1" strings for bool fields.
fn list_or_csv<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ListValue::deserialize(deserializer)? {
        ListValue::List(items) => items,
        ListValue::Csv(value) => Validator::split_list(&value),
    })
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("MIRROR_FILTER").separator("__"),
        );

        let settings = builder
            .build()
            .map_err(|e| MirrorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| MirrorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            filter: FilterConfig {
                exclude_archived: true,
                ..FilterConfig::default()
            },
            mirror: MirrorConfig {
                host: "github.com".to_string(),
                dest_dir: PathBuf::from("./mirrors"),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_visibilities(&self.filter.visibility)?;
        Validator::validate_host(&self.mirror.host)?;

        for pattern in [&self.filter.name_pattern, &self.filter.exclude_pattern]
            .into_iter()
            .flatten()
        {
            Validator::validate_pattern(pattern)?;
        }

        Ok(())
    }
}
