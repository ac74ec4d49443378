use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use dsnforge_generate::LocaleKey;
use dsnforge_generate::model::DEFAULT_INDIVIDUALS;

pub const DEFAULT_OUT: &str = "dsn.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// One layer of generation settings; unset keys fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub out: Option<PathBuf>,
    pub individuals: Option<u64>,
    pub seed: Option<u64>,
    pub reference_date: Option<NaiveDate>,
    pub locale: Option<LocaleKey>,
    pub with_activity: Option<bool>,
    pub report: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Keep values set on `self`, fill the rest from `lower`.
    pub fn or(self, lower: GeneratorConfig) -> Self {
        Self {
            out: self.out.or(lower.out),
            individuals: self.individuals.or(lower.individuals),
            seed: self.seed.or(lower.seed),
            reference_date: self.reference_date.or(lower.reference_date),
            locale: self.locale.or(lower.locale),
            with_activity: self.with_activity.or(lower.with_activity),
            report: self.report.or(lower.report),
        }
    }

    /// Apply defaults to whatever is still unset.
    pub fn resolve(self, today: NaiveDate) -> ResolvedConfig {
        ResolvedConfig {
            out: self.out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT)),
            individuals: self.individuals.unwrap_or(DEFAULT_INDIVIDUALS),
            seed: self.seed,
            reference_date: self.reference_date.unwrap_or(today),
            locale: self.locale.unwrap_or_default(),
            with_activity: self.with_activity.unwrap_or(false),
            report: self.report,
        }
    }
}

/// Settings for one `generate` run after merging flags, file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub out: PathBuf,
    pub individuals: u64,
    /// `None` lets the source draw and report its own seed.
    pub seed: Option<u64>,
    pub reference_date: NaiveDate,
    pub locale: LocaleKey,
    pub with_activity: bool,
    pub report: Option<PathBuf>,
}
