// Mon Oct 19 2026 - Alex

use crate::error::{ResolveError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PREFIX: &str = "/opt/homebrew/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RpathPolicy {
    /// Substitute only the first recorded search path.
    FirstEntry,
    /// Use the first search path under which the library exists.
    FirstExisting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    Macho,
    Otool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Tsv,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prefix: String,
    pub report_all: bool,
    pub rpath_policy: RpathPolicy,
    pub provider: ProviderKind,
    pub otool_path: PathBuf,
    pub jobs: usize,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            report_all: false,
            rpath_policy: RpathPolicy::FirstEntry,
            provider: ProviderKind::Macho,
            otool_path: PathBuf::from("otool"),
            jobs: num_cpus::get(),
            format: OutputFormat::Tsv,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ResolveError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&contents).map_err(|source| ResolveError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_report_all(mut self, report_all: bool) -> Self {
        self.report_all = report_all;
        self
    }

    pub fn with_rpath_policy(mut self, policy: RpathPolicy) -> Self {
        self.rpath_policy = policy;
        self
    }

    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_otool_path(mut self, path: PathBuf) -> Self {
        self.otool_path = path;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(ResolveError::Config("prefix must not be empty".to_string()));
        }
        if self.jobs == 0 {
            return Err(ResolveError::Config("jobs must be greater than 0".to_string()));
        }
        if self.provider == ProviderKind::Otool && self.otool_path.as_os_str().is_empty() {
            return Err(ResolveError::Config("otool path must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prefix, DEFAULT_PREFIX);
        assert_eq!(config.rpath_policy, RpathPolicy::FirstEntry);
    }

    #[test]
    fn test_rejects_empty_prefix_and_zero_jobs() {
        assert!(Config::new().with_prefix("").validate().is_err());
        assert!(Config::new().with_jobs(0).validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"prefix": "/usr/local/", "rpath_policy": "first-existing"}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.prefix, "/usr/local/");
        assert_eq!(config.rpath_policy, RpathPolicy::FirstExisting);
        assert_eq!(config.format, OutputFormat::Tsv);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ResolveError::ConfigParse { .. }));
    }
}
