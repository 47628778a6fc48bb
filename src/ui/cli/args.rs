// Mon Oct 19 2026 - Alex

use crate::config::{Config, OutputFormat, ProviderKind, RpathPolicy};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dylib-deps")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "List the non-system dylibs a set of binaries loads at runtime", long_about = None)]
pub struct Args {
    /// Entry binaries to inspect
    #[arg(required = true)]
    pub binaries: Vec<PathBuf>,

    /// Only report libraries whose canonical path starts with this prefix
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Report every library, including system and unresolved ones
    #[arg(short, long)]
    pub all: bool,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Path to the otool executable
    #[arg(long)]
    pub otool: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub rpath_policy: Option<RpathPolicy>,

    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn to_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(prefix) = &self.prefix {
            config = config.with_prefix(prefix.clone());
        }
        if self.all {
            config = config.with_report_all(true);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        if let Some(provider) = self.provider {
            config = config.with_provider(provider);
        }
        if let Some(otool) = &self.otool {
            config = config.with_otool_path(otool.clone());
        }
        if let Some(policy) = self.rpath_policy {
            config = config.with_rpath_policy(policy);
        }
        if let Some(jobs) = self.jobs {
            config = config.with_jobs(jobs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}
