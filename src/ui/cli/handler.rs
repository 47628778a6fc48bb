// Mon Oct 19 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::graph::{DependencyGraph, GraphBuilder};
use crate::metadata::provider_for;
use crate::report::{GraphSummary, PrefixFilter, ReportEntry, ReportWriter};
use crate::resolve::PathResolver;
use crate::ui::progress::ProgressSpinner;
use anyhow::Context;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter};

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;
        self.run(&args)
    }

    /// Everything after logging setup.
    pub fn run(&self, args: &Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }

        let config = args.to_config().context("Failed to build configuration")?;
        log::debug!("Using config: {:?}", config);

        let graph = self.discover(args, &config)?;
        let report = filter_for(&config).report(&graph);

        self.write_report(args, &config, &report)?;

        if let Some(summary) = summary_for(args, &graph, &report) {
            eprintln!("{}", summary);
        }
        Ok(())
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }

    fn discover(&self, args: &Args, config: &Config) -> anyhow::Result<DependencyGraph> {
        let provider = provider_for(config);
        log::info!("Reading load commands with the {} provider", provider.name());

        let spinner = if args.show_progress() {
            ProgressSpinner::new("Resolving dependencies...")
        } else {
            ProgressSpinner::hidden()
        };
        let ticker = spinner.clone();

        let builder = GraphBuilder::new(provider, PathResolver::with_policy(config.rpath_policy))
            .with_jobs(config.jobs)
            .with_callback(move |node| ticker.advance(node.canonical_path.to_string()));

        let result = builder.discover(&args.binaries);
        spinner.finish_and_clear();

        result.context("Dependency resolution failed")
    }

    fn write_report(&self, args: &Args, config: &Config, report: &[ReportEntry]) -> anyhow::Result<()> {
        let writer = ReportWriter::new(config.format);
        match &args.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                writer.write(&mut BufWriter::new(file), report)?;
                if !args.quiet {
                    eprintln!("{} Report written to {}", "[+]".green(), path.display());
                }
            }
            None => {
                let stdout = io::stdout();
                writer.write(&mut stdout.lock(), report)?;
            }
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub fn filter_for(config: &Config) -> PrefixFilter {
    if config.report_all {
        PrefixFilter::all()
    } else {
        PrefixFilter::new(config.prefix.clone())
    }
}

pub fn summary_for(args: &Args, graph: &DependencyGraph, report: &[ReportEntry]) -> Option<GraphSummary> {
    if args.quiet {
        None
    } else {
        Some(GraphSummary::new(graph, report))
    }
}
