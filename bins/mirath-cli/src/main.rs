//! mirath — command-line front end for the Mirath distribution engine.
//!
//! Reads a JSON case file (deceased estate figures plus heir roster),
//! validates it or computes the distribution, and prints the result as a
//! text table or JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mirath_core::types::Case;
use mirath_core::validation::validate_case;
use mirath_engine::DistributionEngine;
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

mod config;
mod render;

use config::{Config, LogFormat, OutputFormat};

/// Mirath estate distribution calculator.
#[derive(Parser)]
#[command(name = "mirath")]
#[command(version, about = "Fara'id estate distribution calculator")]
struct Cli {
    /// Log filter (trace, debug, info, warn, error). Overrides RUST_LOG and
    /// MIRATH_LOG; without it RUST_LOG wins over MIRATH_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json"). Overrides MIRATH_LOG_FORMAT.
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the distribution for a case file.
    Compute(ComputeArgs),
    /// Check a case file against the data-entry rules.
    Validate(ValidateArgs),
    /// List the relationship tokens accepted in case files.
    Relationships,
}

#[derive(Args)]
struct ComputeArgs {
    /// Path to the JSON case file.
    case: PathBuf,

    /// Output format ("text" or "json"). Overrides MIRATH_OUTPUT.
    #[arg(short, long)]
    output: Option<String>,

    /// Run case validation first and refuse invalid cases.
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct ValidateArgs {
    /// Path to the JSON case file.
    case: PathBuf,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        self.resolve_config_with(|key| std::env::var(key).ok())
    }

    /// Flags take the place of their environment variables before any
    /// value is parsed, so a flag also masks an invalid env value.
    fn resolve_config_with<F>(&self, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match &self.command {
            Commands::Compute(args) => args.output.clone(),
            _ => None,
        };
        Config::from_lookup(|key| {
            let flag = match key {
                "MIRATH_LOG" => self.log_level.clone(),
                "MIRATH_LOG_FORMAT" => self.log_format.clone(),
                "MIRATH_OUTPUT" => output.clone(),
                _ => None,
            };
            flag.or_else(|| env(key))
        })
        .context("Failed to load configuration")
    }

    /// `--log-level`, then `RUST_LOG`, then the configured level.
    fn log_filter(&self, config: &Config) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(cli.log_filter(&config), config.log_format);

    let out = match &cli.command {
        Commands::Compute(args) => run_compute(args, config.output)?,
        Commands::Validate(args) => run_validate(args)?,
        Commands::Relationships => render::relationships_text(),
    };
    print!("{out}");
    Ok(())
}

/// Initialize a tracing subscriber on stderr.
fn init_logging(filter: EnvFilter, format: LogFormat) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Read and decode a case file.
fn load_case(path: &Path) -> Result<Case> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read case file {}", path.display()))?;
    let case = Case::from_json(&raw)
        .with_context(|| format!("Failed to decode case file {}", path.display()))?;
    debug!(heirs = case.heirs.len(), "case loaded");
    Ok(case)
}

/// Compute a case file and render the summary.
fn run_compute(args: &ComputeArgs, output: OutputFormat) -> Result<String> {
    let case = load_case(&args.case)?;
    if args.strict {
        validate_case(&case.deceased, &case.heirs).context("Case failed validation")?;
    }

    let summary = DistributionEngine::new().compute_case(&case);
    info!(
        net_estate = summary.net_estate,
        distributed = summary.total_distributed,
        remaining = summary.remaining_amount,
        results = summary.results.len(),
        "distribution computed"
    );

    match output {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(render::summary_text(&summary)),
    }
}

fn run_validate(args: &ValidateArgs) -> Result<String> {
    let case = load_case(&args.case)?;
    validate_case(&case.deceased, &case.heirs).context("Case failed validation")?;
    Ok(format!("{}: ok ({} heirs)\n", args.case.display(), case.heirs.len()))
}
