//! CLI configuration loaded from environment variables.
//!
//! Command-line flags take the place of these variables; see
//! `Cli::resolve_config_with` in `main.rs`.

use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// How results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format: {other} (expected text or json)"),
        }
    }
}

/// How log lines are emitted on stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown log format: {other} (expected text or json)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Log filter directive (e.g. "warn", "mirath_engine=debug").
    pub log_level: String,
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load `MIRATH_LOG`, `MIRATH_LOG_FORMAT` and `MIRATH_OUTPUT` through
    /// `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("MIRATH_LOG").unwrap_or(defaults.log_level);

        let log_format = match lookup("MIRATH_LOG_FORMAT") {
            Some(v) => v
                .parse()
                .context("MIRATH_LOG_FORMAT (or --log-format) must be text or json")?,
            None => defaults.log_format,
        };

        let output = match lookup("MIRATH_OUTPUT") {
            Some(v) => v
                .parse()
                .context("MIRATH_OUTPUT (or --output) must be text or json")?,
            None => defaults.output,
        };

        Ok(Config {
            log_level,
            log_format,
            output,
        })
    }
}
