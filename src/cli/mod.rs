//! # CLI
//!
//! `pdfcheck [--base-url URL] [--output PATH] ...`. With no arguments the
//! checks run against a local service on port 5000.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_PATH, HarnessConfig};
use crate::error::HarnessError;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "pdfcheck",
    version,
    about = "Contract checks for an HTML-table-to-PDF service"
)]
pub struct CliConfig {
    /// Base URL of the service under test.
    #[arg(long, env = "PDFCHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Where to save the generated PDF.
    #[arg(short, long = "output", env = "PDFCHECK_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Send this file's HTML instead of the built-in sample table.
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// Per-request timeout; unset or 0 keeps the client default.
    #[arg(long, env = "PDFCHECK_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Also write the JSON report to this file.
    #[arg(long = "report")]
    pub report_path: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for the run report on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl CliConfig {
    pub fn harness_config(&self) -> Result<HarnessConfig, HarnessError> {
        let mut config = HarnessConfig::new(&self.base_url)
            .with_output_path(&self.output_path)
            .with_timeout(self.timeout_ms.map(Duration::from_millis));

        if let Some(path) = &self.html_file {
            let html = fs::read_to_string(path).map_err(|e| HarnessError::io("read", path, e))?;
            config = config.with_html_table(html);
        }

        Ok(config)
    }

    /// Default `tracing` filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
