use clap::Parser;
use client_core::{normalize_base_url, ClientError, DEFAULT_API_BASE};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "travel-assistant",
    about = "Desktop client for the weather summarizer and travel guide service"
)]
pub struct Args {
    /// Origin of the travel service. Fixed for the lifetime of the process.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Drop responses that arrive after a newer request of the same flow.
    #[arg(long)]
    pub ignore_stale_responses: bool,

    /// tracing-subscriber filter directives; falls back to RUST_LOG, then `info`.
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base: String,
    pub ignore_stale_responses: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            ignore_stale_responses: false,
        }
    }
}

impl StartupConfig {
    pub fn from_args(args: &Args) -> Result<Self, ClientError> {
        Ok(Self {
            api_base: normalize_base_url(&args.api_base)?,
            ignore_stale_responses: args.ignore_stale_responses,
        })
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
