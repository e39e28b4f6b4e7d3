//! Command-line arguments for the ticker search client.
//!
//! This module defines the CLI interface using `clap`. Values given here override the
//! environment (see `EngineConfig::from_env`).
use std::time::Duration;

use clap::{ArgGroup, Parser};
use suggest_common::logo::LogoStrategy;
use suggest_common::{EngineConfig, SuggestError};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["companies", "url"])))]
pub struct Args {
    /// Path to a JSON file with the company list (`[{"name": ..., "ticker": ...}]`).
    #[clap(long)]
    pub companies: Option<String>,

    /// HTTP endpoint returning the company list, fetched once in the background.
    #[clap(long)]
    pub url: Option<String>,

    /// Where logos come from.
    #[clap(long, value_enum)]
    pub logos: Option<LogoStrategy>,

    /// Base path for local logos.
    #[clap(long)]
    pub logo_base: Option<String>,

    /// Quiet period in milliseconds before suggestions are recomputed.
    #[clap(long)]
    pub debounce_ms: Option<u64>,

    /// Maximum number of suggestions to show.
    #[clap(long)]
    pub max: Option<usize>,
}

impl Args {
    /// Overlay the options that were given on top of `config`.
    pub fn apply(&self, config: &mut EngineConfig) -> Result<(), SuggestError> {
        if let Some(strategy) = self.logos {
            config.logos.strategy = strategy;
        }
        if let Some(base) = &self.logo_base {
            config.logos.local_base = base.clone();
        }
        if let Some(ms) = self.debounce_ms {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(max) = self.max {
            if max == 0 {
                return Err(SuggestError::InvalidConfig {
                    key: "--max".to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            config.max_suggestions = max;
        }
        Ok(())
    }
}
