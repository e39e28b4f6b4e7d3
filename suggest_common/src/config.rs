//! Engine settings and their environment overrides.

use std::time::Duration;

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::SuggestError;
use crate::logo::{LogoConfig, LogoStrategy};
use crate::matcher::MAX_SUGGESTIONS;

/// Debounce quiet period in milliseconds.
pub const ENV_DEBOUNCE_MS: &str = "TICKER_SUGGEST_DEBOUNCE_MS";
/// Maximum number of suggestions.
pub const ENV_MAX: &str = "TICKER_SUGGEST_MAX";
/// Logo strategy, `local` or `remote`.
pub const ENV_LOGOS: &str = "TICKER_SUGGEST_LOGOS";
/// Base path for local logos.
pub const ENV_LOGO_BASE: &str = "TICKER_SUGGEST_LOGO_BASE";
/// Token for the ticker-query logo service.
pub const ENV_LOGO_DEV_TOKEN: &str = "LOGO_DEV_TOKEN";

/// Tunables of the suggestion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Quiet period before recomputing suggestions.
    pub debounce: Duration,
    /// Upper bound on rendered suggestions.
    pub max_suggestions: usize,
    /// Logo source settings.
    pub logos: LogoConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            debounce: DEFAULT_DEBOUNCE,
            max_suggestions: MAX_SUGGESTIONS,
            logos: LogoConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, SuggestError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SuggestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EngineConfig::default();

        if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
            config.debounce = Duration::from_millis(parse_number(ENV_DEBOUNCE_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX) {
            let max = parse_number(ENV_MAX, &raw)?;
            if max == 0 {
                return Err(invalid(ENV_MAX, "must be at least 1"));
            }
            config.max_suggestions = max as usize;
        }
        if let Some(raw) = lookup(ENV_LOGOS) {
            config.logos.strategy = raw
                .trim()
                .parse::<LogoStrategy>()
                .map_err(|e| invalid(ENV_LOGOS, &e.to_string()))?;
        }
        if let Some(base) = lookup(ENV_LOGO_BASE)
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty())
        {
            config.logos.local_base = base;
        }
        config.logos.logo_dev_token = lookup(ENV_LOGO_DEV_TOKEN)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Ok(config)
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, SuggestError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| invalid(key, &format!("'{}': {}", raw, e)))
}

fn invalid(key: &str, reason: &str) -> SuggestError {
    SuggestError::InvalidConfig {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
