//! Logo resolution with a terminating fallback chain.
//!
//! Every suggestion entry owns a `LogoChain`: a primary image keyed by the ticker, a
//! secondary image, and finally a text badge that always renders. A load failure
//! advances the chain exactly one step; once the badge is reached further failures
//! are ignored, so the chain can never loop.
//!
//! Two strategies produce the image URLs:
//! - `local` — static assets under a base path (`<base>/<TICKER>.png`, then
//!   `<base>/default.png`).
//! - `remote` — a domain-guess logo service, then a ticker-query service that needs
//!   an API token from configuration.
use clap::ValueEnum;
use log::debug;
use strum_macros::{Display, EnumString};
use url::Url;

use crate::company::Company;

/// Default base path for locally hosted logos.
pub const DEFAULT_LOCAL_BASE: &str = "/static/logos";
/// Domain-guess logo service.
pub const CLEARBIT_BASE: &str = "https://logo.clearbit.com";
/// Ticker-query logo service.
pub const LOGO_DEV_BASE: &str = "https://api.logo.dev";

/// Where logo images come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogoStrategy {
    /// Static files served next to the page.
    #[default]
    Local,
    /// Third-party logo lookup services.
    Remote,
}

/// Logo settings used to build a chain for each company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoConfig {
    /// Which family of sources to use.
    pub strategy: LogoStrategy,
    /// Base path for the `local` strategy.
    pub local_base: String,
    /// Token for the ticker-query service. Without it that step is skipped.
    pub logo_dev_token: Option<String>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        LogoConfig {
            strategy: LogoStrategy::Local,
            local_base: DEFAULT_LOCAL_BASE.to_string(),
            logo_dev_token: None,
        }
    }
}

impl LogoConfig {
    /// Builds the fallback chain for `company`.
    pub fn chain_for(&self, company: &Company) -> LogoChain {
        let images = match self.strategy {
            LogoStrategy::Local => {
                let base = self.local_base.trim_end_matches('/');
                vec![
                    format!("{}/{}.png", base, company.ticker),
                    format!("{}/default.png", base),
                ]
            }
            LogoStrategy::Remote => {
                let mut images = vec![clearbit_url(company)];
                if let Some(token) = self.logo_dev_token.as_deref() {
                    images.extend(logo_dev_url(&company.ticker, token));
                }
                images
            }
        };

        LogoChain::new(images, badge_text(&company.ticker))
    }
}

/// What an entry should currently display as its logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    /// Load an image from this URL or path.
    Image(String),
    /// Render a static badge with this text instead of an image.
    Placeholder(String),
}

/// Ordered logo sources ending in a placeholder badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoChain {
    sources: Vec<LogoSource>,
    position: usize,
}

impl LogoChain {
    /// Creates a chain trying `images` in order, then falling back to `badge`.
    pub fn new(images: Vec<String>, badge: String) -> Self {
        let mut sources: Vec<LogoSource> = images.into_iter().map(LogoSource::Image).collect();
        sources.push(LogoSource::Placeholder(badge));
        LogoChain { sources, position: 0 }
    }

    /// The source to display right now.
    pub fn current(&self) -> &LogoSource {
        &self.sources[self.position]
    }

    /// Reports that the current image failed to load.
    ///
    /// Returns the next source to display, or `None` when the chain is already on its
    /// placeholder and nothing more should be attempted.
    pub fn on_load_error(&mut self) -> Option<&LogoSource> {
        if self.is_exhausted() {
            return None;
        }
        self.position += 1;
        debug!("Logo fallback to {:?}", self.current());
        Some(self.current())
    }

    /// Whether the placeholder is showing.
    pub fn is_exhausted(&self) -> bool {
        self.position + 1 == self.sources.len()
    }
}

/// Badge text: the first two characters of the ticker, uppercased.
pub fn badge_text(ticker: &str) -> String {
    ticker.chars().take(2).collect::<String>().to_uppercase()
}

fn clearbit_url(company: &Company) -> String {
    let domain = company
        .website
        .clone()
        .unwrap_or_else(|| format!("{}.com", company.ticker.to_lowercase()));
    format!("{}/{}", CLEARBIT_BASE, domain)
}

fn logo_dev_url(ticker: &str, token: &str) -> Option<String> {
    let base = format!("{}/{}", LOGO_DEV_BASE, ticker.to_uppercase());
    match Url::parse_with_params(&base, &[("token", token), ("format", "png"), ("size", "200")]) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            debug!("Skipping ticker logo lookup for {}: {}", ticker, e);
            None
        }
    }
}
