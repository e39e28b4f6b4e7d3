//! Company records and the loaders that produce the company list.
//!
//! Every source delivers the same JSON shape, an array of
//! `{"name": ..., "ticker": ..., "website": ...}` objects (`website` optional), so an
//! embedded file and an HTTP endpoint are interchangeable. Loaded records are
//! normalized: ticker trimmed and uppercased, name trimmed, website reduced to a bare
//! host name.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SuggestError;

/// A listed company as shown in the suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Display name (e.g., `Apple Inc.`).
    pub name: String,
    /// Ticker symbol (e.g., `AAPL`), written back into the input on selection.
    pub ticker: String,
    /// Bare web domain (e.g., `apple.com`) when the data source knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Company {
    /// Creates a normalized company without a website.
    pub fn new(name: &str, ticker: &str) -> Self {
        Company {
            name: name.trim().to_string(),
            ticker: ticker.trim().to_uppercase(),
            website: None,
        }
    }

    /// Attaches a website, keeping only its host name.
    pub fn with_website(mut self, website: &str) -> Self {
        self.website = clean_domain(website);
        self
    }

    /// Label rendered for the entry: `"<name> (<ticker>)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.ticker)
    }

    fn normalized(self) -> Self {
        let website = self.website.as_deref().and_then(clean_domain);
        Company {
            website,
            ..Company::new(&self.name, &self.ticker)
        }
    }
}

/// Reduce a URL or bare domain to its host without a leading `www.`.
///
/// Returns `None` for blank input. When the value cannot be parsed as a URL it is
/// returned trimmed but otherwise untouched.
pub fn clean_domain(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let host = Url::parse(&with_scheme)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .filter(|host| !host.is_empty());

    match host {
        Some(host) => Some(host.strip_prefix("www.").unwrap_or(&host).to_string()),
        None => {
            debug!("Could not parse website '{}', keeping it as is", trimmed);
            Some(trimmed.to_string())
        }
    }
}

/// Parses a JSON array of companies from a string.
pub fn companies_from_json_str(json: &str) -> Result<Vec<Company>, SuggestError> {
    let companies: Vec<Company> = serde_json::from_str(json)?;
    Ok(normalize_all(companies))
}

/// Parses a JSON array of companies from any reader.
pub fn companies_from_reader<R: Read>(reader: R) -> Result<Vec<Company>, SuggestError> {
    let companies: Vec<Company> = serde_json::from_reader(reader)?;
    Ok(normalize_all(companies))
}

/// Loads the embedded company list from a JSON file.
pub fn companies_from_file(path: &Path) -> Result<Vec<Company>, SuggestError> {
    let file = File::open(path)?;
    let companies = companies_from_reader(BufReader::new(file))?;
    info!("Loaded {} companies from {}", companies.len(), path.display());
    Ok(companies)
}

/// Fetches the company list with a blocking HTTP GET.
///
/// Non-success status codes are reported as `SuggestError::Http`.
pub fn fetch_companies(url: &str) -> Result<Vec<Company>, SuggestError> {
    debug!("GET {}", url);
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let companies: Vec<Company> = response.json()?;
    info!("Fetched {} companies from {}", companies.len(), url);
    Ok(normalize_all(companies))
}

fn normalize_all(companies: Vec<Company>) -> Vec<Company> {
    companies.into_iter().map(Company::normalized).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_domain_strips_scheme_path_and_www() {
        assert_eq!(clean_domain("https://www.apple.com/investor"), Some("apple.com".to_string()));
        assert_eq!(clean_domain("www.amazon.com"), Some("amazon.com".to_string()));
        assert_eq!(clean_domain("abc.xyz"), Some("abc.xyz".to_string()));
        assert_eq!(clean_domain("   "), None);
    }

    #[test]
    fn json_records_are_normalized() {
        let json = r#"[
            {"name": "  Apple Inc. ", "ticker": " aapl", "website": "https://www.apple.com"},
            {"name": "Amazon.com", "ticker": "AMZN"}
        ]"#;
        let companies = companies_from_json_str(json).unwrap();

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].name, "Apple Inc.");
        assert_eq!(companies[0].ticker, "AAPL");
        assert_eq!(companies[0].website.as_deref(), Some("apple.com"));
        assert_eq!(companies[1].website, None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = companies_from_json_str(r#"{"name": "Apple"}"#).unwrap_err();
        assert!(matches!(err, SuggestError::SerdeJson(_)));
    }

    #[test]
    fn label_puts_ticker_in_parentheses() {
        assert_eq!(Company::new("Amazon.com", "AMZN").label(), "Amazon.com (AMZN)");
    }
}
