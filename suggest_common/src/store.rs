//! Shared, load-once holder for the company list.
//!
//! `CompanyStore` is a cheap cloneable handle. The list is set exactly once, either
//! synchronously from embedded data or by a one-shot background fetch; until then
//! every read observes an empty slice. The engine only ever reads from it.
use std::sync::{Arc, OnceLock};
use std::thread;

use log::{error, info, warn};

use crate::company::{Company, fetch_companies};

/// Handle to the company list shared between the loader and the engine.
#[derive(Debug, Clone, Default)]
pub struct CompanyStore {
    inner: Arc<OnceLock<Vec<Company>>>,
}

impl CompanyStore {
    /// Creates an empty, not yet loaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that is already loaded with `companies`.
    pub fn with_companies(companies: Vec<Company>) -> Self {
        let store = Self::new();
        store.load(companies);
        store
    }

    /// Sets the company list. Only the first call wins; returns whether it did.
    pub fn load(&self, companies: Vec<Company>) -> bool {
        let count = companies.len();
        match self.inner.set(companies) {
            Ok(()) => {
                info!("Company store loaded with {} companies", count);
                true
            }
            Err(_) => {
                warn!("Company store already loaded, ignoring {} companies", count);
                false
            }
        }
    }

    /// The loaded companies, or an empty slice before loading completes.
    pub fn companies(&self) -> &[Company] {
        self.inner.get().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a load (successful or failed) has settled the store.
    pub fn is_loaded(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Fire-and-forget fetch of the company list from `url` on a background thread.
    ///
    /// There is no retry and no cancellation. A failed fetch is logged and settles
    /// the store with an empty list.
    pub fn spawn_fetch(&self, url: &str) -> thread::JoinHandle<()> {
        let store = self.clone();
        let url = url.to_string();
        thread::spawn(move || {
            let companies = match fetch_companies(&url) {
                Ok(companies) => companies,
                Err(e) => {
                    error!("Error fetching companies from {}: {}", url, e);
                    Vec::new()
                }
            };
            store.load(companies);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_empty_until_loaded() {
        let store = CompanyStore::new();
        assert!(store.companies().is_empty());
        assert!(!store.is_loaded());

        let reader = store.clone();
        assert!(store.load(vec![Company::new("Apple Inc.", "AAPL")]));
        assert!(reader.is_loaded());
        assert_eq!(reader.companies().len(), 1);
    }

    #[test]
    fn second_load_is_ignored() {
        let store = CompanyStore::with_companies(vec![Company::new("Apple Inc.", "AAPL")]);
        assert!(!store.load(vec![]));
        assert_eq!(store.companies()[0].ticker, "AAPL");
    }

    #[test]
    fn failed_fetch_settles_empty() {
        let store = CompanyStore::new();
        // Port 9 on localhost refuses connections on any sane test host.
        store.spawn_fetch("http://127.0.0.1:9/api/companies").join().unwrap();
        assert!(store.is_loaded());
        assert!(store.companies().is_empty());
    }
}
