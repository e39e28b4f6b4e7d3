//! Debounced suggestion engine.
//!
//! The engine turns UI events into suggestion updates. It is driven entirely by the
//! hosting event loop through explicit calls:
//!
//! - `on_input_changed(value, now)` — a keystroke; (re)starts the debounce window.
//! - `poll(now)` — fires the debounce timer when due, recomputes matches and renders.
//! - `on_outside_click()` — a click outside the input/dropdown; clears suggestions.
//! - `on_suggestion_selected(index)` — a click on an entry; writes its ticker to the
//!   input and clears suggestions.
//! - `on_logo_error(index)` — a logo failed to load; advances that entry's fallback chain.
//!
//! Rendering goes through the `SuggestionView` trait so any surface (terminal, web
//! bindings, tests) can host the engine. Previously rendered entries are always
//! cleared before new ones are rendered.
//!
//! The engine is single-threaded: it is owned by one event loop and only reads the
//! shared `CompanyStore`, which looks empty until its one-shot load settles.
use std::time::Instant;

use log::{debug, info};

use crate::company::Company;
use crate::config::EngineConfig;
use crate::debounce::{DebounceTimer, TaskHandle};
use crate::error::SuggestError;
use crate::logo::{LogoChain, LogoSource};
use crate::matcher::find_matches;
use crate::store::CompanyStore;

/// UI surface the engine renders into.
pub trait SuggestionView {
    /// Remove every rendered suggestion (collapse the dropdown).
    fn clear(&mut self);
    /// Render `entries` in order. Called only after `clear` and never with an empty slice.
    fn render(&mut self, entries: &[SuggestionEntry]);
    /// Overwrite the text of the search input.
    fn set_input(&mut self, value: &str);
    /// Replace the logo of the rendered entry at `index`.
    fn update_logo(&mut self, index: usize, logo: &LogoSource);
}

/// One rendered suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    /// Company behind the entry.
    pub company: Company,
    /// Display text, `"<name> (<ticker>)"`.
    pub label: String,
    /// Logo sources still available for this entry.
    pub logo: LogoChain,
}

/// Coarse state of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing pending, nothing shown.
    Idle,
    /// Waiting for the debounce window to close.
    PendingDebounce,
    /// Suggestions are rendered.
    SuggestionsShown,
}

/// Suggestion engine bound to a company store and a view.
pub struct SuggestionEngine<V: SuggestionView> {
    store: CompanyStore,
    view: V,
    config: EngineConfig,
    timer: DebounceTimer<String>,
    entries: Vec<SuggestionEntry>,
    recomputations: u64,
}

impl<V: SuggestionView> SuggestionEngine<V> {
    /// Create an engine reading from `store` and rendering into `view`.
    pub fn new(store: CompanyStore, view: V, config: EngineConfig) -> Self {
        let timer = DebounceTimer::new(config.debounce);
        Self {
            store,
            view,
            config,
            timer,
            entries: Vec::new(),
            recomputations: 0,
        }
    }

    /// The input changed to `value` at `now`. Cancels any pending recomputation.
    pub fn on_input_changed(&mut self, value: &str, now: Instant) -> TaskHandle {
        debug!("Input changed to {:?}", value);
        self.timer.schedule(value.to_string(), now)
    }

    /// Run the pending recomputation if its quiet period is over.
    ///
    /// Returns `true` when suggestions were recomputed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.timer.take_due(now) {
            Some(value) => {
                self.recompute(&value);
                true
            }
            None => false,
        }
    }

    /// When `poll` next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// A click landed outside the input and the dropdown.
    pub fn on_outside_click(&mut self) {
        debug!("Outside click, clearing suggestions");
        self.clear_entries();
    }

    /// The entry at `index` was clicked. Returns the selected company.
    pub fn on_suggestion_selected(&mut self, index: usize) -> Result<Company, SuggestError> {
        let company = self.entry(index)?.company.clone();
        self.select(&company);
        Ok(company)
    }

    /// Select `company`: write its ticker into the input and collapse the dropdown.
    pub fn select(&mut self, company: &Company) {
        info!("Selected {}", company.label());
        self.timer.cancel_all();
        self.view.set_input(&company.ticker);
        self.clear_entries();
    }

    /// The logo of the entry at `index` failed to load.
    ///
    /// Returns `false` when the entry already shows its placeholder and nothing changed.
    pub fn on_logo_error(&mut self, index: usize) -> Result<bool, SuggestError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(SuggestError::IndexOutOfRange { index, len })?;

        match entry.logo.on_load_error() {
            Some(next) => {
                self.view.update_logo(index, next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Currently rendered suggestions.
    pub fn suggestions(&self) -> &[SuggestionEntry] {
        &self.entries
    }

    /// Current coarse state.
    pub fn state(&self) -> EngineState {
        if self.timer.is_pending() {
            EngineState::PendingDebounce
        } else if self.entries.is_empty() {
            EngineState::Idle
        } else {
            EngineState::SuggestionsShown
        }
    }

    /// Number of recomputations run so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// The view the engine renders into.
    pub fn view(&self) -> &V {
        &self.view
    }

    fn recompute(&mut self, value: &str) {
        self.recomputations += 1;
        self.clear_entries();

        let matches = find_matches(self.store.companies(), value, self.config.max_suggestions);
        debug!("{} suggestions for {:?}", matches.len(), value);
        if matches.is_empty() {
            return;
        }

        self.entries = matches
            .into_iter()
            .map(|company| SuggestionEntry {
                company: company.clone(),
                label: company.label(),
                logo: self.config.logos.chain_for(company),
            })
            .collect();
        self.view.render(&self.entries);
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
        self.view.clear();
    }

    fn entry(&self, index: usize) -> Result<&SuggestionEntry, SuggestError> {
        self.entries.get(index).ok_or(SuggestError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct CountingView {
        clears: usize,
        renders: usize,
    }

    impl SuggestionView for CountingView {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn render(&mut self, _entries: &[SuggestionEntry]) {
            self.renders += 1;
        }
        fn set_input(&mut self, _value: &str) {}
        fn update_logo(&mut self, _index: usize, _logo: &LogoSource) {}
    }

    #[test]
    fn unloaded_store_reads_as_empty() {
        let mut engine =
            SuggestionEngine::new(CompanyStore::new(), CountingView::default(), EngineConfig::default());
        let start = Instant::now();
        engine.on_input_changed("apple", start);

        assert!(engine.poll(start + Duration::from_millis(300)));
        assert!(engine.suggestions().is_empty());
        assert_eq!(engine.view().clears, 1);
        assert_eq!(engine.view().renders, 0);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn state_follows_timer_and_entries() {
        let store = CompanyStore::with_companies(vec![Company::new("Apple Inc.", "AAPL")]);
        let mut engine = SuggestionEngine::new(store, CountingView::default(), EngineConfig::default());
        let start = Instant::now();

        assert_eq!(engine.state(), EngineState::Idle);
        engine.on_input_changed("ap", start);
        assert_eq!(engine.state(), EngineState::PendingDebounce);
        assert!(!engine.poll(start + Duration::from_millis(100)));
        assert!(engine.poll(start + Duration::from_millis(300)));
        assert_eq!(engine.state(), EngineState::SuggestionsShown);
        engine.on_outside_click();
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn bad_index_is_reported() {
        let mut engine =
            SuggestionEngine::new(CompanyStore::new(), CountingView::default(), EngineConfig::default());
        let err = engine.on_suggestion_selected(3).unwrap_err();
        assert!(matches!(err, SuggestError::IndexOutOfRange { index: 3, len: 0 }));
        assert!(engine.on_logo_error(0).is_err());
    }
}
