//!
//! Ticker autocomplete engine and the types shared with its front ends.
//!
//! This crate aggregates:
//! - `error` — unified error type `SuggestError` used across the workspace.
//! - `result` — handy `Result<T, SuggestError>` alias.
//! - `company` — `Company` records and the JSON/HTTP loaders for the company list.
//! - `store` — load-once `CompanyStore` handle shared with the engine.
//! - `matcher` — case-insensitive substring matching capped to ten results.
//! - `logo` — logo strategies and the terminating `LogoChain` fallback.
//! - `debounce` — cancellable single-shot `DebounceTimer`.
//! - `config` — `EngineConfig` defaults and environment overrides.
//! - `engine` — `SuggestionEngine` and the `SuggestionView` rendering seam.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod company;
pub mod store;
pub mod matcher;
pub mod logo;
pub mod debounce;
pub mod config;
pub mod engine;

pub use error::SuggestError;
pub use result::Result;
pub use company::Company;
pub use store::CompanyStore;
pub use config::EngineConfig;
pub use engine::{EngineState, SuggestionEngine, SuggestionEntry, SuggestionView};
