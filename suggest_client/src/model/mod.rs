//! Data model types of the terminal front end.
//!
//! - `event` — UI events read from stdin (typing, clicks, logo failures).
pub mod event;
