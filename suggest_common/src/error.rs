//! Error types shared between the engine and its front ends.
//!
//! The `SuggestError` enum unifies the failure cases of loading the company list
//! (I/O, JSON, HTTP), reading configuration and driving the engine, so every crate
//! in the workspace propagates a single error type.
use std::io;

use thiserror::Error;

/// Unified error type for the suggestion workspace.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while decoding the company list with serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// HTTP request for the company list failed (connect, status or body).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// A suggestion index did not refer to a currently rendered entry.
    #[error("Suggestion index {index} out of range ({len} shown)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of entries currently shown.
        len: usize,
    },

    /// A configuration value could not be parsed.
    #[error("Invalid configuration for {key}: {reason}")]
    InvalidConfig {
        /// Environment variable or option name.
        key: String,
        /// What was wrong with the value.
        reason: String,
    },
}
