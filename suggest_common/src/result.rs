//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `SuggestError`, so functions can simply
//! return `Result<T>`.
use crate::error::SuggestError;

/// Workspace-wide `Result` alias with `SuggestError` as the default error.
pub type Result<T, E = SuggestError> = std::result::Result<T, E>;
