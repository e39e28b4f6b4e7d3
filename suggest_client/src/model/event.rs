//! UI events typed on stdin.
//!
//! Each line is one event. Plain text replaces the whole input value; lines starting
//! with `:` are commands standing in for mouse actions:
//!
//! ```text
//! :select 2         click the second suggestion
//! :click-outside    click anywhere outside the dropdown
//! :logo-error 1     the logo of the first suggestion failed to load
//! :quit             exit
//! ::text            input whose value is `:text`
//! ```
use std::str::FromStr;

use suggest_common::SuggestError;

/// An event delivered to the engine's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The input now holds this text.
    Input(String),
    /// Click on the suggestion at this zero-based index.
    Select(usize),
    /// Click outside the input and the dropdown.
    ClickOutside,
    /// Logo load failure for the suggestion at this zero-based index.
    LogoError(usize),
    /// Leave the event loop.
    Quit,
}

impl FromStr for UiEvent {
    type Err = SuggestError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if let Some(literal) = line.strip_prefix("::") {
            return Ok(UiEvent::Input(format!(":{}", literal)));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(UiEvent::Input(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("select"), Some(n)) => Ok(UiEvent::Select(parse_position(n)?)),
            (Some("logo-error"), Some(n)) => Ok(UiEvent::LogoError(parse_position(n)?)),
            (Some("click-outside"), None) => Ok(UiEvent::ClickOutside),
            (Some("quit"), None) => Ok(UiEvent::Quit),
            _ => Err(SuggestError::Format(format!("Unknown command: {}", line))),
        }
    }
}

/// Parse a one-based position as typed by the user into a zero-based index.
fn parse_position(raw: &str) -> Result<usize, SuggestError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(SuggestError::Format(format!(
            "Expected a suggestion number starting at 1, got '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_input() {
        assert_eq!("Amaz".parse::<UiEvent>().unwrap(), UiEvent::Input("Amaz".into()));
        assert_eq!("".parse::<UiEvent>().unwrap(), UiEvent::Input(String::new()));
    }

    #[test]
    fn double_colon_types_a_literal_colon() {
        assert_eq!("::quit".parse::<UiEvent>().unwrap(), UiEvent::Input(":quit".into()));
        assert_eq!("::".parse::<UiEvent>().unwrap(), UiEvent::Input(":".into()));
    }

    #[test]
    fn commands_use_one_based_positions() {
        assert_eq!(":select 3".parse::<UiEvent>().unwrap(), UiEvent::Select(2));
        assert_eq!(":logo-error 1".parse::<UiEvent>().unwrap(), UiEvent::LogoError(0));
        assert_eq!(":click-outside".parse::<UiEvent>().unwrap(), UiEvent::ClickOutside);
        assert_eq!(":quit".parse::<UiEvent>().unwrap(), UiEvent::Quit);
    }

    #[test]
    fn bad_commands_are_rejected() {
        assert!(":select 0".parse::<UiEvent>().is_err());
        assert!(":select x".parse::<UiEvent>().is_err());
        assert!(":jump".parse::<UiEvent>().is_err());
    }
}
