//! Terminal rendering of the suggestion dropdown.
//!
//! Entries are printed as a numbered list so `:select <n>` and `:logo-error <n>` can
//! refer to them. Image logos are shown by their source, placeholders as a badge.
use std::io::Write;

use log::error;
use suggest_common::logo::LogoSource;
use suggest_common::{SuggestionEntry, SuggestionView};

/// `SuggestionView` writing to any `Write` sink (stdout in the binary).
pub struct TerminalView<W: Write> {
    out: W,
    input: String,
    shown: usize,
}

impl<W: Write> TerminalView<W> {
    /// Create a view printing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
            shown: 0,
        }
    }

    /// Current value of the search input as last written by the engine.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The underlying sink.
    #[cfg(test)]
    pub fn sink(&self) -> &W {
        &self.out
    }

    fn print(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            error!("Failed to write to terminal: {}", e);
        }
    }
}

fn describe_logo(logo: &LogoSource) -> String {
    match logo {
        LogoSource::Image(src) => format!("[img {}]", src),
        LogoSource::Placeholder(badge) => format!("[{}]", badge),
    }
}

impl<W: Write> SuggestionView for TerminalView<W> {
    fn clear(&mut self) {
        if self.shown > 0 {
            self.shown = 0;
            self.print("  (suggestions hidden)");
        }
    }

    fn render(&mut self, entries: &[SuggestionEntry]) {
        for (i, entry) in entries.iter().enumerate() {
            let line = format!("  {:>2}. {} {}", i + 1, describe_logo(entry.logo.current()), entry.label);
            self.print(&line);
        }
        self.shown = entries.len();
    }

    fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.print(&format!("> {}", value));
    }

    fn update_logo(&mut self, index: usize, logo: &LogoSource) {
        let line = format!("  {:>2}. logo -> {}", index + 1, describe_logo(logo));
        self.print(&line);
    }
}
