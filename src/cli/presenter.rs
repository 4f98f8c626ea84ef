//! CLI presenter for output formatting

use colored::*;

use crate::application::DurationReport;

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Force colored error output on or off
    pub fn set_color(&self, enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the actual conversion result)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Render a report as pretty JSON
    pub fn format_report_json(&self, report: &DurationReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Underline the offending character of a rejected input.
    ///
    /// Returns two lines: the input and a caret under byte `position`.
    pub fn format_error_marker(&self, input: &str, position: usize) -> String {
        let prefix = input.get(..position).unwrap_or(input);
        let pad = prefix.chars().count();
        format!("  {}\n  {}{}", input, " ".repeat(pad), "^".red())
    }

    /// Print the input with a caret under the offending character to stderr
    pub fn error_marker(&self, input: &str, position: usize) {
        eprintln!("{}", self.format_error_marker(input, position));
    }
}
