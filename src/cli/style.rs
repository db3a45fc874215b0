//! Terminal styling helpers
//!
//! Colors are applied only when the target stream supports them.

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Check mark shown when a phase finishes
pub const CHECK: &str = "\u{2713}";

/// Sparkles shown before the success message
pub const SPARKLES: &str = "\u{2728}";

/// Semantic styles for CLI text
pub trait Stylize: Display + Sized {
    /// Highlighted names (branches, remotes)
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
    }

    /// Completed actions
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
    }

    /// Error banner on stderr
    fn error_banner(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.white().on_red().to_string())
            .to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Colored check mark for finished spinners
pub fn check() -> String {
    CHECK.if_supports_color(Stream::Stderr, |t| t.cyan()).to_string()
}

/// Spinner style shared by every phase
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}
