//! Shared CLI output helpers for operator-facing text.
//!
//! Status lines go to stderr so stdout carries only the rendered table.

use owo_colors::{OwoColorize, Stream};

/// Print a warning line.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()),
        message
    );
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}
