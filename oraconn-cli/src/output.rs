//! Styled terminal output utilities.
//!
//! Rendered connection strings, listings and version information go to
//! stdout. Diagnostics and errors go to stderr so that `oraconn format`
//! output can be piped without them.

use oraconn_format::{Diagnostic, Severity};
use owo_colors::OwoColorize;

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a list item
pub fn list_item(text: &str) {
    println!("  {} {}", "•".dimmed(), text);
}

/// Print a newline
pub fn newline() {
    println!();
}

/// Print dimmed text
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print one recorded diagnostic
pub fn diagnostic(entry: &Diagnostic) {
    let text = entry.to_string();
    match entry.severity {
        Severity::Missing => eprintln!("{} {}", "⚠".yellow().bold(), text.yellow()),
        Severity::Error | Severity::Forwarded => {
            eprintln!("{} {}", "✖".red().bold(), text.red())
        }
    }
}
