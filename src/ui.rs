//! Terminal output helpers

use colored::Colorize;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
