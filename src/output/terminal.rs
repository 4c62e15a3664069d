//! Terminal output utilities.
//!
//! Operator messages go to stdout and are mirrored to the log.

use colored::Colorize;
use std::fmt::Display;

/// Format a warning line with the `[!]` marker used for skipped items.
pub fn format_warning<T: Display>(message: T) -> String {
    format!("  {} {message}", "[!]".red())
}

/// Print the start-of-resolution banner.
pub fn print_banner() {
    log::info!("Resolving domains and matching against subnets...");
    println!("Resolving domains and matching against subnets...");
}

/// Print a non-fatal warning.
pub fn print_warning<T: Display>(message: T) {
    log::warn!("{message}");
    println!("{}", format_warning(message));
}

/// Print the final success line naming the report file.
pub fn print_success<T: Display>(output: T) {
    log::info!("Results have been written to '{output}'");
    println!(
        "\n{} Results have been written to '{output}'.",
        "Success!".green()
    );
}

/// Print a fatal error line.
pub fn print_error<T: Display>(message: T) {
    log::error!("{message}");
    println!("{} {message}", "Error:".on_red());
}
