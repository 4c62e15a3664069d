//! Output for the run.
//!
//! This module handles everything the operator sees:
//! - [`report`] - The grouped report file
//! - [`terminal`] - Progress and warning lines on stdout

mod report;
mod terminal;

pub use report::{write_blocks, write_report};
pub use terminal::{format_warning, print_banner, print_error, print_success, print_warning};
