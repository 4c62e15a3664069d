//! Domain list loader.

use super::{content_lines, read_input};
use crate::error::MapError;
use std::path::Path;

/// Load domain names from `path`, one per non-empty line, in file order.
pub fn load_domains(path: &Path) -> Result<Vec<String>, MapError> {
    let text = read_input(path)?;
    let domains: Vec<String> = content_lines(&text)
        .map(|(_, line)| line.to_string())
        .collect();
    log::info!("# Got domain count = {}", domains.len());
    Ok(domains)
}
