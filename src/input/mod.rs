//! Input file loaders.
//!
//! This module reads the two input lists:
//! - [`subnets`] - CIDR ranges, one per line
//! - [`domains`] - Host names, one per line

mod domains;
mod subnets;

pub use domains::load_domains;
pub use subnets::load_subnets;

use crate::error::MapError;
use std::io;
use std::path::Path;

/// Read a whole input file, mapping a missing file to [`MapError::InputMissing`].
fn read_input(path: &Path) -> Result<String, MapError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            log::info!("Reading input file: {}", path.display());
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(MapError::InputMissing {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(MapError::InputRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Non-empty trimmed lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}
