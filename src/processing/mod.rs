//! Domain to subnet matching.
//!
//! - [`matcher`] - Resolves domains and groups them by subnet

mod matcher;

pub use matcher::{match_domains, MatchStats};
