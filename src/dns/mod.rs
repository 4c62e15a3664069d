//! Host name resolution.
//!
//! - [`SystemResolver`] - blocking lookups through the OS resolver
//! - [`StaticResolver`] - fixed in-memory answers

mod fixed;
mod system;

pub use fixed::StaticResolver;
pub use system::SystemResolver;

use crate::error::ResolveError;

/// Resolves a host name to its IPv4 addresses.
///
/// Addresses are returned as text, the caller parses them.
pub trait Resolver {
    fn resolve(&self, domain: &str) -> Result<Vec<String>, ResolveError>;
}
