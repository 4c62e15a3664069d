//! OS resolver backed lookups.

use super::Resolver;
use crate::error::ResolveError;
use std::net::IpAddr;

/// Resolves through `getaddrinfo`, keeping IPv4 answers only.
///
/// Each call blocks until the OS resolver answers or fails. No timeout is set
/// beyond the system default.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn resolve(&self, domain: &str) -> Result<Vec<String>, ResolveError> {
        log::debug!("lookup_host({domain})");
        let addrs = dns_lookup::lookup_host(domain).map_err(|e| {
            log::debug!("lookup_host({domain}) failed: {e}");
            ResolveError::Lookup(e.to_string())
        })?;
        let ipv4 = ipv4_only(addrs);
        if ipv4.is_empty() {
            return Err(ResolveError::NotFound);
        }
        log::trace!("{domain} => {ipv4:?}");
        Ok(ipv4)
    }
}

/// IPv4 addresses as text, de-duplicated in first-seen order.
///
/// `getaddrinfo` returns one entry per socket type, so repeats are common.
fn ipv4_only(addrs: impl IntoIterator<Item = IpAddr>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for addr in addrs {
        if let IpAddr::V4(v4) = addr {
            let text = v4.to_string();
            if !out.contains(&text) {
                out.push(text);
            }
        }
    }
    out
}
