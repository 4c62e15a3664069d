//! Resolve domains and group them by subnet.

use crate::dns::Resolver;
use crate::models::{parse_addr, Ipv4, SubnetGroups};
use crate::output::print_warning;

/// Counters collected while matching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchStats {
    /// Domains looked up.
    pub domains: usize,
    /// Domains whose lookup failed.
    pub failed_lookups: usize,
    /// Resolved strings that were not valid IPv4 addresses.
    pub invalid_addresses: usize,
    /// (subnet, domain) pairs recorded, duplicates excluded.
    pub matches: usize,
}

/// Resolve each domain in order and record it under every subnet its
/// addresses fall in.
///
/// Lookup failures and malformed addresses are reported and skipped.
pub fn match_domains(
    domains: &[String],
    subnets: &[Ipv4],
    resolver: &dyn Resolver,
) -> (SubnetGroups, MatchStats) {
    let mut groups = SubnetGroups::new(subnets);
    let mut stats = MatchStats::default();

    for domain in domains {
        stats.domains += 1;
        let addrs = match resolver.resolve(domain) {
            Ok(addrs) => addrs,
            Err(e) => {
                log::debug!("{domain}: {e}");
                print_warning(format!("DNS Lookup failed for: {domain}"));
                stats.failed_lookups += 1;
                continue;
            }
        };

        for addr_text in &addrs {
            let addr = match parse_addr(addr_text) {
                Ok(addr) => addr,
                Err(e) => {
                    print_warning(format!("{e} for {domain}"));
                    stats.invalid_addresses += 1;
                    continue;
                }
            };
            // No early exit, ranges may overlap
            for subnet in subnets {
                if subnet.contains(addr) && groups.add(subnet, domain) {
                    log::debug!("{domain} ({addr}) in {subnet}");
                    stats.matches += 1;
                }
            }
        }
    }

    (groups, stats)
}
