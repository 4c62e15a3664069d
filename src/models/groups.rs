//! Subnet to domain grouping built by the matcher.

use super::Ipv4;
use std::collections::{BTreeSet, HashMap};

/// Order in which report blocks are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportOrder {
    /// Subnets in the order they first received a domain.
    #[default]
    FirstMatch,
    /// Subnets in the order they appear in the subnet file.
    SubnetFile,
}

/// One slot per distinct subnet, in subnet-file order.
#[derive(Debug, Clone)]
struct Slot {
    subnet: Ipv4,
    domains: BTreeSet<String>,
}

/// Mapping from subnet to the set of domains that resolved into it.
///
/// Every loaded subnet gets a slot up front, so the subnet-file order is never
/// lost. The order in which slots first became non-empty is tracked alongside.
#[derive(Debug, Clone, Default)]
pub struct SubnetGroups {
    slots: Vec<Slot>,
    index: HashMap<Ipv4, usize>,
    first_match: Vec<usize>,
}

impl SubnetGroups {
    /// Build empty groups for `subnets`. Repeated subnets share one slot.
    pub fn new(subnets: &[Ipv4]) -> SubnetGroups {
        let mut groups = SubnetGroups::default();
        for subnet in subnets {
            if groups.index.contains_key(subnet) {
                log::debug!("Subnet {subnet} listed more than once, sharing one group");
                continue;
            }
            groups.index.insert(*subnet, groups.slots.len());
            groups.slots.push(Slot {
                subnet: *subnet,
                domains: BTreeSet::new(),
            });
        }
        groups
    }

    /// Distinct subnets in subnet-file order.
    pub fn subnets(&self) -> impl Iterator<Item = &Ipv4> {
        self.slots.iter().map(|s| &s.subnet)
    }

    /// Record `domain` under `subnet`.
    ///
    /// Returns `true` if the domain was not already listed there. `subnet`
    /// must be one of the subnets the groups were built from.
    pub fn add(&mut self, subnet: &Ipv4, domain: &str) -> bool {
        debug_assert!(
            self.index.contains_key(subnet),
            "unknown subnet {subnet}"
        );
        let Some(&i) = self.index.get(subnet) else {
            return false;
        };
        let slot = &mut self.slots[i];
        if slot.domains.is_empty() {
            self.first_match.push(i);
        }
        slot.domains.insert(domain.to_string())
    }

    /// Domains recorded under `subnet`, sorted alphabetically.
    pub fn domains(&self, subnet: &Ipv4) -> Option<&BTreeSet<String>> {
        self.index.get(subnet).map(|&i| &self.slots[i].domains)
    }

    /// Number of subnets with at least one domain.
    pub fn matched_count(&self) -> usize {
        self.first_match.len()
    }

    /// Non-empty groups in the requested order, domains sorted within each.
    pub fn groups(&self, order: ReportOrder) -> Vec<(&Ipv4, &BTreeSet<String>)> {
        let slot_ids: Vec<usize> = match order {
            ReportOrder::FirstMatch => self.first_match.clone(),
            ReportOrder::SubnetFile => (0..self.slots.len())
                .filter(|&i| !self.slots[i].domains.is_empty())
                .collect(),
        };
        slot_ids
            .into_iter()
            .map(|i| (&self.slots[i].subnet, &self.slots[i].domains))
            .collect()
    }
}
