//! Domain models for subnet-domain-map.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 network range with strict CIDR parsing
//! - [`SubnetGroups`] - Subnet to domain grouping built during matching

mod groups;
mod ipv4;

// Re-export public types
pub use groups::{ReportOrder, SubnetGroups};
pub use ipv4::{
    cut_addr, get_cidr_mask, is_ipv6_network, netmask_len, parse_addr, Ipv4, MAX_LENGTH,
};
