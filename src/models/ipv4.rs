//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an IPv4 network range,
//! along with the mask arithmetic used for strict parsing and membership tests.

use crate::error::{AddrParseError, CidrError};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_domain_map::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Prefix length of a contiguous dotted netmask, e.g. 255.255.255.0 => 24.
pub fn netmask_len(netmask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(netmask);
    let len = bits.leading_ones() as u8;
    (get_cidr_mask(len).ok()? == bits).then_some(len)
}

/// Parse the part after '/' as a prefix length or a dotted netmask.
fn parse_prefix(text: &str) -> Result<u8, CidrError> {
    let invalid = || CidrError::InvalidPrefix(text.to_string());
    if text.contains('.') {
        let netmask: Ipv4Addr = text.parse().map_err(|_| invalid())?;
        return netmask_len(netmask).ok_or_else(invalid);
    }
    // u8::from_str accepts a leading '+', a prefix length never has one
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let len: u8 = text.parse().map_err(|_| invalid())?;
    if len > MAX_LENGTH {
        return Err(CidrError::PrefixTooLong(len));
    }
    Ok(len)
}

/// Whether `text` is a well-formed IPv6 network with no host bits set.
///
/// A bare address counts as a /128.
pub fn is_ipv6_network(text: &str) -> bool {
    let text = text.trim();
    let (addr_part, len_part) = text.split_once('/').unwrap_or((text, "128"));
    let Ok(addr) = addr_part.parse::<Ipv6Addr>() else {
        return false;
    };
    if len_part.is_empty() || !len_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(len) = len_part.parse::<u8>() else {
        return false;
    };
    if len > 128 {
        return false;
    }
    let host_bits = u128::MAX.checked_shr(u32::from(len)).unwrap_or(0);
    u128::from(addr) & host_bits == 0
}

/// Parse a resolved address string into an [`Ipv4Addr`].
///
/// Surrounding whitespace is ignored; anything that is not a dotted quad is rejected.
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, AddrParseError> {
    text.trim()
        .parse()
        .map_err(|_| AddrParseError(text.to_string()))
}

/// IPv4 network range in CIDR notation.
///
/// Values built through [`Ipv4::new`] are always strict: no bits outside the
/// prefix are set, so `addr` is the network address.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Also accepts a bare address as a /32 and a dotted netmask in place of
    /// the prefix length ("10.0.0.0/255.255.255.0"). Parsing is strict:
    /// "10.0.0.5/24" is rejected instead of being normalized to "10.0.0.0/24".
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, mask_part) = match addr_cidr.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (addr_cidr, None),
        };
        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr_part.to_string()))?;
        let mask = match mask_part {
            Some(text) => parse_prefix(text)?,
            None => MAX_LENGTH,
        };
        let network = cut_addr(addr, mask)?;
        if network != addr {
            return Err(CidrError::HostBitsSet(format!("{network}/{mask}")));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Test whether `ip` falls inside this network.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        match get_cidr_mask(self.mask) {
            Ok(mask) => u32::from(ip) & mask == u32::from(self.addr) & mask,
            Err(_) => false,
        }
    }
}

impl FromStr for Ipv4 {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(get_cidr_mask(33), Err(CidrError::PrefixTooLong(33)));
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_netmask_len() {
        assert_eq!(netmask_len(Ipv4Addr::new(255, 255, 255, 0)), Some(24));
        assert_eq!(netmask_len(Ipv4Addr::new(255, 255, 255, 255)), Some(32));
        assert_eq!(netmask_len(Ipv4Addr::new(0, 0, 0, 0)), Some(0));
        assert_eq!(netmask_len(Ipv4Addr::new(255, 0, 255, 0)), None);
        assert_eq!(netmask_len(Ipv4Addr::new(0, 0, 0, 255)), None);
    }

    #[test]
    fn test_is_ipv6_network() {
        assert!(is_ipv6_network("2a02:6b8::/29"));
        assert!(is_ipv6_network(" 2001:db8::/32 "));
        assert!(is_ipv6_network("::/0"));
        assert!(is_ipv6_network("2001:db8::1"));
        assert!(!is_ipv6_network("2001:db8::1/64"));
        assert!(!is_ipv6_network("2001:db8::/129"));
        assert!(!is_ipv6_network("2001:db8::/"));
        assert!(!is_ipv6_network("10.0.0.0/24"));
        assert!(!is_ipv6_network("not-a-subnet"));
    }

    #[test]
    fn test_new_strict() {
        let net = Ipv4::new("10.0.0.0/24").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(net.mask, 24);
        assert_eq!(net.to_string(), "10.0.0.0/24");

        assert_eq!(
            Ipv4::new("192.168.1.1/24"),
            Err(CidrError::HostBitsSet("192.168.1.0/24".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.5/24"),
            Err(CidrError::HostBitsSet("10.0.0.0/24".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.5/255.255.255.0"),
            Err(CidrError::HostBitsSet("10.0.0.0/24".to_string()))
        );
    }

    #[test]
    fn test_new_bare_host_and_netmask() {
        let host = Ipv4::new("1.2.3.4").unwrap();
        assert_eq!(host.to_string(), "1.2.3.4/32");
        assert!(host.contains(Ipv4Addr::new(1, 2, 3, 4)));

        let net = Ipv4::new("10.0.0.0/255.255.255.0").unwrap();
        assert_eq!(net, Ipv4::new("10.0.0.0/24").unwrap());
        assert_eq!(net.to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_new_rejects_malformed() {
        assert_eq!(
            Ipv4::new("10.0.0.0/255.0.255.0"),
            Err(CidrError::InvalidPrefix("255.0.255.0".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.0/255.255.0"),
            Err(CidrError::InvalidPrefix("255.255.0".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0/24"),
            Err(CidrError::InvalidAddress("10.0.0".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.0/"),
            Err(CidrError::InvalidPrefix("".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.0/+8"),
            Err(CidrError::InvalidPrefix("+8".to_string()))
        );
        assert_eq!(
            Ipv4::new("10.0.0.0/24/1"),
            Err(CidrError::InvalidPrefix("24/1".to_string()))
        );
        assert_eq!(Ipv4::new("10.0.0.0/33"), Err(CidrError::PrefixTooLong(33)));
        assert!(Ipv4::new("10.0.0.0/999").is_err());
        assert!(Ipv4::new("2001:db8::/32").is_err());
    }

    #[test]
    fn test_new_trims_whitespace() {
        let net: Ipv4 = "  172.16.0.0/12 \r".parse().unwrap();
        assert_eq!(net.to_string(), "172.16.0.0/12");
    }

    #[test]
    fn test_contains() {
        let net = Ipv4::new("10.0.0.0/24").unwrap();
        assert!(net.contains(Ipv4Addr::new(10, 0, 0, 0)));
        assert!(net.contains(Ipv4Addr::new(10, 0, 0, 5)));
        assert!(net.contains(Ipv4Addr::new(10, 0, 0, 255)));
        assert!(!net.contains(Ipv4Addr::new(10, 0, 1, 0)));
        assert!(!net.contains(Ipv4Addr::new(192, 168, 1, 1)));

        let all = Ipv4::new("0.0.0.0/0").unwrap();
        assert!(all.contains(Ipv4Addr::new(8, 8, 8, 8)));

        let host = Ipv4::new("8.8.8.8/32").unwrap();
        assert!(host.contains(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(!host.contains(Ipv4Addr::new(8, 8, 8, 9)));
    }

    #[test]
    fn test_parse_addr() {
        assert_eq!(parse_addr("10.0.0.5").unwrap(), Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(parse_addr(" 1.2.3.4 ").unwrap(), Ipv4Addr::new(1, 2, 3, 4));
        assert_eq!(
            parse_addr("10.0.0.256"),
            Err(AddrParseError("10.0.0.256".to_string()))
        );
        assert!(parse_addr("::1").is_err());
        assert!(parse_addr("").is_err());
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.0/24").unwrap();
        let ip2 = Ipv4::new("10.0.1.0/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.0/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
    }
}
