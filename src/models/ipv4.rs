//! IPv4 address block arithmetic.
//!
//! Provides [`AddressBlock`] for representing a CIDR block (network address plus
//! prefix length), along with utility functions for mask calculations.
//! Width sensitive arithmetic is done in `u64` so a /0 never overflows.

use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 block (32 bits).
pub const MAX_LENGTH: u8 = 32;

fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidFormat(format!(
            "Network length /{len} is too long"
        )))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_partition::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Dotted quad netmask for a prefix length, e.g. `/20` -> `255.255.240.0`.
pub fn netmask(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> Result<u64> {
    check_len(len)?;
    Ok(1u64 << (MAX_LENGTH - len))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast (last) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 CIDR block.
///
/// The address is always stored as the network (start) address, so two blocks
/// compare equal iff they cover exactly the same range.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressBlock {
    addr: Ipv4Addr,
    mask: u8,
}

impl AddressBlock {
    /// Create a block from any address inside it and a prefix length.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<AddressBlock> {
        let addr = cut_addr(addr, mask)?;
        Ok(AddressBlock { addr, mask })
    }

    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    pub fn parse(addr_cidr: &str) -> Result<AddressBlock> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| SubnetError::InvalidFormat(format!("missing prefix in '{addr_cidr}'")))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| SubnetError::InvalidFormat(format!("invalid address '{addr}'")))?;
        // u8::from_str accepts a leading '+', reject it along with anything non numeric
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::InvalidFormat(format!(
                "invalid prefix length '{mask}'"
            )));
        }
        let mask: u8 = mask
            .parse()
            .map_err(|_| SubnetError::InvalidFormat(format!("invalid prefix length '{mask}'")))?;
        AddressBlock::new(addr, mask)
    }

    /// Network (start) address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Start address as u32.
    pub fn start(&self) -> u32 {
        u32::from(self.addr)
    }

    /// Last address as u32.
    pub fn end(&self) -> u32 {
        (self.start() as u64 + self.host_count() - 1) as u32
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.end())
    }

    /// Total number of addresses, 2^32 for a /0.
    pub fn host_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// First and last usable address, `None` for /31 and /32.
    pub fn usable_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.mask >= MAX_LENGTH - 1 {
            None
        } else {
            Some((
                Ipv4Addr::from(self.start() + 1),
                Ipv4Addr::from(self.end() - 1),
            ))
        }
    }

    /// Subnet mask in dotted quad form.
    pub fn netmask(&self) -> Ipv4Addr {
        let right_len = MAX_LENGTH - self.mask;
        Ipv4Addr::from((((u32::MAX as u64) >> right_len) << right_len) as u32)
    }

    /// True iff `other` lies inside this block at a finer prefix.
    /// Equal blocks never contain each other.
    pub fn contains(&self, other: &AddressBlock) -> bool {
        self.mask < other.mask && self.start() <= other.start() && other.end() <= self.end()
    }

    /// True iff the address lies inside this block.
    pub fn contains_addr(&self, ip: Ipv4Addr) -> bool {
        let ip = u32::from(ip);
        self.start() <= ip && ip <= self.end()
    }

    /// True iff the two address ranges intersect.
    pub fn overlaps(&self, other: &AddressBlock) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    /// The other half of this block's parent, `None` for a /0.
    pub fn sibling(&self) -> Option<AddressBlock> {
        if self.mask == 0 {
            return None;
        }
        let bit = 1u32 << (MAX_LENGTH - self.mask);
        Some(AddressBlock {
            addr: Ipv4Addr::from(self.start() ^ bit),
            mask: self.mask,
        })
    }

    /// The block one prefix wider that contains this one, `None` for a /0.
    pub fn parent(&self) -> Option<AddressBlock> {
        if self.mask == 0 {
            return None;
        }
        AddressBlock::new(self.addr, self.mask - 1).ok()
    }

    /// Canonical "a.b.c.d/p" form.
    pub fn canonical_string(&self) -> String {
        self.to_string()
    }
}

impl FromStr for AddressBlock {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<AddressBlock> {
        AddressBlock::parse(s)
    }
}

impl std::fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for AddressBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<AddressBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressBlock::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(s: &str) -> AddressBlock {
        AddressBlock::parse(s).unwrap()
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
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
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_netmask() {
        assert_eq!(netmask(20).unwrap(), Ipv4Addr::new(255, 255, 240, 0));
        assert_eq!(block("10.0.0.0/0").netmask(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(
            block("10.0.0.1/32").netmask(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert_eq!(block_size(0).unwrap(), 4294967296);
        assert_eq!(block_size(32).unwrap(), 1);
    }

    #[test]
    fn test_parse() {
        let b = block(" 192.168.1.42/24 ");
        assert_eq!(b.addr(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(b.mask(), 24);
        assert!(AddressBlock::parse("192.168.1.0").is_err());
        assert!(AddressBlock::parse("192.168.1/24").is_err());
        assert!(AddressBlock::parse("192.168.1.256/24").is_err());
        assert!(AddressBlock::parse("192.168.1.0/33").is_err());
        assert!(AddressBlock::parse("192.168.1.0/-1").is_err());
        assert!(AddressBlock::parse("192.168.1.0/+8").is_err());
        assert!(AddressBlock::parse("192.168.1.0/").is_err());
        assert!(matches!(
            AddressBlock::parse("nonsense"),
            Err(SubnetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_canonical_round_trip() {
        for s in ["0.0.0.0/0", "10.0.0.0/8", "192.168.128.0/17", "255.255.255.255/32"] {
            let b = block(s);
            assert_eq!(b.canonical_string(), s);
            assert_eq!(block(&b.canonical_string()), b);
        }
        assert_eq!(block("10.1.2.3/8").to_string(), "10.0.0.0/8");
    }

    #[test]
    fn test_range_edges() {
        let all = block("0.0.0.0/0");
        assert_eq!(all.start(), 0);
        assert_eq!(all.end(), u32::MAX);
        assert_eq!(all.host_count(), 4294967296);
        assert_eq!(
            all.usable_range(),
            Some((Ipv4Addr::new(0, 0, 0, 1), Ipv4Addr::new(255, 255, 255, 254)))
        );

        let host = block("10.0.0.7/32");
        assert_eq!(host.start(), host.end());
        assert_eq!(host.host_count(), 1);
        assert_eq!(host.usable_range(), None);
        assert_eq!(block("10.0.0.6/31").usable_range(), None);

        let b = block("192.168.0.0/17");
        assert_eq!(b.hi(), Ipv4Addr::new(192, 168, 127, 255));
        assert_eq!(b.host_count(), 32768);
        assert_eq!(
            b.usable_range(),
            Some((
                Ipv4Addr::new(192, 168, 0, 1),
                Ipv4Addr::new(192, 168, 127, 254)
            ))
        );
    }

    #[test]
    fn test_contains() {
        let big = block("10.0.0.0/8");
        let small = block("10.0.10.64/26");
        assert!(big.contains(&small));
        assert!(!small.contains(&big));
        assert!(!big.contains(&big));
        assert!(!big.contains(&block("11.0.0.0/26")));
        assert!(block("0.0.0.0/0").contains(&block("255.255.255.255/32")));
        assert!(big.contains_addr(Ipv4Addr::new(10, 255, 255, 255)));
        assert!(!big.contains_addr(Ipv4Addr::new(11, 0, 0, 0)));
    }

    #[test]
    fn test_overlaps() {
        assert!(block("10.0.0.0/8").overlaps(&block("10.1.0.0/16")));
        assert!(block("10.0.0.0/8").overlaps(&block("10.0.0.0/8")));
        assert!(!block("10.0.0.0/16").overlaps(&block("10.1.0.0/16")));
    }

    #[test]
    fn test_sibling() {
        assert_eq!(
            block("192.168.0.0/17").sibling(),
            Some(block("192.168.128.0/17"))
        );
        assert_eq!(
            block("192.168.128.0/17").sibling(),
            Some(block("192.168.0.0/17"))
        );
        assert_eq!(
            block("255.255.255.255/32").sibling(),
            Some(block("255.255.255.254/32"))
        );
        assert_eq!(block("128.0.0.0/1").sibling(), Some(block("0.0.0.0/1")));
        assert_eq!(block("0.0.0.0/0").sibling(), None);
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            block("192.168.128.0/17").parent(),
            Some(block("192.168.0.0/16"))
        );
        assert_eq!(block("128.0.0.0/1").parent(), Some(block("0.0.0.0/0")));
        assert_eq!(block("0.0.0.0/0").parent(), None);
    }

    #[test]
    fn test_cmp() {
        let ip1 = block("10.0.10.0/24");
        let ip2 = block("10.0.0.0/8");
        let ip3 = block("10.0.10.64/26");
        assert!(ip2 < ip1);
        assert!(ip1 < ip3);
        assert!(block("10.0.0.0/8") < block("10.0.0.0/9"));
    }

    #[test]
    fn test_serde() {
        let b = block("10.20.0.0/14");
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "\"10.20.0.0/14\"");
        let back: AddressBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert!(serde_json::from_str::<AddressBlock>("\"10.0.0.0/40\"").is_err());
    }
}
