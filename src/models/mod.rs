//! Domain models for subnet partitioning.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`AddressBlock`] - IPv4 CIDR block arithmetic
//! - [`Subnet`] - partition element with metadata and display fields
//! - [`SubnetRecord`] - parsed input shape from the import adapters

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, netmask, AddressBlock, MAX_LENGTH,
};
pub use subnet::{Subnet, SubnetMeta, SubnetRecord};
