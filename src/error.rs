//! Error types for subnet partition operations.

use crate::models::AddressBlock;

/// Errors returned by the partition core and its import adapters.
#[derive(Debug, thiserror::Error)]
pub enum SubnetError {
    /// Malformed CIDR string or prefix outside 0..=32.
    #[error("Invalid CIDR format: {0}")]
    InvalidFormat(String),
    /// A /32 can not be divided any further.
    #[error("Can not divide {0}: prefix exhausted")]
    PrefixExhausted(AddressBlock),
    /// The two blocks are not the low/high halves of one parent.
    #[error("Subnets {a} and {b} are not joinable")]
    NotJoinable { a: AddressBlock, b: AddressBlock },
    /// Internal invariant violation, never caused by valid IPv4 input.
    #[error("No common ancestor found")]
    NoCommonAncestor,
    #[error("Subnet {0} not found")]
    NotFound(String),
    #[error("Subnet {0} is listed more than once")]
    DuplicateCidr(AddressBlock),
    #[error("Import failed: {0}")]
    Import(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SubnetError>;
