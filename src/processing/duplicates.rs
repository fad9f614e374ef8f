//! Partition invariant checks.
//!
//! Aligned CIDR blocks either nest or are disjoint, so the only way a set of
//! parsed blocks breaks the partition invariant is by listing a CIDR twice.

use crate::error::{Result, SubnetError};
use crate::models::{AddressBlock, Subnet};
use itertools::Itertools;

/// A CIDR listed more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateCidr {
    pub cidr: AddressBlock,
    pub count: usize,
}

/// Find all repeated CIDRs, sorted by CIDR for consistent output.
pub fn find_duplicate_cidrs(subnets: &[Subnet]) -> Vec<DuplicateCidr> {
    let mut duplicates: Vec<DuplicateCidr> = subnets
        .iter()
        .map(|s| s.cidr)
        .counts()
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(cidr, count)| DuplicateCidr { cidr, count })
        .collect();

    duplicates.sort_by_key(|d| d.cidr);
    duplicates
}

/// Log repeated CIDRs as warnings.
pub fn log_duplicates(duplicates: &[DuplicateCidr]) {
    if duplicates.is_empty() {
        log::info!("No duplicate subnets found.");
        return;
    }

    log::warn!("Found {} duplicated subnet(s):", duplicates.len());
    for duplicate in duplicates {
        log::warn!("  {} listed {} times", duplicate.cidr, duplicate.count);
    }
}

/// Fail on the lowest CIDR listed more than once.
///
/// Run [`crate::processing::de_duplicate_subnets`] first to accept such input.
pub fn check_partition(subnets: &[Subnet]) -> Result<()> {
    match find_duplicate_cidrs(subnets).first() {
        Some(d) => Err(SubnetError::DuplicateCidr(d.cidr)),
        None => Ok(()),
    }
}
