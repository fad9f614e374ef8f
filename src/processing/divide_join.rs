//! Divide and join of partition elements.
//!
//! The operators work on single subnets; `divide_in`/`join_in` apply them to a
//! whole collection and leave it untouched when the operation fails.

use crate::error::{Result, SubnetError};
use crate::models::{block_size, AddressBlock, Subnet, SubnetMeta, MAX_LENGTH};
use crate::processing::sort::sort_by_start_address;
use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Split a subnet into its two halves. Metadata is cleared on both.
pub fn divide(subnet: &Subnet) -> Result<(Subnet, Subnet)> {
    let cidr = subnet.cidr;
    if cidr.mask() >= MAX_LENGTH {
        return Err(SubnetError::PrefixExhausted(cidr));
    }
    let mask = cidr.mask() + 1;
    let lower = AddressBlock::new(cidr.addr(), mask)?;
    // lower.end() < cidr.end() here, so +1 stays inside the parent
    let upper = AddressBlock::new(Ipv4Addr::from(lower.end() + 1), mask)?;

    log::debug!("divide: {cidr} -> {lower} + {upper}");
    Ok((
        Subnet::new(lower, SubnetMeta::default()),
        Subnet::new(upper, SubnetMeta::default()),
    ))
}

/// Merge the low half `a` and high half `b` of one parent.
///
/// Blocks that are merely adjacent but do not share a parent are rejected.
/// Metadata is cleared, callers reconcile it beforehand if they want to keep it.
pub fn join(a: &Subnet, b: &Subnet) -> Result<Subnet> {
    let (lo, hi) = (a.cidr, b.cidr);
    if !is_joinable_pair(&lo, &hi) {
        return Err(SubnetError::NotJoinable { a: lo, b: hi });
    }
    let parent = AddressBlock::new(lo.addr(), lo.mask() - 1)?;

    log::debug!("join: {lo} + {hi} -> {parent}");
    Ok(Subnet::new(parent, SubnetMeta::default()))
}

/// Same prefix, `hi` starts right after `lo`, and `lo` is aligned to the parent.
fn is_joinable_pair(lo: &AddressBlock, hi: &AddressBlock) -> bool {
    if lo.mask() != hi.mask() || lo.mask() == 0 {
        return false;
    }
    let adjacent = lo.end() as u64 + 1 == hi.start() as u64;
    let aligned = block_size(lo.mask() - 1).map_or(false, |size| lo.start() as u64 % size == 0);
    adjacent && aligned
}

fn position(subnets: &[Subnet], cidr: &AddressBlock) -> Result<usize> {
    subnets
        .iter()
        .position(|s| s.cidr == *cidr)
        .ok_or_else(|| SubnetError::NotFound(cidr.to_string()))
}

/// Replace the named subnet by its two halves and re-sort.
pub fn divide_in(subnets: &mut Vec<Subnet>, cidr: &AddressBlock) -> Result<()> {
    let idx = position(subnets, cidr)?;
    let (lower, upper) = divide(&subnets[idx])?;
    subnets.remove(idx);
    subnets.push(lower);
    subnets.push(upper);
    sort_by_start_address(subnets);
    Ok(())
}

/// Replace the named pair by their parent and re-sort.
pub fn join_in(subnets: &mut Vec<Subnet>, a: &AddressBlock, b: &AddressBlock) -> Result<()> {
    let idx_a = position(subnets, a)?;
    let idx_b = position(subnets, b)?;
    let parent = join(&subnets[idx_a], &subnets[idx_b])?;
    // remove the higher index first so the lower one stays valid
    subnets.remove(idx_a.max(idx_b));
    subnets.remove(idx_a.min(idx_b));
    subnets.push(parent);
    sort_by_start_address(subnets);
    Ok(())
}

/// Refresh `is_joinable`: true iff the subnet's sibling is also a member.
pub fn mark_joinable(subnets: &mut [Subnet]) {
    let present: HashSet<AddressBlock> = subnets.iter().map(|s| s.cidr).collect();
    for subnet in subnets.iter_mut() {
        subnet.is_joinable = subnet
            .cidr
            .sibling()
            .map_or(false, |sibling| present.contains(&sibling));
    }
}
