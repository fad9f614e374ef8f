//! Ordering of partition elements by start address.

use crate::models::Subnet;

/// Sort in place by ascending start address.
///
/// `sort_by_key` is stable, so a container and its first child (same start)
/// keep their relative input order.
pub fn sort_by_start_address(subnets: &mut [Subnet]) {
    subnets.sort_by_key(|s| s.cidr.start());
}

/// By value variant of [`sort_by_start_address`].
pub fn sorted_by_start_address(mut subnets: Vec<Subnet>) -> Vec<Subnet> {
    sort_by_start_address(&mut subnets);
    subnets
}
