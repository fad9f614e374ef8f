//! Partition completion.
//!
//! Fills in the missing half at every level of subdivision touched by an input
//! block, so the set can be rendered and divided/joined as a full partition.

use crate::models::{AddressBlock, Subnet};
use crate::processing::sort::sort_by_start_address;
use std::collections::HashSet;

/// Add the missing sibling of every block and sort the result.
///
/// A sibling is skipped when it is already present, when it strictly contains
/// an input block (it was expanded elsewhere), or when the block itself
/// strictly contains an input block. All checks run against the input
/// snapshot, never against blocks added during this call, which keeps the
/// result independent of input order and makes the operation idempotent.
///
/// # Arguments
/// * `subnets` - A partition: members are disjoint or nested, never partially overlapping
///
/// # Returns
/// The input records (untouched) plus synthesised siblings, ordered by start address.
pub fn complete_partition(subnets: &[Subnet]) -> Vec<Subnet> {
    let snapshot: Vec<AddressBlock> = subnets.iter().map(|s| s.cidr).collect();
    let present: HashSet<AddressBlock> = snapshot.iter().copied().collect();
    let mut added: HashSet<AddressBlock> = HashSet::new();

    let mut completed: Vec<Subnet> = subnets.to_vec();

    for block in &snapshot {
        let Some(sibling) = missing_sibling(block, &snapshot, &present) else {
            continue;
        };
        if !added.insert(sibling) {
            continue;
        }
        log::debug!("complete_partition: add {sibling} as sibling of {block}");
        completed.push(Subnet::synthetic(sibling));
    }

    log::info!(
        "complete_partition: {} input + {} added = {}",
        subnets.len(),
        added.len(),
        completed.len()
    );

    sort_by_start_address(&mut completed);
    completed
}

/// The sibling of `block` that has to be added, if any.
fn missing_sibling(
    block: &AddressBlock,
    snapshot: &[AddressBlock],
    present: &HashSet<AddressBlock>,
) -> Option<AddressBlock> {
    // a /0 is the whole address space and has no sibling
    let sibling = block.sibling()?;

    if present.contains(&sibling) {
        return None;
    }
    if snapshot.iter().any(|other| sibling.contains(other)) {
        return None;
    }
    if snapshot.iter().any(|other| block.contains(other)) {
        return None;
    }
    Some(sibling)
}
