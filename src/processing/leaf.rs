//! Leaf filtering.

use crate::models::AddressBlock;

/// Keep only blocks that contain no other member at a finer prefix.
pub fn filter_leaf_subnets(blocks: &[AddressBlock]) -> Vec<AddressBlock> {
    blocks
        .iter()
        .filter(|candidate| !blocks.iter().any(|other| candidate.contains(other)))
        .copied()
        .collect()
}
