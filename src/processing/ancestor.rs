//! Common ancestor lookup, used to pick a default display root.

use crate::error::{Result, SubnetError};
use crate::models::AddressBlock;

/// Smallest block containing every input block.
///
/// Widens the first block's prefix one bit at a time until every block fits.
/// A /0 covers everything, so only an empty input can fail.
pub fn common_ancestor(blocks: &[AddressBlock]) -> Result<AddressBlock> {
    let Some(first) = blocks.first() else {
        log::error!("common_ancestor: called with no blocks");
        return Err(SubnetError::NoCommonAncestor);
    };

    for mask in (0..=first.mask()).rev() {
        let candidate = AddressBlock::new(first.addr(), mask)?;
        let covers_all = blocks
            .iter()
            .all(|b| candidate.start() <= b.start() && b.end() <= candidate.end());
        if covers_all {
            log::debug!("common_ancestor of {} blocks: {candidate}", blocks.len());
            return Ok(candidate);
        }
    }

    log::error!("common_ancestor: no /0 candidate covered {blocks:?}");
    Err(SubnetError::NoCommonAncestor)
}
