//! Subnet partition completion.
//!
//! Takes a sparse set of IPv4 CIDR blocks and adds the missing sibling blocks
//! so every level of subdivision touched by an input block is fully covered.
//! Also provides divide/join of partition elements, a containment tree and a
//! common ancestor for display.
//!
//! ```
//! use subnet_partition::{complete_records, models::SubnetRecord};
//!
//! let records = vec![SubnetRecord::new("192.168.0.0/17")];
//! let completed = complete_records(&records).unwrap();
//! let cidrs: Vec<String> = completed.iter().map(|s| s.cidr.to_string()).collect();
//! assert_eq!(cidrs, vec!["192.168.0.0/17", "192.168.128.0/17"]);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};

use models::{AddressBlock, Subnet, SubnetRecord};

/// Validate a batch of records, failing on the first bad CIDR.
pub fn build_subnets(records: &[SubnetRecord]) -> Result<Vec<Subnet>> {
    records
        .iter()
        .map(|r| {
            Subnet::from_record(r).map_err(|e| {
                log::warn!("Rejecting batch, bad record {:?}: {}", r.cidr, e);
                e
            })
        })
        .collect()
}

/// Validate a batch of records, dropping the bad ones.
pub fn build_subnets_lenient(records: &[SubnetRecord]) -> Vec<Subnet> {
    records
        .iter()
        .filter_map(|r| match Subnet::from_record(r) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("Skipping record {:?}: {}", r.cidr, e);
                None
            }
        })
        .collect()
}

/// Validate, check the partition invariant and complete a batch of records.
pub fn complete_records(records: &[SubnetRecord]) -> Result<Vec<Subnet>> {
    let subnets = build_subnets(records)?;
    complete_subnets(subnets)
}

/// Check the partition invariant, complete, and refresh the joinable flags.
///
/// Fails with [`SubnetError::DuplicateCidr`] when a CIDR is listed twice.
pub fn complete_subnets(subnets: Vec<Subnet>) -> Result<Vec<Subnet>> {
    processing::check_partition(&subnets)?;
    let mut completed = processing::complete_partition(&subnets);
    processing::mark_joinable(&mut completed);
    Ok(completed)
}

/// Default display root: the common ancestor of all subnets.
pub fn display_root(subnets: &[Subnet]) -> Result<AddressBlock> {
    let blocks: Vec<AddressBlock> = subnets.iter().map(|s| s.cidr).collect();
    processing::common_ancestor(&blocks)
}
