//! Subnet de-duplication.

use crate::models::Subnet;
use std::collections::HashSet;

/// Drop repeated CIDRs, keeping the first occurrence and its metadata.
///
/// Unlike a sort + dedup this preserves input order.
pub fn de_duplicate_subnets(subnets: Vec<Subnet>) -> Vec<Subnet> {
    let original_count = subnets.len();
    let mut seen = HashSet::new();

    let data: Vec<Subnet> = subnets
        .into_iter()
        .filter(|s| {
            let first = seen.insert(s.cidr);
            if !first {
                log::debug!("Dropping duplicate subnet {}", s);
            }
            first
        })
        .collect();

    let filtered_count = original_count - data.len();
    if filtered_count > 0 {
        log::info!("Filtered out {} duplicate subnets", filtered_count);
    }
    data
}
