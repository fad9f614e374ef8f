//! Partition processing logic.
//!
//! This module contains the operations over a set of subnets:
//! - [`complete`] - Adding missing sibling blocks
//! - [`sort`] - Ordering by start address
//! - [`divide_join`] - Splitting and merging blocks
//! - [`ancestor`] - Common ancestor for the display root
//! - [`tree`] - Containment tree for display
//! - [`leaf`] - Leaf filtering
//! - [`duplicates`] - Partition invariant checks
//! - [`dedup`] - De-duplication of repeated CIDRs

mod ancestor;
mod complete;
mod dedup;
mod divide_join;
mod duplicates;
mod leaf;
mod sort;
mod tree;

// Re-export public functions
pub use ancestor::common_ancestor;
pub use complete::complete_partition;
pub use dedup::de_duplicate_subnets;
pub use divide_join::{divide, divide_in, join, join_in, mark_joinable};
pub use duplicates::{check_partition, find_duplicate_cidrs, log_duplicates, DuplicateCidr};
pub use leaf::filter_leaf_subnets;
pub use sort::{sort_by_start_address, sorted_by_start_address};
pub use tree::{build_subnet_tree, SubnetNode};
