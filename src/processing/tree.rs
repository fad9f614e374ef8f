//! Containment tree for hierarchical display.

use crate::models::Subnet;

/// A subnet with the members it directly contains.
#[derive(Debug, Clone, PartialEq)]
pub struct SubnetNode<'a> {
    pub subnet: &'a Subnet,
    pub children: Vec<SubnetNode<'a>>,
}

impl SubnetNode<'_> {
    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SubnetNode::node_count).sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Nest subnets by containment into a forest.
///
/// Each subnet hangs under its closest container; subnets with no container
/// are roots. Roots and children keep input order. Pairwise O(n²), fine for
/// the few hundred blocks an interactive view holds.
pub fn build_subnet_tree(subnets: &[Subnet]) -> Vec<SubnetNode<'_>> {
    let parents: Vec<Option<usize>> = (0..subnets.len())
        .map(|i| closest_container(subnets, i))
        .collect();

    let roots: Vec<SubnetNode<'_>> = (0..subnets.len())
        .filter(|&i| parents[i].is_none())
        .map(|i| build_node(subnets, &parents, i))
        .collect();

    log::debug!(
        "build_subnet_tree: {} subnets, {} roots",
        subnets.len(),
        roots.len()
    );
    roots
}

/// Index of the tightest member strictly containing `subnets[child]`.
///
/// Members of a partition that contain the same block are nested in each
/// other, so the one with the longest prefix has nothing in between.
fn closest_container(subnets: &[Subnet], child: usize) -> Option<usize> {
    let cidr = &subnets[child].cidr;
    subnets
        .iter()
        .enumerate()
        .filter(|(_, s)| s.cidr.contains(cidr))
        .max_by_key(|(i, s)| (s.cidr.mask(), std::cmp::Reverse(*i)))
        .map(|(i, _)| i)
}

fn build_node<'a>(subnets: &'a [Subnet], parents: &[Option<usize>], idx: usize) -> SubnetNode<'a> {
    let children = (0..subnets.len())
        .filter(|&i| parents[i] == Some(idx))
        .map(|i| build_node(subnets, parents, i))
        .collect();
    SubnetNode {
        subnet: &subnets[idx],
        children,
    }
}
