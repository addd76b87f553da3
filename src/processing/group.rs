//! Grouping of blocks by address family and per-family merging.

use super::merge::{sort_and_merge, MergeObserver};
use crate::models::{Family, NetworkBlock};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Blocks keyed by family. Iteration order is IPv4 first, then IPv6.
pub type FamilyGroups = BTreeMap<Family, Vec<NetworkBlock>>;

/// Split blocks into one group per family, keeping input order inside each.
pub fn group_by_family(blocks: Vec<NetworkBlock>) -> FamilyGroups {
    blocks
        .into_iter()
        .into_group_map_by(|b| b.family())
        .into_iter()
        .collect()
}

/// Group, sort and merge every family into its minimal block set.
pub fn normalize(blocks: Vec<NetworkBlock>, observer: &mut dyn MergeObserver) -> FamilyGroups {
    let groups = group_by_family(blocks);
    log::info!("Merging {} address family group(s)", groups.len());

    groups
        .into_iter()
        .map(|(family, blocks)| (family, sort_and_merge(blocks, observer)))
        .collect()
}

/// Total number of blocks across all groups.
pub fn block_count(groups: &FamilyGroups) -> usize {
    groups.values().map(Vec::len).sum()
}
