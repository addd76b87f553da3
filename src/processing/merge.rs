//! Pairwise block merging and the sorted merge sweep.

use crate::models::{Family, NetworkBlock};

/// Receives every successful merge made by [`merge_sorted`].
pub trait MergeObserver {
    fn merged(&mut self, left: &NetworkBlock, right: &NetworkBlock, result: &NetworkBlock);
}

/// Observer that ignores merge events.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {
    fn merged(&mut self, _left: &NetworkBlock, _right: &NetworkBlock, _result: &NetworkBlock) {}
}

/// Observer that records merge events, mainly for tests and reports.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<(NetworkBlock, NetworkBlock, NetworkBlock)>,
}

impl MergeObserver for RecordingObserver {
    fn merged(&mut self, left: &NetworkBlock, right: &NetworkBlock, result: &NetworkBlock) {
        self.events.push((*left, *right, *result));
    }
}

/// Merge two blocks into one equivalent block, if possible.
///
/// Symmetric: `merge(a, b) == merge(b, a)`.
/// - identical blocks collapse to one copy
/// - adjacent halves of the same parent combine into the parent
/// - a block contained in the other collapses into the container
///
/// Partially overlapping blocks of different size are left alone.
pub fn merge(a: &NetworkBlock, b: &NetworkBlock) -> Option<NetworkBlock> {
    if a.family() != b.family() {
        return None;
    }

    if a.prefix() == b.prefix() {
        if a.address() == b.address() {
            let address = a.address().merged_with(b.address());
            return NetworkBlock::new(address, a.prefix()).ok();
        }

        let (lower, upper) = if a.last_address().checked_add(1) == Some(b.first_address()) {
            (a, b)
        } else if b.last_address().checked_add(1) == Some(a.first_address()) {
            (b, a)
        } else {
            return None;
        };

        if !lower.is_aligned_to_parent() {
            return None;
        }
        let address = lower.address().merged_with(upper.address());
        return NetworkBlock::new(address, lower.prefix() - 1).ok();
    }

    let (container, inner) = if a.prefix() < b.prefix() {
        (a, b)
    } else {
        (b, a)
    };
    if container.contains(inner) {
        Some(*container)
    } else {
        None
    }
}

/// Collapse blocks of one family, sorted ascending by first address, into
/// the minimal equivalent sequence.
///
/// A merged block can only combine anew with its predecessor, so after each
/// merge the sweep steps back one position instead of rescanning.
pub fn merge_sorted(
    blocks: Vec<NetworkBlock>,
    observer: &mut dyn MergeObserver,
) -> Vec<NetworkBlock> {
    let mut merged: Vec<NetworkBlock> = Vec::with_capacity(blocks.len());

    for block in blocks {
        merged.push(block);
        while merged.len() > 1 {
            let right = merged[merged.len() - 1];
            let left = merged[merged.len() - 2];
            match merge(&left, &right) {
                Some(result) => {
                    log::trace!("merged {left} and {right} into {result}");
                    observer.merged(&left, &right, &result);
                    merged.pop();
                    if let Some(last) = merged.last_mut() {
                        *last = result;
                    }
                }
                None => break,
            }
        }
    }

    merged
}

/// Sort blocks by first address (then prefix) and merge them.
pub fn sort_and_merge(
    mut blocks: Vec<NetworkBlock>,
    observer: &mut dyn MergeObserver,
) -> Vec<NetworkBlock> {
    blocks.sort_by_key(|b| (b.family(), b.first_address(), b.prefix()));
    let family = blocks.first().map(|b| b.family()).unwrap_or(Family::Ipv4);
    let before = blocks.len();
    let merged = merge_sorted(blocks, observer);
    log::debug!("{family}: merged {before} blocks into {}", merged.len());
    merged
}
