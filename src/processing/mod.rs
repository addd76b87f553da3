//! Block merging logic.
//!
//! - [`merge`] - pairwise merge and the sorted sweep
//! - [`group`] - per-family grouping and dispatch
//! - [`summary`] - before/after block counts

mod group;
mod merge;
mod summary;

// Re-export public functions
pub use group::{block_count, group_by_family, normalize, FamilyGroups};
pub use merge::{
    merge, merge_sorted, sort_and_merge, MergeObserver, NoopObserver, RecordingObserver,
};
pub use summary::MergeSummary;
