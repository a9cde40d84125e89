//! Ordering and algorithmic operations.
//!
//! - [`range`]: arithmetic progressions
//! - [`shuffle`], [`shuffle_with`]: Fisher–Yates permutation (feature `random`)
//! - [`sort_by`]: stable sort by a computed criterion
//! - [`group_by`], [`group_by_path`]: partition into keyed groups
//! - [`sorted_index`], [`sorted_index_by`]: binary search for an insertion point
//!
//! Every operation returns a freshly allocated container and leaves its
//! input untouched.

mod group;
mod range;
mod search;
#[cfg(feature = "random")]
mod shuffle;
mod sort;

pub use group::{PropertyPath, group_by, group_by_path};
pub use range::range;
pub use search::{sorted_index, sorted_index_by};
#[cfg(feature = "random")]
pub use shuffle::{shuffle, shuffle_with};
pub use sort::sort_by;
