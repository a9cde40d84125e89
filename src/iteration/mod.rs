//! The iteration primitive every other operation is built on.
//!
//! - [`Collection`]: classifies a value once per call into
//!   `Absent`, `Sequence`, `Mapping` or `Characters`
//! - [`each`]: visits the items of a collection with cooperative early exit
//! - [`Flow`]: the `{Continue, Break}` result of an `each` iteratee
//! - [`Key`]: the index or key an item was found under
//!
//! Early exit is an explicit return value rather than a sentinel, so no
//! iteratee result can be confused with a request to stop.

mod collection;
mod each;

pub use collection::Collection;
pub use each::{Flow, Key, each};

/// Alias of [`each`].
pub use each::each as for_each;
