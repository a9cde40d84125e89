//! # gather
//!
//! A functional collection toolkit: one iteration primitive over
//! heterogeneous list-like values and a family of query, transform,
//! aggregate and ordering operations built on it.
//!
//! ## Overview
//!
//! Operations work on the dynamic [`Value`](value::Value) type, which models
//! sequences with holes, argument lists, mappings with insertion order,
//! strings and shared functions. Every call classifies its input once into
//! a [`Collection`](iteration::Collection) and traverses it:
//!
//! - **Iteration**: `each` with explicit early exit through [`Flow`](iteration::Flow)
//! - **Traversal**: map, reduce, any, every, find, filter, reject, include, invoke, pluck
//! - **Aggregate**: max, min, size, `to_array`, values
//! - **Ordering**: range, shuffle, `sort_by`, `group_by`, `sorted_index`
//! - **Predicates**: `is_array`, `is_function`, `is_string`, `is_arguments`, `is_empty`, identity
//!
//! ## Feature Flags
//!
//! - `traversal`: Derived traversal operations
//! - `aggregate`: Aggregate operations (requires `traversal`)
//! - `ordering`: Ordering operations (requires `traversal`)
//! - `random`: `shuffle` through `rand` (requires `ordering`)
//! - `serde`: `Serialize`/`Deserialize` for values
//! - `tracing`: Emits `tracing` events for classification and surfaced errors
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use gather::prelude::*;
//! use gather::{array, object};
//!
//! let stooges = array![
//!     object! { "name" => "moe", "age" => 40 },
//!     object! { "name" => "larry", "age" => 50 },
//!     object! { "name" => "curly", "age" => 60 },
//! ];
//! let names = pluck(&stooges, "name");
//! assert_eq!(Value::Array(names), array!["moe", "larry", "curly"]);
//!
//! let youngest = min_by(&stooges, |stooge, _, _| stooge.property("age").unwrap_or_default());
//! assert_eq!(youngest.property("name"), Some(Value::from("moe")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
///
/// Re-exports the value model, the iteration primitive, predicates and
/// every enabled operation.
///
/// # Usage
///
/// ```rust
/// use gather::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::iteration::*;
    pub use crate::predicate::*;
    pub use crate::value::*;

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;

    #[cfg(feature = "aggregate")]
    pub use crate::aggregate::*;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::*;
}

mod instrument;
mod stable_sort;

pub mod error;
pub mod iteration;
pub mod predicate;
pub mod value;

#[cfg(feature = "traversal")]
pub mod traversal;

#[cfg(feature = "aggregate")]
pub mod aggregate;

#[cfg(feature = "ordering")]
pub mod ordering;
