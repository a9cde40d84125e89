//! Operations that summarize a collection.
//!
//! - [`max`], [`max_by`], [`min`], [`min_by`]: extreme items
//! - [`size`]: item count
//! - [`to_array`], [`values`]: a fresh sequence of the items
//! - [`functions`]: names of own function entries
//!
//! # Examples
//!
//! ```rust
//! use gather::aggregate::{max_by, size};
//! use gather::value::Value;
//! use gather::{array, object};
//!
//! let stooges = array![
//!     object! { "name" => "moe", "age" => 40 },
//!     object! { "name" => "curly", "age" => 60 },
//! ];
//! let oldest = max_by(&stooges, |stooge, _, _| stooge.property("age").unwrap_or_default());
//! assert_eq!(oldest.property("name"), Some(Value::from("curly")));
//! assert_eq!(size(&stooges), 2);
//! ```

mod convert;
mod extremum;

pub use convert::{functions, size, to_array, values};
pub use extremum::{max, max_by, min, min_by};

/// Alias of [`functions`].
pub use convert::functions as methods;
