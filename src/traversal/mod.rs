//! Operations derived from [`each`](crate::iteration::each).
//!
//! - [`map`], [`pluck`], [`invoke`]: one result per item
//! - [`reduce`]: a left fold with an explicit optional seed
//! - [`any`], [`every`], [`find`], [`include`]: short-circuiting queries
//! - [`filter`], [`reject`]: selection by predicate
//!
//! Every operation answers absent input (`Null`, `Undefined`) with its empty
//! result and never calls the iteratee for it. Operations taking an optional
//! iteratee come in pairs: the plain form uses the item's own truthiness and
//! the `_by` form takes the iteratee.
//!
//! # Examples
//!
//! ```rust
//! use gather::array;
//! use gather::traversal::{filter, map, reduce};
//! use gather::value::Value;
//!
//! let numbers = array![1, 2, 3, 4];
//! let squares = Value::Array(map(&numbers, |number, _, _| number.to_number().powi(2)));
//! let even = Value::from(filter(&squares, |square, _, _| square.to_number() % 2.0 == 0.0));
//! let total = reduce(&even, |memo, item, _, _| Value::from(memo.to_number() + item.to_number()), None);
//! assert_eq!(total, Ok(Value::from(20)));
//! ```

mod filter;
mod map;
mod query;
mod reduce;

pub use filter::{filter, reject};
pub use map::{Method, invoke, map, pluck};
pub use query::{any, any_by, every, every_by, find, include};
pub use reduce::reduce;

/// Alias of [`any`].
pub use query::any as some;
/// Alias of [`any_by`].
pub use query::any_by as some_by;
/// Alias of [`every`].
pub use query::every as all;
/// Alias of [`every_by`].
pub use query::every_by as all_by;
/// Alias of [`find`].
pub use query::find as detect;
/// Alias of [`include`].
pub use query::include as contains;
/// Alias of [`filter`].
pub use filter::filter as select;
/// Alias of [`reduce`].
pub use reduce::reduce as foldl;
/// Alias of [`reduce`].
pub use reduce::reduce as inject;
