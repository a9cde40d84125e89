//! Error types for collection operations.
//!
//! Only two operations can fail under well-typed input: `reduce` without a
//! seed on an empty collection, and `invoke` by a method name that resolves
//! to nothing callable. Everything else degrades to a documented empty
//! result instead of failing.

/// Represents errors that can occur in collection operations.
///
/// # Examples
///
/// ```rust
/// use gather::error::CollectionError;
///
/// let error = CollectionError::EmptyReduction;
/// assert_eq!(
///     format!("{error}"),
///     "reduce of empty collection with no initial value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// `reduce` was called on an empty collection without a seed.
    EmptyReduction,
    /// `invoke` was given a method name that the item does not provide.
    InvalidIteratee {
        /// The method name that failed to resolve.
        method: String,
        /// The kind of the item the lookup was made on (`"number"`, `"object"`, ...).
        receiver: &'static str,
    },
}

impl CollectionError {
    /// Creates an `InvalidIteratee` error for the given method name and receiver kind.
    pub fn invalid_iteratee(method: impl Into<String>, receiver: &'static str) -> Self {
        Self::InvalidIteratee {
            method: method.into(),
            receiver,
        }
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyReduction => {
                write!(formatter, "reduce of empty collection with no initial value")
            }
            Self::InvalidIteratee { method, receiver } => {
                write!(formatter, "{receiver} has no method named `{method}`")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_reduction_display() {
        assert_eq!(
            CollectionError::EmptyReduction.to_string(),
            "reduce of empty collection with no initial value"
        );
    }

    #[rstest]
    fn invalid_iteratee_display() {
        let error = CollectionError::invalid_iteratee("shout", "number");
        assert_eq!(error.to_string(), "number has no method named `shout`");
    }

    #[rstest]
    fn errors_compare_by_content() {
        assert_eq!(
            CollectionError::invalid_iteratee("sort", "object"),
            CollectionError::InvalidIteratee {
                method: "sort".to_string(),
                receiver: "object",
            }
        );
        assert_ne!(
            CollectionError::EmptyReduction,
            CollectionError::invalid_iteratee("sort", "object")
        );
    }
}
