//! Error types for sort parameter loading.
//!
//! The crate has a single runtime error condition: a strict load
//! ([`Definition::load_strict`](crate::Definition::load_strict)) rejecting a
//! sort field that was never declared. Everything else is handled by
//! dropping the offending token (permissive parsing) or by panicking at
//! declaration time (programmer errors such as sharing a literal rename
//! across several fields).
//!
//! ## Examples
//!
//! ```rust
//! use sort_param::{Definition, Error, FieldOptions, Mode};
//!
//! let definition = Definition::new().field("email", FieldOptions::new());
//!
//! let err = definition.load_strict("first_name", Mode::Hash).unwrap_err();
//! assert_eq!(err, Error::unsupported_sort_field("first_name"));
//! assert_eq!(err.to_string(), "unsupported sort field: first_name");
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while loading a sort
/// parameter string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parsed sort field is not on the definition's whitelist.
    ///
    /// Only raised by strict loading; permissive loading silently drops
    /// undeclared fields instead.
    #[error("unsupported sort field: {field}")]
    UnsupportedSortField {
        /// The first offending field name, in parse order.
        field: String,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedSortField`] naming the offending field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sort_param::Error;
    ///
    /// let err = Error::unsupported_sort_field("age");
    /// assert!(err.to_string().contains("age"));
    /// ```
    pub fn unsupported_sort_field(field: impl Into<String>) -> Self {
        Error::UnsupportedSortField {
            field: field.into(),
        }
    }

    /// Returns the sort field name this error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Error::UnsupportedSortField { field } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
