//! Single sort directive parsing and representation.
//!
//! This module provides the [`Field`] value type along with the
//! [`Direction`] and [`NullOrdering`] enums it is built from. A `Field`
//! is one resolved entry of a sort parameter string, e.g. the token
//! `"-last_name:nulls_first"` parses to a field named `last_name`,
//! descending, nulls first.
//!
//! ## Token grammar
//!
//! ```text
//! token        := [sign] column-spec
//! sign         := '+' | '-'            (absent or '+' means ascending)
//! column-spec  := name [nulls-suffix]
//! nulls-suffix := ':nulls_first' | ':nulls_last'
//! ```
//!
//! Suffix matching is case-sensitive and anchored to the end of the
//! token; anything that does not match exactly stays part of the name.
//!
//! ## Examples
//!
//! ```rust
//! use sort_param::{Direction, Field, NullOrdering};
//!
//! let field = Field::from_token("-last_name:nulls_first").unwrap();
//! assert_eq!(field.name(), "last_name");
//! assert_eq!(field.direction(), Direction::Desc);
//! assert_eq!(field.nulls(), Some(NullOrdering::First));
//!
//! // A bare sign carries no column name and is dropped.
//! assert!(Field::from_token("-").is_none());
//! ```

use crate::util::is_blank;
use serde::Serialize;
use std::fmt;

const NULLS_FIRST_SUFFIX: &str = ":nulls_first";
const NULLS_LAST_SUFFIX: &str = ":nulls_last";

/// Sort direction of a single column.
///
/// Renders as the SQL keyword `asc` or `desc`.
///
/// # Examples
///
/// ```rust
/// use sort_param::Direction;
///
/// assert_eq!(Direction::Asc.as_str(), "asc");
/// assert_eq!(Direction::Desc.as_str(), "desc");
/// assert_eq!(Direction::default(), Direction::Asc);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether rows with a null sort key come before or after non-null rows.
///
/// # Examples
///
/// ```rust
/// use sort_param::NullOrdering;
///
/// assert_eq!(NullOrdering::First.as_str(), "first");
/// assert_eq!(NullOrdering::Last.as_str(), "last");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NullOrdering {
    First,
    Last,
}

impl NullOrdering {
    /// Returns the keyword used in `NULLS FIRST` / `NULLS LAST` clauses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NullOrdering::First => "first",
            NullOrdering::Last => "last",
        }
    }
}

impl fmt::Display for NullOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved sort directive: column name, direction, null ordering.
///
/// Immutable once constructed. `nulls` is `None` when the input token did
/// not carry an explicit `:nulls_first` / `:nulls_last` suffix; a
/// definition-level default may still apply at formatting time.
///
/// # Examples
///
/// ```rust
/// use sort_param::{Direction, Field};
///
/// let field = Field::new("email", Direction::Desc, None);
/// assert_eq!(field.name(), "email");
/// assert_eq!(field.direction(), Direction::Desc);
/// assert!(field.nulls().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    direction: Direction,
    nulls: Option<NullOrdering>,
}

impl Field {
    /// Creates a field directly, bypassing token parsing.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        nulls: Option<NullOrdering>,
    ) -> Self {
        Field {
            name: name.into(),
            direction,
            nulls,
        }
    }

    /// Parses one sort token into a field.
    ///
    /// Returns `None` when the token is blank or reduces to a blank
    /// column name after stripping the sign and nulls suffix. Malformed
    /// tokens are never an error; they are simply dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sort_param::{Direction, Field, NullOrdering};
    ///
    /// let field = Field::from_token(" +created_at:nulls_last ").unwrap();
    /// assert_eq!(field.name(), "created_at");
    /// assert_eq!(field.direction(), Direction::Asc);
    /// assert_eq!(field.nulls(), Some(NullOrdering::Last));
    ///
    /// // An unrecognized suffix stays part of the name.
    /// let field = Field::from_token("created_at:nulls_random").unwrap();
    /// assert_eq!(field.name(), "created_at:nulls_random");
    /// assert!(field.nulls().is_none());
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if is_blank(token) {
            return None;
        }

        let (direction, rest) = match token.strip_prefix('-') {
            Some(rest) => (Direction::Desc, rest),
            None => (Direction::Asc, token.strip_prefix('+').unwrap_or(token)),
        };

        let (nulls, rest) = if let Some(rest) = rest.strip_suffix(NULLS_FIRST_SUFFIX) {
            (Some(NullOrdering::First), rest)
        } else if let Some(rest) = rest.strip_suffix(NULLS_LAST_SUFFIX) {
            (Some(NullOrdering::Last), rest)
        } else {
            (None, rest)
        };

        let name = rest.trim();
        if name.is_empty() {
            return None;
        }

        Some(Field::new(name, direction, nulls))
    }

    /// Returns the column name as written in the sort string.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sort direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the explicit null ordering, if the token carried one.
    #[must_use]
    pub fn nulls(&self) -> Option<NullOrdering> {
        self.nulls
    }
}
