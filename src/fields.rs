//! Ordered sequence of parsed sort fields.
//!
//! This module provides [`Fields`], a wrapper around [`IndexMap`] that
//! keeps at most one [`Field`] per column name while preserving the order
//! in which names were *last* pushed. This matters for sort parameters:
//! `"+a,-b,-a"` means "sort by `b`, then by `a` descending" — the later
//! occurrence of `a` wins both its value and its position.
//!
//! ## Why IndexMap?
//!
//! `Fields` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: the same sort string always formats to the
//!   same `ORDER BY` clause
//! - **Iteration order**: fields iterate in the order the caller asked
//!   for them
//! - **Name-keyed dedup**: re-sorting by the same column twice collapses
//!   to a single directive
//!
//! ## Examples
//!
//! ```rust
//! use sort_param::{Direction, Fields};
//!
//! let fields = Fields::parse("+first_name,-last_name");
//! assert_eq!(fields.len(), 2);
//!
//! let names: Vec<_> = fields.names().collect();
//! assert_eq!(names, vec!["first_name", "last_name"]);
//! assert_eq!(fields.get("last_name").unwrap().direction(), Direction::Desc);
//! ```

use crate::field::Field;
use crate::util::is_blank;
use indexmap::IndexMap;

/// An ordered, name-deduplicated sequence of sort fields.
///
/// Built once per load from the raw sort string and read-only afterward.
///
/// # Examples
///
/// ```rust
/// use sort_param::{Direction, Fields};
///
/// // A repeated name keeps only its last occurrence, at its last position.
/// let fields = Fields::parse("+a,-b,-a");
/// let names: Vec<_> = fields.names().collect();
/// assert_eq!(names, vec!["b", "a"]);
/// assert_eq!(fields.get("a").unwrap().direction(), Direction::Desc);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields(IndexMap<String, Field>);

impl Fields {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Fields(IndexMap::new())
    }

    /// Parses a comma-separated sort string into a sequence.
    ///
    /// Tokens are trimmed; blank or malformed tokens are skipped. A blank
    /// input yields an empty sequence, never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sort_param::Fields;
    ///
    /// assert!(Fields::parse("").is_empty());
    /// assert!(Fields::parse(" , + , - ").is_empty());
    ///
    /// let fields = Fields::parse("a, -b:nulls_last");
    /// assert_eq!(fields.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(sort_string: &str) -> Self {
        let mut fields = Fields::new();
        if is_blank(sort_string) {
            return fields;
        }

        for token in sort_string.split(',') {
            if let Some(field) = Field::from_token(token) {
                fields.push(field);
            }
        }

        fields
    }

    /// Appends a field, replacing any previous field with the same name.
    ///
    /// Last write wins for both value and position: the name moves to the
    /// end of the iteration order.
    pub fn push(&mut self, field: Field) {
        self.0.shift_remove(field.name());
        self.0.insert(field.name().to_owned(), field);
    }

    /// Returns the field with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.get(name)
    }

    /// Returns an iterator over the field names, in sequence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the fields, in sequence order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Field> {
        self.0.values()
    }

    /// Returns the number of fields in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = indexmap::map::IntoValues<String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = indexmap::map::Values<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        let mut fields = Fields::new();
        fields.extend(iter);
        fields
    }
}

impl Extend<Field> for Fields {
    fn extend<T: IntoIterator<Item = Field>>(&mut self, iter: T) {
        for field in iter {
            self.push(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Direction, NullOrdering};

    #[test]
    fn test_parse_preserves_order() {
        let fields = Fields::parse("+first_name,-last_name:nulls_first");

        let parsed: Vec<_> = fields.iter().collect();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0].name(), "first_name");
        assert_eq!(parsed[0].direction(), Direction::Asc);
        assert!(parsed[0].nulls().is_none());

        assert_eq!(parsed[1].name(), "last_name");
        assert_eq!(parsed[1].direction(), Direction::Desc);
        assert_eq!(parsed[1].nulls(), Some(NullOrdering::First));
    }

    #[test]
    fn test_parse_skips_blank_tokens() {
        let fields = Fields::parse("a,, ,+,-,b");
        let names: Vec<_> = fields.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_blank_input_yields_empty_sequence() {
        assert!(Fields::parse("").is_empty());
        assert!(Fields::parse("   ").is_empty());
    }

    #[test]
    fn test_duplicate_name_last_wins_value_and_position() {
        let fields = Fields::parse("+a,-b,-a");

        assert_eq!(fields.len(), 2);
        let names: Vec<_> = fields.names().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(fields.get("a").unwrap().direction(), Direction::Desc);
    }

    #[test]
    fn test_push_replaces_by_name() {
        let mut fields = Fields::new();
        fields.push(Field::new("a", Direction::Asc, None));
        fields.push(Field::new("a", Direction::Desc, Some(NullOrdering::Last)));

        assert_eq!(fields.len(), 1);
        let field = fields.get("a").unwrap();
        assert_eq!(field.direction(), Direction::Desc);
        assert_eq!(field.nulls(), Some(NullOrdering::Last));
    }

    #[test]
    fn test_get_unknown_name() {
        let fields = Fields::parse("a,b");
        assert!(fields.get("c").is_none());
    }

    #[test]
    fn test_collect_from_iterator() {
        let fields: Fields = Fields::parse("a,b,c")
            .into_iter()
            .filter(|field| field.name() != "b")
            .collect();

        let names: Vec<_> = fields.names().collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
