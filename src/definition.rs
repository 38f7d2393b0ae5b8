//! Whitelist registry for sortable columns.
//!
//! A [`Definition`] declares which column names untrusted sort strings may
//! reference, along with per-column defaults (null ordering, output
//! rename). Once built it is read-only: declare the definition once at
//! startup, then share it freely — it has no interior mutability, so
//! `&Definition` is safe to use from any number of threads.
//!
//! ## Declaring fields
//!
//! Declarations chain fluently, or run inside a [`define`] callback that
//! insists on a non-empty result:
//!
//! ```rust
//! use sort_param::{define, Definition, FieldOptions, NullOrdering};
//!
//! let definition = Definition::new()
//!     .field("first_name", FieldOptions::new().nulls(NullOrdering::Last))
//!     .field("email", FieldOptions::new());
//!
//! let same = define(|def| {
//!     def.field("first_name", FieldOptions::new().nulls(NullOrdering::Last))
//!        .field("email", FieldOptions::new())
//! });
//! assert_eq!(definition, same);
//! ```
//!
//! ## Loading sort strings
//!
//! [`Definition::load`] drops undeclared fields silently;
//! [`Definition::load_strict`] rejects the whole string on the first
//! undeclared field:
//!
//! ```rust
//! use sort_param::{Definition, FieldOptions, Mode};
//!
//! let definition = Definition::new().field("email", FieldOptions::new());
//!
//! let output = definition.load("email,stolen_column", Mode::Postgres).unwrap();
//! assert_eq!(output.as_sql(), Some("email asc"));
//!
//! assert!(definition.load_strict("stolen_column", Mode::Postgres).is_err());
//! ```

use crate::error::{Error, Result};
use crate::field::NullOrdering;
use crate::fields::Fields;
use crate::formatter::{Mode, Output};
use crate::util::is_blank;
use indexmap::IndexMap;
use std::fmt;

/// How a declared column is renamed in formatted output.
enum Rename {
    Literal(String),
    Transform(Box<dyn Fn(&str) -> String>),
}

impl Rename {
    fn resolve(&self, name: &str) -> String {
        match self {
            Rename::Literal(literal) => literal.clone(),
            Rename::Transform(transform) => transform(name),
        }
    }
}

impl fmt::Debug for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rename::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Rename::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Default options attached to a column declaration.
///
/// Built fluently and consumed by [`Definition::field`] /
/// [`Definition::fields`]. A rename may be a literal output name or a
/// transform applied to the declared name; either way it is resolved at
/// declaration time and only the resulting literal is stored.
///
/// # Examples
///
/// ```rust
/// use sort_param::{Definition, FieldOptions, NullOrdering};
///
/// let definition = Definition::new()
///     .field("email", FieldOptions::new().rename("users.email"))
///     .fields(
///         &["first_name", "last_name"],
///         FieldOptions::new()
///             .nulls(NullOrdering::Last)
///             .rename_with(|name| format!("users.{name}")),
///     );
///
/// let defaults = definition.field_defaults("last_name").unwrap();
/// assert_eq!(defaults.rename.as_deref(), Some("users.last_name"));
/// assert_eq!(defaults.nulls, Some(NullOrdering::Last));
/// ```
#[derive(Debug, Default)]
pub struct FieldOptions {
    nulls: Option<NullOrdering>,
    rename: Option<Rename>,
}

impl FieldOptions {
    /// Creates an empty options record (no default null ordering, no rename).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default null ordering applied when the sort string does
    /// not specify one for this column.
    #[must_use]
    pub fn nulls(mut self, nulls: NullOrdering) -> Self {
        self.nulls = Some(nulls);
        self
    }

    /// Renames the column to a literal output name.
    #[must_use]
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(Rename::Literal(name.into()));
        self
    }

    /// Renames the column by transforming the declared name.
    ///
    /// The transform runs once per declared name, at declaration time.
    #[must_use]
    pub fn rename_with<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.rename = Some(Rename::Transform(Box::new(transform)));
        self
    }

    fn has_literal_rename(&self) -> bool {
        matches!(self.rename, Some(Rename::Literal(_)))
    }

    fn resolve(&self, name: &str) -> FieldDefaults {
        FieldDefaults {
            nulls: self.nulls,
            rename: self.rename.as_ref().map(|rename| rename.resolve(name)),
        }
    }
}

/// The resolved defaults stored for a declared column.
///
/// Renames are already reduced to literals here; transforms never outlive
/// declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDefaults {
    /// Null ordering used when the sort string leaves it unspecified.
    pub nulls: Option<NullOrdering>,
    /// Output name used in place of the declared name.
    pub rename: Option<String>,
}

/// The whitelist of sortable columns and their defaults.
///
/// Maps declared column names to [`FieldDefaults`]; declaration order is
/// preserved and a repeated declaration overwrites the earlier one.
///
/// # Examples
///
/// ```rust
/// use sort_param::{Definition, FieldOptions, Mode, NullOrdering};
///
/// let definition = Definition::new()
///     .field("first_name", FieldOptions::new().nulls(NullOrdering::Last))
///     .field("email", FieldOptions::new());
///
/// let output = definition.load("-email,first_name", Mode::Postgres).unwrap();
/// assert_eq!(
///     output.as_sql(),
///     Some("email desc, first_name asc nulls last"),
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Definition {
    registry: IndexMap<String, FieldDefaults>,
}

impl Definition {
    /// Creates a definition with no declared columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a sortable column with its default options.
    ///
    /// The name is trimmed; a blank name is silently ignored. Declaring
    /// the same name twice keeps the later options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sort_param::{Definition, FieldOptions, NullOrdering};
    ///
    /// let definition = Definition::new()
    ///     .field("email", FieldOptions::new())
    ///     .field("  ", FieldOptions::new());
    ///
    /// assert_eq!(definition.len(), 1);
    /// ```
    #[must_use]
    pub fn field(mut self, name: impl AsRef<str>, options: FieldOptions) -> Self {
        let name = name.as_ref().trim();
        if is_blank(name) {
            return self;
        }

        self.registry.insert(name.to_owned(), options.resolve(name));
        self
    }

    /// Declares several columns sharing one options record.
    ///
    /// A [`FieldOptions::rename_with`] transform is applied to each name
    /// individually.
    ///
    /// # Panics
    ///
    /// Panics when a literal [`FieldOptions::rename`] is combined with
    /// more than one name — there is no way to tell which column the
    /// literal belongs to. Use `rename_with` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sort_param::{Definition, FieldOptions, NullOrdering};
    ///
    /// let definition = Definition::new().fields(
    ///     &["first_name", "last_name"],
    ///     FieldOptions::new().nulls(NullOrdering::Last),
    /// );
    ///
    /// assert_eq!(definition.len(), 2);
    /// ```
    #[must_use]
    pub fn fields(mut self, names: &[&str], options: FieldOptions) -> Self {
        assert!(
            names.len() <= 1 || !options.has_literal_rename(),
            "a literal rename cannot be shared by {} fields; use rename_with",
            names.len(),
        );

        for name in names {
            self = self.field(name, FieldOptions {
                nulls: options.nulls,
                rename: options.rename.as_ref().map(|rename| {
                    Rename::Literal(rename.resolve(name.trim()))
                }),
            });
        }
        self
    }

    /// Returns a copy of the stored defaults for a declared column, or
    /// `None` if the name was never declared.
    #[must_use]
    pub fn field_defaults(&self, name: &str) -> Option<FieldDefaults> {
        self.registry.get(name).cloned()
    }

    /// Borrowing variant of [`Definition::field_defaults`] for formatters.
    pub(crate) fn defaults(&self, name: &str) -> Option<&FieldDefaults> {
        self.registry.get(name)
    }

    /// Returns `true` if the column name is on the whitelist.
    ///
    /// The check is an exact, case-sensitive match.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Returns an iterator over the declared column names, in declaration
    /// order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Returns the number of declared columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no columns have been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Parses and formats a sort string, silently dropping any field not
    /// on the whitelist.
    ///
    /// Returns `None` when nothing remains to sort by — a blank input, or
    /// an input whose every field is undeclared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sort_param::{Definition, FieldOptions, Mode};
    ///
    /// let definition = Definition::new().field("email", FieldOptions::new());
    ///
    /// let output = definition.load("unknown,email", Mode::Postgres).unwrap();
    /// assert_eq!(output.as_sql(), Some("email asc"));
    ///
    /// assert!(definition.load("unknown", Mode::Postgres).is_none());
    /// assert!(definition.load("  ", Mode::Hash).is_none());
    /// ```
    #[must_use]
    pub fn load(&self, sort_string: &str, mode: Mode) -> Option<Output> {
        let known: Fields = Fields::parse(sort_string)
            .into_iter()
            .filter(|field| self.contains(field.name()))
            .collect();

        mode.formatter(self).format(&known)
    }

    /// Parses and formats a sort string, rejecting the whole input if any
    /// field is not on the whitelist.
    ///
    /// The first undeclared field in parse order is reported; no partial
    /// output is produced. A blank input is still `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSortField`] naming the offending field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sort_param::{Definition, FieldOptions, Mode};
    ///
    /// let definition = Definition::new().field("email", FieldOptions::new());
    ///
    /// let err = definition.load_strict("email,unknown", Mode::Hash).unwrap_err();
    /// assert_eq!(err.field(), "unknown");
    /// ```
    pub fn load_strict(&self, sort_string: &str, mode: Mode) -> Result<Option<Output>> {
        let fields = Fields::parse(sort_string);

        if let Some(unknown) = fields.iter().find(|field| !self.contains(field.name())) {
            return Err(Error::unsupported_sort_field(unknown.name()));
        }

        Ok(mode.formatter(self).format(&fields))
    }
}

/// Builds a [`Definition`] through a configuration callback.
///
/// The callback receives an empty definition and returns the configured
/// one; useful for keeping the declaration block in one place.
///
/// # Panics
///
/// Panics if the callback declares no fields — an empty whitelist would
/// silently reject every sort string, which is never intended.
///
/// # Examples
///
/// ```rust
/// use sort_param::{define, FieldOptions, NullOrdering};
///
/// let definition = define(|def| {
///     def.field("first_name", FieldOptions::new().nulls(NullOrdering::Last))
///        .field("email", FieldOptions::new())
/// });
/// assert_eq!(definition.len(), 2);
/// ```
#[must_use]
pub fn define<F>(configure: F) -> Definition
where
    F: FnOnce(Definition) -> Definition,
{
    let definition = configure(Definition::new());
    assert!(
        !definition.is_empty(),
        "sort definition must declare at least one field",
    );
    definition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_declares_defaults() {
        let definition = Definition::new()
            .field("email", FieldOptions::new().nulls(NullOrdering::First))
            .field("first_name", FieldOptions::new().nulls(NullOrdering::Last))
            .field("last_name", FieldOptions::new());

        assert_eq!(
            definition.field_defaults("email"),
            Some(FieldDefaults {
                nulls: Some(NullOrdering::First),
                rename: None,
            }),
        );
        assert_eq!(
            definition.field_defaults("last_name"),
            Some(FieldDefaults::default()),
        );
        assert!(definition.field_defaults("unknown").is_none());
    }

    #[test]
    fn test_blank_names_are_ignored() {
        let definition = Definition::new()
            .field("", FieldOptions::new())
            .field("   ", FieldOptions::new());

        assert!(definition.is_empty());
    }

    #[test]
    fn test_names_are_trimmed() {
        let definition = Definition::new().field("  email  ", FieldOptions::new());
        assert!(definition.contains("email"));
        assert!(!definition.contains("  email  "));
    }

    #[test]
    fn test_last_declaration_wins() {
        let definition = Definition::new()
            .field("email", FieldOptions::new().nulls(NullOrdering::First))
            .field("email", FieldOptions::new());

        assert_eq!(definition.len(), 1);
        assert_eq!(
            definition.field_defaults("email"),
            Some(FieldDefaults::default()),
        );
    }

    #[test]
    fn test_literal_rename() {
        let definition = Definition::new()
            .field("last_name", FieldOptions::new().rename("surname"));

        assert_eq!(
            definition.field_defaults("last_name").unwrap().rename.as_deref(),
            Some("surname"),
        );
    }

    #[test]
    fn test_transform_rename_resolves_at_declaration() {
        let definition = Definition::new()
            .field(
                "email",
                FieldOptions::new()
                    .nulls(NullOrdering::Last)
                    .rename_with(|name| format!("users.{name}")),
            )
            .field("last_name", FieldOptions::new().rename_with(|_| "surname".to_owned()));

        assert_eq!(
            definition.field_defaults("email").unwrap().rename.as_deref(),
            Some("users.email"),
        );
        assert_eq!(
            definition.field_defaults("last_name").unwrap().rename.as_deref(),
            Some("surname"),
        );
    }

    #[test]
    fn test_fields_share_defaults() {
        let definition = Definition::new()
            .fields(
                &["first_name", "last_name"],
                FieldOptions::new().nulls(NullOrdering::Last),
            )
            .fields(&["phone"], FieldOptions::new().nulls(NullOrdering::First))
            .fields(&["email"], FieldOptions::new());

        let names: Vec<_> = definition.names().collect();
        assert_eq!(names, vec!["first_name", "last_name", "phone", "email"]);
        assert_eq!(
            definition.field_defaults("first_name").unwrap().nulls,
            Some(NullOrdering::Last),
        );
        assert_eq!(
            definition.field_defaults("last_name").unwrap().nulls,
            Some(NullOrdering::Last),
        );
    }

    #[test]
    fn test_fields_applies_transform_per_name() {
        let definition = Definition::new().fields(
            &["first_name", "last_name"],
            FieldOptions::new().rename_with(|name| format!("users.{name}")),
        );

        assert_eq!(
            definition.field_defaults("first_name").unwrap().rename.as_deref(),
            Some("users.first_name"),
        );
        assert_eq!(
            definition.field_defaults("last_name").unwrap().rename.as_deref(),
            Some("users.last_name"),
        );
    }

    #[test]
    fn test_fields_accepts_literal_rename_for_single_name() {
        let definition = Definition::new()
            .fields(&["last_name"], FieldOptions::new().rename("surname"));

        assert_eq!(
            definition.field_defaults("last_name").unwrap().rename.as_deref(),
            Some("surname"),
        );
    }

    #[test]
    #[should_panic(expected = "literal rename")]
    fn test_fields_rejects_shared_literal_rename() {
        let _ = Definition::new().fields(
            &["first_name", "last_name"],
            FieldOptions::new().rename("surname"),
        );
    }

    #[test]
    fn test_field_defaults_returns_a_copy() {
        let definition = Definition::new()
            .field("email", FieldOptions::new().nulls(NullOrdering::First));

        let mut defaults = definition.field_defaults("email").unwrap();
        defaults.nulls = None;

        assert_eq!(
            definition.field_defaults("email").unwrap().nulls,
            Some(NullOrdering::First),
        );
    }

    #[test]
    fn test_define_callback() {
        let definition = define(|def| def.field("email", FieldOptions::new()));
        assert!(definition.contains("email"));
    }

    #[test]
    #[should_panic(expected = "at least one field")]
    fn test_define_rejects_empty_definition() {
        let _ = define(|def| def);
    }
}
