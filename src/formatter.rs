//! Output formatting for validated sort fields.
//!
//! This module turns a parsed [`Fields`] sequence plus the per-column
//! defaults of a [`Definition`] into one of three output shapes:
//!
//! - [`Mode::Hash`]: a structured, insertion-ordered map from display
//!   name to [`SortOptions`] — convenient for JSON responses or for
//!   feeding a query builder
//! - [`Mode::Postgres`]: an `ORDER BY` fragment using native
//!   `nulls first` / `nulls last` clauses
//! - [`Mode::MySql`]: an `ORDER BY` fragment emulating null ordering
//!   with `is null` / `is not null` boolean expressions, since MySQL
//!   lacks the native clause
//!
//! Per field, an explicit null ordering in the sort string wins over the
//! declared default, and the declared rename (if any) supplies the
//! display name.
//!
//! ## Examples
//!
//! ```rust
//! use sort_param::{Definition, FieldOptions, Mode, NullOrdering};
//!
//! let definition = Definition::new()
//!     .field("age", FieldOptions::new().nulls(NullOrdering::Last));
//!
//! let pg = definition.load("-age", Mode::Postgres).unwrap();
//! assert_eq!(pg.as_sql(), Some("age desc nulls last"));
//!
//! let mysql = definition.load("-age", Mode::MySql).unwrap();
//! assert_eq!(mysql.as_sql(), Some("age is null, age desc"));
//! ```

use crate::definition::Definition;
use crate::field::{Direction, Field, NullOrdering};
use crate::fields::Fields;
use indexmap::IndexMap;
use serde::Serialize;

/// Output format selector.
///
/// The variant set is closed: any unrecognized mode token falls back to
/// [`Mode::Hash`].
///
/// # Examples
///
/// ```rust
/// use sort_param::Mode;
///
/// assert_eq!(Mode::from_token("postgres"), Mode::Postgres);
/// assert_eq!(Mode::from_token("pg"), Mode::Postgres);
/// assert_eq!(Mode::from_token("mysql"), Mode::MySql);
/// assert_eq!(Mode::from_token("anything else"), Mode::Hash);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Hash,
    Postgres,
    MySql,
}

impl Mode {
    /// Resolves a mode token, falling back to [`Mode::Hash`] for anything
    /// unrecognized.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "postgres" | "pg" => Mode::Postgres,
            "mysql" => Mode::MySql,
            _ => Mode::Hash,
        }
    }

    /// Returns the formatter implementing this mode, borrowing the
    /// definition for default lookups.
    #[must_use]
    pub fn formatter<'a>(&self, definition: &'a Definition) -> Box<dyn Formatter + 'a> {
        match self {
            Mode::Hash => Box::new(HashFormatter::new(definition)),
            Mode::Postgres => Box::new(PostgresFormatter::new(definition)),
            Mode::MySql => Box::new(MySqlFormatter::new(definition)),
        }
    }
}

/// Per-column entry of the hash output: direction plus resolved null
/// ordering.
///
/// Serializes to `{"direction": "asc"}` or
/// `{"direction": "desc", "nulls": "last"}` — the `nulls` key is omitted
/// when no ordering resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SortOptions {
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nulls: Option<NullOrdering>,
}

/// A formatted sort request: either the structured map or an `ORDER BY`
/// fragment, depending on the [`Mode`].
///
/// Serializes untagged, so hash output becomes a JSON object and SQL
/// output a JSON string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Hash(IndexMap<String, SortOptions>),
    Sql(String),
}

impl Output {
    /// Returns the structured map, or `None` for SQL output.
    #[must_use]
    pub fn as_hash(&self) -> Option<&IndexMap<String, SortOptions>> {
        match self {
            Output::Hash(hash) => Some(hash),
            Output::Sql(_) => None,
        }
    }

    /// Returns the `ORDER BY` fragment, or `None` for hash output.
    #[must_use]
    pub fn as_sql(&self) -> Option<&str> {
        match self {
            Output::Hash(_) => None,
            Output::Sql(sql) => Some(sql),
        }
    }
}

/// A strategy turning validated sort fields into an [`Output`].
///
/// Implementors are stateless apart from a borrowed [`Definition`]; an
/// empty sequence always formats to `None`.
pub trait Formatter {
    fn format(&self, fields: &Fields) -> Option<Output>;
}

/// A field with its definition defaults folded in: display name and
/// effective null ordering.
struct Clause<'a> {
    name: &'a str,
    direction: Direction,
    nulls: Option<NullOrdering>,
}

impl<'a> Clause<'a> {
    fn resolve(definition: &'a Definition, field: &'a Field) -> Self {
        let defaults = definition.defaults(field.name());
        Clause {
            name: defaults
                .and_then(|defaults| defaults.rename.as_deref())
                .unwrap_or(field.name()),
            direction: field.direction(),
            nulls: field.nulls().or(defaults.and_then(|defaults| defaults.nulls)),
        }
    }
}

/// Formats fields into the structured map representation.
pub struct HashFormatter<'a> {
    definition: &'a Definition,
}

impl<'a> HashFormatter<'a> {
    #[must_use]
    pub fn new(definition: &'a Definition) -> Self {
        HashFormatter { definition }
    }
}

impl Formatter for HashFormatter<'_> {
    fn format(&self, fields: &Fields) -> Option<Output> {
        if fields.is_empty() {
            return None;
        }

        let mut hash = IndexMap::with_capacity(fields.len());
        for field in fields {
            let clause = Clause::resolve(self.definition, field);
            hash.insert(
                clause.name.to_owned(),
                SortOptions {
                    direction: clause.direction,
                    nulls: clause.nulls,
                },
            );
        }

        Some(Output::Hash(hash))
    }
}

/// Formats fields into a PostgreSQL `ORDER BY` fragment.
pub struct PostgresFormatter<'a> {
    definition: &'a Definition,
}

impl<'a> PostgresFormatter<'a> {
    #[must_use]
    pub fn new(definition: &'a Definition) -> Self {
        PostgresFormatter { definition }
    }

    fn render(&self, field: &Field) -> String {
        let clause = Clause::resolve(self.definition, field);
        let mut sql = format!("{} {}", clause.name, clause.direction);
        if let Some(nulls) = clause.nulls {
            sql.push_str(" nulls ");
            sql.push_str(nulls.as_str());
        }
        sql
    }
}

impl Formatter for PostgresFormatter<'_> {
    fn format(&self, fields: &Fields) -> Option<Output> {
        if fields.is_empty() {
            return None;
        }

        let clauses: Vec<String> = fields.iter().map(|field| self.render(field)).collect();
        Some(Output::Sql(clauses.join(", ")))
    }
}

/// Formats fields into a MySQL `ORDER BY` fragment.
///
/// MySQL has no `NULLS FIRST` / `NULLS LAST`; a resolved null ordering is
/// emulated by sorting on an `is null` / `is not null` expression before
/// the column itself.
pub struct MySqlFormatter<'a> {
    definition: &'a Definition,
}

impl<'a> MySqlFormatter<'a> {
    #[must_use]
    pub fn new(definition: &'a Definition) -> Self {
        MySqlFormatter { definition }
    }

    fn render(&self, field: &Field) -> String {
        let clause = Clause::resolve(self.definition, field);
        match clause.nulls {
            Some(NullOrdering::First) => {
                format!("{name} is not null, {name} {}", clause.direction, name = clause.name)
            }
            Some(NullOrdering::Last) => {
                format!("{name} is null, {name} {}", clause.direction, name = clause.name)
            }
            None => format!("{} {}", clause.name, clause.direction),
        }
    }
}

impl Formatter for MySqlFormatter<'_> {
    fn format(&self, fields: &Fields) -> Option<Output> {
        if fields.is_empty() {
            return None;
        }

        let clauses: Vec<String> = fields.iter().map(|field| self.render(field)).collect();
        Some(Output::Sql(clauses.join(", ")))
    }
}
