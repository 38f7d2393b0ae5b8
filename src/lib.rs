//! # sort_param
//!
//! A whitelist-based parser and translator for sort parameter strings — the
//! compact `sort=` values found in HTTP query strings — into either a
//! structured representation or a database-specific `ORDER BY` fragment.
//!
//! ## How it works
//!
//! An application declares which columns are sortable (with per-column
//! defaults such as null ordering and output renaming), then loads untrusted
//! input against that [`Definition`]. Anything not on the whitelist is either
//! silently dropped ([`Definition::load`]) or rejected with an error
//! ([`Definition::load_strict`]). Callers own SQL execution; this crate only
//! produces the `ORDER BY` text or the structured map.
//!
//! ## Sort string grammar
//!
//! The input is a comma-separated list of sort tokens:
//!
//! ```text
//! token        := [sign] column-spec
//! sign         := '+' | '-'            (absent or '+' means ascending)
//! column-spec  := name [nulls-suffix]
//! nulls-suffix := ':nulls_first' | ':nulls_last'
//! ```
//!
//! `"-last_name:nulls_first,+first_name"` sorts by `last_name` descending
//! with nulls first, then by `first_name` ascending. Blank or malformed
//! tokens are dropped, never reported.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sort_param = "0.1"
//! ```
//!
//! ### Declaring a whitelist and loading sort strings
//!
//! ```rust
//! use sort_param::{define, FieldOptions, Mode, NullOrdering};
//!
//! let definition = define(|def| {
//!     def.field(
//!         "first_name",
//!         FieldOptions::new()
//!             .nulls(NullOrdering::Last)
//!             .rename("users.first_name"),
//!     )
//!     .field("users.email", FieldOptions::new())
//! });
//!
//! // Permissive loading drops undeclared fields.
//! let output = definition
//!     .load("-users.email,first_name,stolen_column", Mode::Postgres)
//!     .unwrap();
//! assert_eq!(
//!     output.as_sql(),
//!     Some("users.email desc, users.first_name asc nulls last"),
//! );
//!
//! // Strict loading rejects them instead.
//! let err = definition
//!     .load_strict("stolen_column", Mode::Postgres)
//!     .unwrap_err();
//! assert_eq!(err.field(), "stolen_column");
//! ```
//!
//! ### Structured output
//!
//! The default [`Mode::Hash`] produces an insertion-ordered map that
//! serializes cleanly with serde:
//!
//! ```rust
//! use sort_param::{Definition, FieldOptions, Mode};
//!
//! let definition = Definition::new().field("email", FieldOptions::new());
//! let output = definition.load("-email", Mode::Hash).unwrap();
//!
//! let json = serde_json::to_string(&output).unwrap();
//! assert_eq!(json, r#"{"email":{"direction":"desc"}}"#);
//! ```
//!
//! ### Declarative setup with the `sort_param!` macro
//!
//! ```rust
//! use sort_param::{sort_param, Mode};
//!
//! let definition = sort_param! {
//!     "first_name" => { nulls: last, rename: "users.first_name" },
//!     "users.email" => {},
//! };
//!
//! let output = definition.load("first_name", Mode::Postgres).unwrap();
//! assert_eq!(output.as_sql(), Some("users.first_name asc nulls last"));
//! ```
//!
//! ## Nothing to sort
//!
//! A blank sort string — or, in permissive mode, one whose every field is
//! undeclared — loads to `None` rather than an empty map or empty SQL:
//!
//! ```rust
//! use sort_param::{Definition, FieldOptions, Mode};
//!
//! let definition = Definition::new().field("email", FieldOptions::new());
//! assert!(definition.load("", Mode::Hash).is_none());
//! assert!(definition.load("   ", Mode::MySql).is_none());
//! assert!(definition.load("unknown", Mode::Postgres).is_none());
//! ```
//!
//! ## Concurrency
//!
//! Everything is a pure, synchronous computation. A built [`Definition`]
//! has no interior mutability, so the intended pattern is: declare once at
//! startup, then share `&Definition` across threads for the life of the
//! process.
//!
//! ## Scope
//!
//! Column-name whitelisting is the only injection defense provided; sort
//! keys are plain column names (no expressions), directions are limited to
//! ascending/descending, and null handling to first/last.

pub mod definition;
pub mod error;
pub mod field;
pub mod fields;
pub mod formatter;
pub mod macros;
mod util;

pub use definition::{define, Definition, FieldDefaults, FieldOptions};
pub use error::{Error, Result};
pub use field::{Direction, Field, NullOrdering};
pub use fields::Fields;
pub use formatter::{
    Formatter, HashFormatter, Mode, MySqlFormatter, Output, PostgresFormatter, SortOptions,
};

/// Parses a sort string into its ordered field sequence without applying
/// any whitelist.
///
/// Equivalent to [`Fields::parse`]; useful for inspecting what a sort
/// string asks for before deciding how to handle it.
///
/// # Examples
///
/// ```rust
/// use sort_param::{parse, Direction};
///
/// let fields = parse("-created_at,+id");
/// let names: Vec<_> = fields.names().collect();
/// assert_eq!(names, vec!["created_at", "id"]);
/// assert_eq!(fields.get("created_at").unwrap().direction(), Direction::Desc);
/// ```
#[must_use]
pub fn parse(sort_string: &str) -> Fields {
    Fields::parse(sort_string)
}
