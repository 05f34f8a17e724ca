#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/rsttable/")]

//! # rsttable
//!
//! Renders a collection of records as a reStructuredText grid table, with
//! optional grouping: group columns move to the left, rows are ordered by
//! them, and repeated group values across adjacent rows are merged into a
//! single cell spanning those rows.
//!
//! ```text
//! +------------+------------+------------+
//! | profession | age        | name       |
//! +============+============+============+
//! | student    | 20         | John       |
//! +            +------------+------------+
//! |            | 30         | Jane       |
//! +------------+------------+------------+
//! | teacher    | 30         | Jack       |
//! +            +            +------------+
//! |            |            | Jill       |
//! +------------+------------+------------+
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rsttable::prelude::*;
//! use serde_json::{json, Value};
//!
//! let mut table: Table<Value> = Table::new();
//! table.add_default_column("name");
//! table.add_default_column("age");
//! table.add_default_column("profession");
//!
//! table.add_row(json!({"name": "John", "age": 20, "profession": "student"}));
//! table.add_row(json!({"name": "Jack", "age": 30, "profession": "teacher"}));
//! table.add_row(json!({"name": "Jane", "age": 30, "profession": "student"}));
//! table.add_row(json!({"name": "Jill", "age": 30, "profession": "teacher"}));
//!
//! let out = table.render(&["profession", "age"]);
//! assert!(out.contains("| teacher    | 30         | Jack       |"));
//! assert!(out.contains("|            |            | Jill       |"));
//! ```
//!
//! ## Records
//!
//! A row is any value. Columns turn it into text through a render function;
//! columns without one fall back to the table's default render. For types
//! implementing [`record::Record`] (JSON values and string-keyed maps) the
//! default render looks the column name up and yields `""` when the record
//! has no such field. Other record types supply their own default with
//! [`Table::with_default_render`].
//!
//! ## Ordering
//!
//! [`Table::render`] orders rows by their group values compared as text.
//! [`Table::render_with_order`] takes a "sorts before" predicate instead,
//! for numeric or descending orders. Merging only looks at the resulting
//! adjacency, so it behaves the same under either ordering.
//!
//! ## Errors
//!
//! Rendering never fails on record contents. Unknown or repeated group
//! names are dropped by the lenient entry points and reported as
//! [`TableError`] by [`Table::try_render`] and
//! [`Table::try_render_with_order`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: a `debug` line per render,
//! `trace` lines for merge decisions and `warn` lines for repaired input.
//! Install any `log` backend to see them.

pub mod error;
pub mod record;
pub mod sanitize;
pub mod table;

pub use error::{Result, TableError};
pub use record::{default_render, Record};
pub use sanitize::{new_sanitizer, replace_newlines, replace_tabs, Sanitizer, SanitizerOpt};
pub use table::Model as Table;
pub use table::{Column, RenderFn};

/// Prelude module for convenient imports.
///
/// ```rust
/// use rsttable::prelude::*;
/// use serde_json::Value;
///
/// let table: Table<Value> = Table::new().with_columns(["a"]);
/// assert!(table.is_empty());
/// ```
pub mod prelude {
    pub use crate::error::TableError;
    pub use crate::record::{default_render, Record};
    pub use crate::sanitize::{new_sanitizer, replace_newlines, replace_tabs, Sanitizer};
    pub use crate::table::Model as Table;
    pub use crate::table::{Column, RenderFn};
}
