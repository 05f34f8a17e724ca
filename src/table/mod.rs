//! Grid table rendering with grouped cells.
//!
//! A [`Model`] holds records and columns and renders them as a
//! reStructuredText grid table. Rendering runs three stages over a local
//! view of the rows:
//!
//! 1. **Planning**: group columns move to the front in the order given, every
//!    cell is rendered and sanitized, and a single cell width is taken from
//!    the widest header or value.
//! 2. **Ordering**: rows are stably sorted by their group values (compared as
//!    text, first differing group column decides) or by a caller predicate.
//! 3. **Painting**: border and value lines are drawn; a group cell whose
//!    value, and every group value to its left, repeats the row above is
//!    merged into the cell above.
//!
//! # Basic Usage
//!
//! ```rust
//! use rsttable::table::Model;
//! use serde_json::{json, Value};
//!
//! let mut table: Model<Value> = Model::new();
//! table.add_default_column("name");
//! table.add_default_column("age");
//! table.add_row(json!({"name": "Joe", "age": 40}));
//! table.add_row(json!({"name": "Jill", "age": 30}));
//!
//! let out = table.render(&["age"]);
//! assert!(out.starts_with("+------+------+\n| age  | name |\n+======+======+\n| 30   | Jill |"));
//! ```
//!
//! # Custom Ordering
//!
//! ```rust
//! use rsttable::table::Model;
//! use serde_json::{json, Value};
//!
//! let table: Model<Value> = Model::new()
//!     .with_columns(["name", "age"])
//!     .with_rows(vec![
//!         json!({"name": "John", "age": 9}),
//!         json!({"name": "Jane", "age": 10}),
//!     ]);
//!
//! // Numeric, descending.
//! let out = table.render_with_order(&["age"], |a, b| a["age"].as_i64() > b["age"].as_i64());
//! let first_row = out.lines().nth(3).unwrap();
//! assert_eq!(first_row, "| 10   | Jane |");
//! ```

mod grid;
mod model;
mod order;
mod plan;


pub use model::{Column, Model, RenderFn};
