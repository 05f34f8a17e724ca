use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::{grid, order, plan};
use crate::error::{Result, TableError};
use crate::record::{default_render, Record};
use crate::sanitize::Sanitizer;

/// Render function: maps a record and a column name to the cell text.
///
/// Render functions are expected to be total. A record they cannot
/// interpret should produce `""`, never a panic.
pub type RenderFn<R> = Arc<dyn Fn(&R, &str) -> String + Send + Sync>;

/// A display column: a unique header name and an optional render function.
///
/// Columns without a render function use the owning table's default render.
pub struct Column<R> {
    name: String,
    render: Option<RenderFn<R>>,
}

impl<R> Column<R> {
    /// The header label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this column carries its own render function.
    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }

    pub(crate) fn render_cell(&self, record: &R, fallback: &RenderFn<R>) -> String {
        match &self.render {
            Some(render) => render(record, &self.name),
            None => fallback(record, &self.name),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("has_render", &self.render.is_some())
            .finish()
    }
}

/// A table of records rendered as a reStructuredText grid table.
///
/// Build a table once by adding columns and rows, then render it any number
/// of times. Rendering takes `&self`: rows are ordered through a local list
/// of references, so the table's own row order never changes.
///
/// # Examples
///
/// ```rust
/// use rsttable::Table;
/// use serde_json::{json, Value};
///
/// let mut table: Table<Value> = Table::new();
/// table.add_default_column("name");
/// table.add_default_column("age");
/// table.add_row(json!({"name": "John", "age": 20}));
/// table.add_row(json!({"name": "Jane", "age": 30}));
///
/// let out = table.render(&[]);
/// assert_eq!(out.trim(), "\
/// +------+------+
/// | name | age  |
/// +======+======+
/// | John | 20   |
/// +------+------+
/// | Jane | 30   |
/// +------+------+");
/// ```
///
/// Grouping moves the group columns first and merges repeated values:
///
/// ```rust
/// use rsttable::Table;
/// use serde_json::{json, Value};
///
/// let table: Table<Value> = Table::new()
///     .with_columns(["name", "age"])
///     .with_rows(vec![
///         json!({"name": "Jane", "age": 30}),
///         json!({"name": "John", "age": 20}),
///         json!({"name": "Jack", "age": 30}),
///     ]);
///
/// assert_eq!(table.render(&["age"]).trim(), "\
/// +------+------+
/// | age  | name |
/// +======+======+
/// | 20   | John |
/// +------+------+
/// | 30   | Jane |
/// +      +------+
/// |      | Jack |
/// +------+------+");
/// ```
pub struct Model<R> {
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    default_render: RenderFn<R>,
    sanitizer: Sanitizer,
    group_by: Vec<String>,
}

impl<R: Record + 'static> Model<R> {
    /// Creates an empty table whose default render reads fields through
    /// [`Record`].
    pub fn new() -> Self {
        Self::with_default_render(|record: &R, column: &str| default_render(record, column))
    }
}

impl<R: Record + 'static> Default for Model<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Model<R> {
    /// Creates an empty table with `render` as the default render function.
    ///
    /// Use this for record types that do not implement [`Record`].
    pub fn with_default_render<F>(render: F) -> Self
    where
        F: Fn(&R, &str) -> String + Send + Sync + 'static,
    {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            default_render: Arc::new(render),
            sanitizer: Sanitizer::default(),
            group_by: Vec::new(),
        }
    }

    /// Replaces the sanitizer applied to header names and cell values.
    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Sets the group specification used by [`Model::view`].
    pub fn with_group_by<I, S>(mut self, group_by: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_group_by(group_by);
        self
    }

    /// Appends `names` as columns using the default render.
    pub fn with_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_default_column(name);
        }
        self
    }

    /// Appends `rows` after any existing rows.
    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Appends a column rendered by `render`.
    ///
    /// Column names are expected to be unique. Adding a name twice replaces
    /// the render function of the existing column and keeps its position.
    pub fn add_column<F>(&mut self, name: impl Into<String>, render: F)
    where
        F: Fn(&R, &str) -> String + Send + Sync + 'static,
    {
        self.insert_column(name.into(), Some(Arc::new(render)));
    }

    /// Appends a column rendered by the table's default render.
    pub fn add_default_column(&mut self, name: impl Into<String>) {
        self.insert_column(name.into(), None);
    }

    fn insert_column(&mut self, name: String, render: Option<RenderFn<R>>) {
        if let Some(existing) = self.columns.iter_mut().find(|c| c.name == name) {
            log::warn!("column {name:?} added twice, replacing its render function");
            existing.render = render;
            return;
        }
        self.columns.push(Column { name, render });
    }

    /// Appends one record. Records are not validated against the columns.
    pub fn add_row(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Sets the group specification used by [`Model::view`].
    pub fn set_group_by<I, S>(&mut self, group_by: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = group_by.into_iter().map(Into::into).collect();
    }

    /// The stored group specification.
    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Columns in insertion order.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders with the stored group specification.
    pub fn view(&self) -> String {
        let group_by: Vec<&str> = self.group_by.iter().map(String::as_str).collect();
        self.render(&group_by)
    }

    /// Renders the table, ordering rows by the rendered values of `group_by`.
    ///
    /// Unknown group names are ignored and repeated ones collapse to their
    /// first occurrence. Use [`Model::try_render`] to reject them instead.
    pub fn render(&self, group_by: &[&str]) -> String {
        let groups = self.lenient_groups(group_by);
        self.render_groups(&groups, None)
    }

    /// Renders the table, ordering rows with `less` instead of the group
    /// values.
    ///
    /// `less(a, b)` should answer whether `a` sorts before `b`. Rows for which
    /// neither sorts first keep their insertion order.
    pub fn render_with_order<F>(&self, group_by: &[&str], less: F) -> String
    where
        F: Fn(&R, &R) -> bool,
    {
        let groups = self.lenient_groups(group_by);
        self.render_groups(&groups, Some(&less))
    }

    /// Like [`Model::render`] but fails on unknown or repeated group names.
    pub fn try_render(&self, group_by: &[&str]) -> Result<String> {
        let groups = self.strict_groups(group_by)?;
        Ok(self.render_groups(&groups, None))
    }

    /// Like [`Model::render_with_order`] but fails on unknown or repeated
    /// group names.
    pub fn try_render_with_order<F>(&self, group_by: &[&str], less: F) -> Result<String>
    where
        F: Fn(&R, &R) -> bool,
    {
        let groups = self.strict_groups(group_by)?;
        Ok(self.render_groups(&groups, Some(&less)))
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    fn lenient_groups(&self, group_by: &[&str]) -> Vec<usize> {
        let mut seen = HashSet::new();
        let mut groups = Vec::with_capacity(group_by.len());
        for &name in group_by {
            match self.column_index(name) {
                Some(index) if seen.insert(index) => groups.push(index),
                Some(_) => log::warn!("group column {name:?} listed twice, keeping the first"),
                None => log::warn!("ignoring unknown group column {name:?}"),
            }
        }
        groups
    }

    fn strict_groups(&self, group_by: &[&str]) -> Result<Vec<usize>> {
        let mut seen = HashSet::new();
        let mut groups = Vec::with_capacity(group_by.len());
        for &name in group_by {
            let index = self
                .column_index(name)
                .ok_or_else(|| TableError::UnknownGroupColumn {
                    name: name.to_string(),
                })?;
            if !seen.insert(index) {
                return Err(TableError::DuplicateGroupColumn {
                    name: name.to_string(),
                });
            }
            groups.push(index);
        }
        Ok(groups)
    }

    fn render_groups(&self, groups: &[usize], less: Option<&dyn Fn(&R, &R) -> bool>) -> String {
        if self.columns.is_empty() {
            log::debug!("rendering table without columns");
            return String::new();
        }

        let display: Vec<&Column<R>> = plan::display_columns(self.columns.len(), groups)
            .into_iter()
            .map(|index| &self.columns[index])
            .collect();
        let headers: Vec<String> = display
            .iter()
            .map(|column| self.sanitizer.sanitize_str(&column.name))
            .collect();

        let mut rendered =
            plan::render_rows(&self.rows, &display, &self.default_render, &self.sanitizer);
        order::sort_rows(&mut rendered, groups.len(), less);

        let width = plan::cell_width(&headers, &rendered);
        log::debug!(
            "rendering {} rows x {} columns ({} grouped), cell width {}",
            rendered.len(),
            headers.len(),
            groups.len(),
            width
        );

        grid::paint(&headers, &rendered, groups.len(), width)
    }
}

impl<R: Clone> Clone for Model<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            default_render: Arc::clone(&self.default_render),
            sanitizer: self.sanitizer.clone(),
            group_by: self.group_by.clone(),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Model<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("sanitizer", &self.sanitizer)
            .field("group_by", &self.group_by)
            .finish_non_exhaustive()
    }
}

impl<R> fmt::Display for Model<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.view())
    }
}
