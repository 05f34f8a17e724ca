//! Column planning: display order, cell text and the uniform cell width.

use super::model::{Column, RenderFn};
use crate::sanitize::{display_width, Sanitizer};

/// One record with its cells rendered in display-column order.
pub(crate) struct RenderedRow<'a, R> {
    pub(crate) record: &'a R,
    pub(crate) cells: Vec<String>,
}

/// Indices of the display columns: `groups` in the given order, then every
/// other column in insertion order.
///
/// `groups` must hold distinct indices below `column_count`.
pub(crate) fn display_columns(column_count: usize, groups: &[usize]) -> Vec<usize> {
    let mut display = Vec::with_capacity(column_count);
    display.extend_from_slice(groups);
    display.extend((0..column_count).filter(|index| !groups.contains(index)));
    display
}

pub(crate) fn render_rows<'a, R>(
    rows: &'a [R],
    display: &[&Column<R>],
    fallback: &RenderFn<R>,
    sanitizer: &Sanitizer,
) -> Vec<RenderedRow<'a, R>> {
    rows.iter()
        .map(|record| RenderedRow {
            record,
            cells: display
                .iter()
                .map(|column| sanitizer.sanitize_str(&column.render_cell(record, fallback)))
                .collect(),
        })
        .collect()
}

/// The single width shared by every field: the widest header or cell.
pub(crate) fn cell_width<R>(headers: &[String], rows: &[RenderedRow<'_, R>]) -> usize {
    let widest_header = headers.iter().map(|h| display_width(h));
    let widest_cell = rows
        .iter()
        .flat_map(|row| row.cells.iter())
        .map(|c| display_width(c));
    widest_header.chain(widest_cell).max().unwrap_or(0)
}
