//! Grid painting.
//!
//! A grid table is drawn as alternating border and value lines:
//!
//! ```text
//! +------+------+
//! | age  | name |
//! +======+======+
//! | 30   | Jane |
//! +      +------+
//! |      | Jack |
//! +------+------+
//! ```
//!
//! Every field is `width + 2` characters between `+` (border lines) or `|`
//! (value lines). A border segment filled with spaces plus a blank value cell
//! below it extends the cell above, which is how group values merge.

use super::plan::RenderedRow;
use crate::sanitize::display_width;

const HEADER_FILL: char = '=';
const ROW_FILL: char = '-';
const MERGED_FILL: char = ' ';

/// Draws a border line for `n_cols` fields. The leading `skip_leading`
/// fields are blank, the rest are filled with `fill`.
pub(crate) fn split_line(fill: char, n_cols: usize, width: usize, skip_leading: usize) -> String {
    let mut buf = String::with_capacity(n_cols * (width + 3) + 2);
    buf.push('+');
    for i in 0..n_cols {
        let c = if i < skip_leading { MERGED_FILL } else { fill };
        push_split_cell(&mut buf, c, width);
    }
    buf.push('\n');
    buf
}

fn push_split_cell(buf: &mut String, fill: char, width: usize) {
    buf.extend(std::iter::repeat(fill).take(width + 2));
    buf.push('+');
}

fn push_value_cell(buf: &mut String, value: &str, width: usize) {
    buf.push(' ');
    buf.push_str(value);
    let pad = width.saturating_sub(display_width(value));
    buf.extend(std::iter::repeat(' ').take(pad));
    buf.push_str(" |");
}

fn value_line<'s>(values: impl Iterator<Item = &'s str>, width: usize) -> String {
    let mut buf = String::from("|");
    for value in values {
        push_value_cell(&mut buf, value, width);
    }
    buf.push('\n');
    buf
}

/// Number of leading cells of `current` that extend the row above.
///
/// Only the first `group_count` cells may merge, and the scan stops at the
/// first cell that differs: once a group value changes, every cell to its
/// right starts a new cell too, even if its own value repeats.
pub(crate) fn merge_span(
    previous: Option<&[String]>,
    current: &[String],
    group_count: usize,
) -> usize {
    let Some(previous) = previous else {
        return 0;
    };
    current
        .iter()
        .zip(previous)
        .take(group_count)
        .take_while(|(cur, prev)| cur == prev)
        .count()
}

/// Paints the header and the body rows, in the order given.
pub(crate) fn paint<R>(
    headers: &[String],
    rows: &[RenderedRow<'_, R>],
    group_count: usize,
    width: usize,
) -> String {
    let n_cols = headers.len();
    if n_cols == 0 {
        return String::new();
    }

    let mut buf = split_line(ROW_FILL, n_cols, width, 0);
    buf.push_str(&value_line(headers.iter().map(String::as_str), width));

    let mut previous: Option<&[String]> = None;
    for (index, row) in rows.iter().enumerate() {
        let fill = if index == 0 { HEADER_FILL } else { ROW_FILL };
        let merged = merge_span(previous, &row.cells, group_count);
        log::trace!("row {index}: {merged} of {group_count} group cells merged");

        buf.push_str(&split_line(fill, n_cols, width, merged));
        let values = row
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| if i < merged { "" } else { cell.as_str() });
        buf.push_str(&value_line(values, width));

        previous = Some(&row.cells);
    }

    buf.push_str(&split_line(ROW_FILL, n_cols, width, 0));
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_split_line_full() {
        assert_eq!(split_line('-', 2, 4, 0), "+------+------+\n");
        assert_eq!(split_line('=', 1, 1, 0), "+===+\n");
    }

    #[test]
    fn test_split_line_skips_leading_fields() {
        assert_eq!(split_line('-', 3, 2, 2), "+    +    +----+\n");
    }

    #[test]
    fn test_value_line_pads_to_width() {
        let line = value_line(["ab", "", "abcd"].into_iter(), 4);
        assert_eq!(line, "| ab   |      | abcd |\n");
    }

    #[test]
    fn test_merge_span_first_row_never_merges() {
        assert_eq!(merge_span(None, &cells(&["", ""]), 2), 0);
    }

    #[test]
    fn test_merge_span_stops_at_first_difference() {
        let prev = cells(&["teacher", "30", "4000", "Jack"]);
        let cur = cells(&["teacher", "40", "4000", "Joe"]);
        // The salary repeats but sits right of a changed age.
        assert_eq!(merge_span(Some(&prev), &cur, 3), 1);
    }

    #[test]
    fn test_merge_span_limited_to_group_columns() {
        let prev = cells(&["30", "Jane"]);
        let cur = cells(&["30", "Jane"]);
        assert_eq!(merge_span(Some(&prev), &cur, 1), 1);
        assert_eq!(merge_span(Some(&prev), &cur, 0), 0);
    }

    #[test]
    fn test_paint_header_only() {
        let headers = cells(&["a", "b"]);
        let out = paint::<()>(&headers, &[], 0, 1);
        assert_eq!(out, "+---+---+\n| a | b |\n+---+---+\n");
    }
}
