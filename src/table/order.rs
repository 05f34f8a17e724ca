//! Row ordering.
//!
//! Both orderings go through a stable sort, so rows that compare equal keep
//! their insertion order.

use std::cmp::Ordering;

use super::plan::RenderedRow;

/// Compares the leading `group_count` cells lexicographically. The first
/// group column whose values differ decides.
pub(crate) fn compare_groups(a: &[String], b: &[String], group_count: usize) -> Ordering {
    a.iter()
        .zip(b)
        .take(group_count)
        .map(|(x, y)| x.cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Turns a "sorts before" predicate into a three-way comparison.
///
/// Predicates that answer `true` in both directions (for example `>=`) are
/// read as equal, so the resulting order stays total.
pub(crate) fn ordering_from_less<T: ?Sized>(
    less: &dyn Fn(&T, &T) -> bool,
    a: &T,
    b: &T,
) -> Ordering {
    match (less(a, b), less(b, a)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Sorts `rows` by their group cells, or by `less` when given.
pub(crate) fn sort_rows<R>(
    rows: &mut [RenderedRow<'_, R>],
    group_count: usize,
    less: Option<&dyn Fn(&R, &R) -> bool>,
) {
    match less {
        Some(less) => rows.sort_by(|a, b| ordering_from_less(less, a.record, b.record)),
        None if group_count > 0 => {
            rows.sort_by(|a, b| compare_groups(&a.cells, &b.cells, group_count))
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_compare_groups_first_difference_decides() {
        let a = cells(&["student", "30"]);
        let b = cells(&["teacher", "20"]);
        assert_eq!(compare_groups(&a, &b, 2), Ordering::Less);
        assert_eq!(compare_groups(&b, &a, 2), Ordering::Greater);
    }

    #[test]
    fn test_compare_groups_ignores_non_group_cells() {
        let a = cells(&["30", "Jane"]);
        let b = cells(&["30", "Jack"]);
        assert_eq!(compare_groups(&a, &b, 1), Ordering::Equal);
        assert_eq!(compare_groups(&a, &b, 2), Ordering::Greater);
    }

    #[test]
    fn test_compare_groups_is_lexicographic_on_text() {
        // Rendered values compare as strings: "100" sorts before "20".
        assert_eq!(
            compare_groups(&cells(&["100"]), &cells(&["20"]), 1),
            Ordering::Less
        );
    }

    #[test]
    fn test_ordering_from_strict_less() {
        let less: &dyn Fn(&i32, &i32) -> bool = &|a, b| a < b;
        assert_eq!(ordering_from_less(less, &1, &2), Ordering::Less);
        assert_eq!(ordering_from_less(less, &2, &1), Ordering::Greater);
        assert_eq!(ordering_from_less(less, &2, &2), Ordering::Equal);
    }

    #[test]
    fn test_ordering_from_non_strict_less() {
        let greater_or_equal: &dyn Fn(&i32, &i32) -> bool = &|a, b| a >= b;
        assert_eq!(ordering_from_less(greater_or_equal, &3, &1), Ordering::Less);
        assert_eq!(ordering_from_less(greater_or_equal, &1, &3), Ordering::Greater);
        assert_eq!(ordering_from_less(greater_or_equal, &2, &2), Ordering::Equal);
    }

    #[test]
    fn test_sort_rows_is_stable() {
        let records = [1, 2, 3, 4];
        let mut rows: Vec<RenderedRow<'_, i32>> = records
            .iter()
            .zip([["b", "w"], ["a", "x"], ["b", "y"], ["a", "z"]])
            .map(|(record, values)| RenderedRow {
                record,
                cells: cells(&values),
            })
            .collect();

        sort_rows(&mut rows, 1, None);
        let order: Vec<i32> = rows.iter().map(|r| *r.record).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_rows_with_less_uses_records() {
        let records = [20, 40, 30];
        let mut rows: Vec<RenderedRow<'_, i32>> = records
            .iter()
            .map(|record| RenderedRow {
                record,
                cells: vec![record.to_string()],
            })
            .collect();

        let descending: &dyn Fn(&i32, &i32) -> bool = &|a, b| a > b;
        sort_rows(&mut rows, 1, Some(descending));
        let order: Vec<i32> = rows.iter().map(|r| *r.record).collect();
        assert_eq!(order, vec![40, 30, 20]);
    }
}
