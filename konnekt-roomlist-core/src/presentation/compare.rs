use crate::presentation::{Column, Row, SortOrder};
use std::cmp::Ordering;

/// Order two rows by a single column
///
/// Only the column's sort key is consulted. Rows that tie in this column
/// compare `Equal`; callers rely on a stable sort to keep their prior order.
pub fn compare_column(column: Column, a: &Row, b: &Row) -> Ordering {
    a.cell(column).sort_key().cmp(b.cell(column).sort_key())
}

/// Stable sort of rows by one column
///
/// Descending order flips the comparator instead of reversing the result,
/// so tied rows keep their input order in both directions.
pub fn sort_rows(rows: &mut [Row], column: Column, order: SortOrder) {
    match order {
        SortOrder::Ascending => rows.sort_by(|a, b| compare_column(column, a, b)),
        SortOrder::Descending => rows.sort_by(|a, b| compare_column(column, b, a)),
    }
}
