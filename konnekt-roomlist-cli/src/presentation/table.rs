use konnekt_roomlist_core::{Column, Decoration, Row};

/// Columns printed on the first line of each room
const LINE_COLUMNS: [Column; 4] = [
    Column::GameName,
    Column::RoomName,
    Column::MemberCount,
    Column::Host,
];

const LOCK_MARKER: &str = " [locked]";

fn cell_text(row: &Row, column: Column) -> String {
    let cell = row.cell(column);
    match (column, cell.decoration()) {
        (Column::RoomName, Some(Decoration::Icon(_))) => format!("{}{}", cell.display(), LOCK_MARKER),
        _ => cell.display().to_string(),
    }
}

/// Render rows as a plain text table
///
/// Each room takes two lines: the main columns, then its description.
pub fn render_table<'a>(rows: impl IntoIterator<Item = &'a Row>) -> String {
    let rows: Vec<&Row> = rows.into_iter().collect();

    let widths: Vec<usize> = LINE_COLUMNS
        .iter()
        .map(|&column| {
            rows.iter()
                .map(|row| cell_text(row, column).chars().count())
                .chain(std::iter::once(column.title().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() * 2 + 1);
    lines.push(format_line(
        LINE_COLUMNS.iter().map(|column| column.title().to_string()),
        &widths,
    ));

    for row in rows {
        lines.push(format_line(
            LINE_COLUMNS.iter().map(|&column| cell_text(row, column)),
            &widths,
        ));
        lines.push(format!("    {}", row.cell(Column::RoomDescription).display()));
    }

    lines.join("\n")
}

fn format_line(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(text, &width)| {
            let padding = width.saturating_sub(text.chars().count());
            format!("{}{}", text, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
