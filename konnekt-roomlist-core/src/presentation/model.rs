use crate::domain::Room;
use crate::presentation::{sort_rows, Column, Row, RowBuilder, RowFilter, SortOrder};
use crate::traits::{IconTheme, NoIconTheme};

/// Rows of the lobby list plus the view's sort and filter state
///
/// Rows are rebuilt on every refresh; re-sorting reuses the built rows.
pub struct LobbyRowModel {
    rows: Vec<Row>,
    sort: Option<(Column, SortOrder)>,
    filter: RowFilter,
    theme: Box<dyn IconTheme>,
}

impl LobbyRowModel {
    /// Create an empty model without an icon theme
    pub fn new() -> Self {
        Self::with_theme(Box::new(NoIconTheme))
    }

    pub fn with_theme(theme: Box<dyn IconTheme>) -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            filter: RowFilter::default(),
            theme,
        }
    }

    // Getters

    /// All rows in current order, filtered or not
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn sort_state(&self) -> Option<(Column, SortOrder)> {
        self.sort
    }

    pub fn filter(&self) -> &RowFilter {
        &self.filter
    }

    /// Rows the filter accepts, in current order
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(move |row| self.filter.accepts(row))
    }

    // State mutations

    /// Replace all rows with a fresh lobby snapshot
    ///
    /// The active sort is reapplied; rooms that tie keep snapshot order.
    pub fn refresh(&mut self, rooms: &[Room]) {
        self.rows = RowBuilder::new(&*self.theme).build_rows(rooms);

        if let Some((column, order)) = self.sort {
            sort_rows(&mut self.rows, column, order);
        }

        tracing::debug!(
            rooms = rooms.len(),
            sort = ?self.sort,
            "Lobby rows rebuilt"
        );
    }

    /// Re-sort existing rows without rebuilding them
    pub fn sort(&mut self, column: Column, order: SortOrder) {
        sort_rows(&mut self.rows, column, order);
        self.sort = Some((column, order));

        tracing::debug!(%column, %order, "Lobby rows sorted");
    }

    pub fn set_filter(&mut self, filter: RowFilter) {
        self.filter = filter;
    }
}

impl Default for LobbyRowModel {
    fn default() -> Self {
        Self::new()
    }
}
