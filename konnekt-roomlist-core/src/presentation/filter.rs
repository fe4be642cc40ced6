use crate::presentation::{Column, Row};

/// Which rows the lobby list shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Free text matched against game, room, description, host and members
    pub search: String,
    pub hide_empty: bool,
    pub hide_full: bool,
}

impl RowFilter {
    pub fn with_search(mut self, search: String) -> Self {
        self.search = search;
        self
    }

    pub fn hiding_empty(mut self, hide_empty: bool) -> Self {
        self.hide_empty = hide_empty;
        self
    }

    pub fn hiding_full(mut self, hide_full: bool) -> Self {
        self.hide_full = hide_full;
        self
    }

    /// Check if the filter lets every row through
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && !self.hide_empty && !self.hide_full
    }

    pub fn accepts(&self, row: &Row) -> bool {
        if self.hide_empty && row.member_count() == 0 {
            return false;
        }

        if self.hide_full && row.is_full() {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let matches = |text: &str| text.to_lowercase().contains(&needle);

        [Column::GameName, Column::RoomName, Column::Host]
            .into_iter()
            .any(|column| matches(row.cell(column).display()))
            || matches(row.description())
            || row.member_names().iter().any(|name| matches(name))
    }
}
