use crossterm::event::KeyCode;
use konnekt_roomlist_core::{Column, LobbyRowModel, Room, Row, SortOrder};

mod lobby_tab;

pub use lobby_tab::LobbyTab;

/// Actions the event loop has to carry out (pure presentation events)
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Re-read the snapshot and rebuild rows
    Reload,
    /// Copy the selected room's host endpoint
    CopyEndpoint,
    Quit,
}

/// Pure presentation state around the row model
pub struct App {
    pub model: LobbyRowModel,
    pub lobby_tab: LobbyTab,
    pub should_quit: bool,
}

impl App {
    pub fn new(mut model: LobbyRowModel, sort_column: Column, sort_order: SortOrder) -> Self {
        model.sort(sort_column, sort_order);

        Self {
            model,
            lobby_tab: LobbyTab::new(),
            should_quit: false,
        }
    }

    /// Handle keyboard input → returns UserAction if applicable
    pub fn handle_key(&mut self, key: KeyCode) -> Option<UserAction> {
        if self.lobby_tab.handle_key(key, self.visible_count()) {
            return None;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Some(UserAction::Quit)
            }

            KeyCode::Char('s') => {
                let (column, order) = self.sort_state();
                self.apply_sort(column.next(), order);
                None
            }

            KeyCode::Char('S') => {
                let (column, order) = self.sort_state();
                self.apply_sort(column.previous(), order);
                None
            }

            KeyCode::Char('o') => {
                let (column, order) = self.sort_state();
                self.apply_sort(column, order.toggled());
                None
            }

            KeyCode::Char('e') => {
                let filter = self.model.filter().clone();
                let hide_empty = !filter.hide_empty;
                self.model.set_filter(filter.hiding_empty(hide_empty));
                self.lobby_tab.clamp(self.visible_count());
                None
            }

            KeyCode::Char('f') => {
                let filter = self.model.filter().clone();
                let hide_full = !filter.hide_full;
                self.model.set_filter(filter.hiding_full(hide_full));
                self.lobby_tab.clamp(self.visible_count());
                None
            }

            KeyCode::Char('r') => Some(UserAction::Reload),
            KeyCode::Char('c') => Some(UserAction::CopyEndpoint),

            _ => None,
        }
    }

    /// Active sort column and order
    pub fn sort_state(&self) -> (Column, SortOrder) {
        self.model
            .sort_state()
            .unwrap_or((Column::GameName, SortOrder::Ascending))
    }

    /// Re-sort, keeping the selection on the same room
    fn apply_sort(&mut self, column: Column, order: SortOrder) {
        let selected = self.selected_row().cloned();

        self.model.sort(column, order);

        let index = selected
            .and_then(|selected| self.model.visible_rows().position(|row| *row == selected))
            .unwrap_or(0);
        self.lobby_tab.select(index);
    }

    /// Replace rooms with a fresh snapshot
    pub fn update_rooms(&mut self, rooms: &[Room]) {
        self.model.refresh(rooms);
        self.lobby_tab.clamp(self.visible_count());
    }

    pub fn visible_count(&self) -> usize {
        self.model.visible_rows().count()
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.model
            .visible_rows()
            .nth(self.lobby_tab.selected_room())
    }

    /// Tick for status message expiry
    pub fn tick(&mut self) {
        self.lobby_tab.tick();
    }

    /// Copy `ip:port` of the selected room to the clipboard
    pub fn copy_selected_endpoint(&mut self) -> Result<(), String> {
        let endpoint = match self.selected_row() {
            Some(row) => format!("{}:{}", row.endpoint().ip, row.endpoint().port),
            None => return Err("No room selected".to_string()),
        };

        use arboard::Clipboard;
        let result = Clipboard::new()
            .map_err(|e| format!("✗ Clipboard unavailable: {}", e))
            .and_then(|mut clipboard| {
                clipboard
                    .set_text(endpoint.clone())
                    .map_err(|e| format!("✗ Failed: {}", e))
            });

        match result {
            Ok(()) => {
                self.lobby_tab
                    .show_message(format!("✓ Copied {}", endpoint));
                Ok(())
            }
            Err(msg) => {
                self.lobby_tab.show_message(msg.clone());
                Err(msg)
            }
        }
    }
}
