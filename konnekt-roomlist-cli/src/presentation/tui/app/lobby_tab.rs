use crossterm::event::KeyCode;

/// Ticks a status message stays visible (100ms each)
const MESSAGE_TICKS: usize = 30;

/// Selection and status line of the room list (presentation only)
pub struct LobbyTab {
    selected_room: usize,
    status_message: Option<String>,
    status_message_timer: usize,
}

impl LobbyTab {
    pub fn new() -> Self {
        Self {
            selected_room: 0,
            status_message: None,
            status_message_timer: 0,
        }
    }

    /// Move the selection; returns true if the key was handled
    pub fn handle_key(&mut self, key: KeyCode, visible_rooms: usize) -> bool {
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = visible_rooms.saturating_sub(1);
                self.selected_room = (self.selected_room + 1).min(max);
                true
            }

            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_room = self.selected_room.saturating_sub(1);
                true
            }

            KeyCode::Home | KeyCode::Char('g') => {
                self.selected_room = 0;
                true
            }

            KeyCode::End | KeyCode::Char('G') => {
                self.selected_room = visible_rooms.saturating_sub(1);
                true
            }

            _ => false,
        }
    }

    /// Keep the selection inside the list after it shrank
    pub fn clamp(&mut self, visible_rooms: usize) {
        let max = visible_rooms.saturating_sub(1);
        self.selected_room = self.selected_room.min(max);
    }

    pub fn select(&mut self, index: usize) {
        self.selected_room = index;
    }

    pub fn tick(&mut self) {
        if self.status_message_timer > 0 {
            self.status_message_timer -= 1;
            if self.status_message_timer == 0 {
                self.status_message = None;
            }
        }
    }

    pub fn show_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_timer = MESSAGE_TICKS;
    }

    pub fn selected_room(&self) -> usize {
        self.selected_room
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

impl Default for LobbyTab {
    fn default() -> Self {
        Self::new()
    }
}
