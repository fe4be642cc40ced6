use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

pub enum AppEvent {
    Key(KeyCode),
    Tick,
}

/// Wait up to 100ms for a key press
pub fn read_event() -> std::io::Result<AppEvent> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(AppEvent::Key(code)),
            _ => Ok(AppEvent::Tick),
        }
    } else {
        Ok(AppEvent::Tick)
    }
}
