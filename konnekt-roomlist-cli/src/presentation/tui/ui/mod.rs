use super::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

mod footer;
mod header;
mod members;
mod rooms;

/// Main render function
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    header::render_header(f, chunks[0], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    rooms::render_rooms(f, content[0], app);
    members::render_members(f, content[1], app);

    footer::render_footer(f, chunks[2], app);
}
