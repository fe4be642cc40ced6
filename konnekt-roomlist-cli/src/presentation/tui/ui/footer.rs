use crate::presentation::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let filter = app.model.filter();
    let shortcuts = format!(
        "j/k: select | s/S: sort | o: order | e: empty [{}] | f: full [{}] | r: reload | c: copy host | q: quit",
        if filter.hide_empty { "hidden" } else { "shown" },
        if filter.hide_full { "hidden" } else { "shown" },
    );

    let text = match app.lobby_tab.status_message() {
        Some(message) => Line::from(message.to_string()),
        None => Line::from(shortcuts),
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}
