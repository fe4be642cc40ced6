use crate::presentation::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_members(f: &mut Frame, area: Rect, app: &App) {
    let text: Vec<Line> = match app.selected_row() {
        Some(row) if row.member_count() > 0 => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Host: ", Style::default().fg(Color::Cyan)),
                    Span::raw(format!("{}:{}", row.endpoint().ip, row.endpoint().port)),
                ]),
                Line::from(""),
            ];
            lines.extend(
                row.member_tooltip()
                    .lines()
                    .map(|line| Line::from(line.to_string())),
            );
            lines
        }
        Some(_) => vec![Line::from(Span::styled(
            "Nobody is in this room",
            Style::default().fg(Color::DarkGray),
        ))],
        None => vec![Line::from("No rooms")],
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Members"))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
