use crate::presentation::tui::app::App;
use konnekt_roomlist_core::{Column, Decoration};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

pub fn render_rooms(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(Column::ALL.iter().map(|column| column.title().to_string()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .model
        .visible_rows()
        .map(|row| {
            let name = row.cell(Column::RoomName);
            let name_line = if name.decoration().is_some() {
                Line::from(vec![Span::raw("🔒 "), Span::raw(name.display().to_string())])
            } else {
                Line::from(name.display().to_string())
            };

            let members = row.cell(Column::MemberCount);
            // No decoration: keep the terminal's own foreground color
            let members_style = match members.decoration() {
                Some(Decoration::Foreground(color)) => {
                    Style::default().fg(Color::Rgb(color.r, color.g, color.b))
                }
                _ => Style::default(),
            };

            Row::new(vec![
                Line::from(row.cell(Column::GameName).display().to_string()),
                name_line,
                Line::from(row.description().to_string()),
                Line::from(Span::styled(members.display().to_string(), members_style)),
                Line::from(row.cell(Column::Host).display().to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Percentage(28),
        Constraint::Length(9),
        Constraint::Percentage(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Rooms"))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if app.visible_count() > 0 {
        state.select(Some(app.lobby_tab.selected_room()));
    }

    f.render_stateful_widget(table, area, &mut state);
}
