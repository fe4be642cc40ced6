use crate::presentation::tui::app::App;
use konnekt_roomlist_core::{Column, SortOrder};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let (sort_column, sort_order) = app.sort_state();
    let arrow = match sort_order {
        SortOrder::Ascending => "▲",
        SortOrder::Descending => "▼",
    };

    let titles: Vec<String> = Column::ALL
        .iter()
        .map(|column| {
            if *column == sort_column {
                format!("{} {}", column.title(), arrow)
            } else {
                column.title().to_string()
            }
        })
        .collect();

    let selected = Column::ALL
        .iter()
        .position(|column| *column == sort_column)
        .unwrap_or(0);

    let title = format!(
        "Lobby ({} of {} rooms)",
        app.visible_count(),
        app.model.row_count()
    );

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}
