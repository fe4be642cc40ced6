use clap::Parser;
use konnekt_roomlist_cli::{
    infrastructure::load_snapshot,
    presentation::tui::{self, App, AppEvent, UserAction},
    CliError, Config, LogConfig, Result,
};
use konnekt_roomlist_core::{Column, LobbyRowModel, SortOrder};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "konnekt-roomlist-tui")]
#[command(version, about = "Konnekt room list - interactive lobby browser")]
struct Cli {
    /// Snapshot JSON file (defaults to $ROOMLIST_SNAPSHOT)
    #[arg(short = 's', long)]
    snapshot: Option<PathBuf>,

    /// Initial sort column: game, name, description, members or host
    #[arg(long, default_value = "members")]
    sort: Column,

    /// Sort ascending instead of descending
    #[arg(short = 'a', long)]
    ascending: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // The terminal belongs to the UI, logs go to ROOMLIST_LOG_FILE or nowhere
    LogConfig::tui()
        .with_level(config.log_level)
        .with_log_file(config.log_file.clone())
        .init()?;

    let path = config
        .snapshot_or(cli.snapshot)
        .ok_or(CliError::MissingSnapshot)?;
    let snapshot = load_snapshot(&path)?;

    let order = if cli.ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let mut app = App::new(LobbyRowModel::new(), cli.sort, order);
    app.update_rooms(&snapshot.rooms);

    let mut terminal = tui::setup_terminal()?;
    let result = run_app_loop(&mut terminal, &mut app, &path);
    tui::restore_terminal(terminal)?;

    result
}

fn run_app_loop(terminal: &mut tui::TuiTerminal, app: &mut App, path: &Path) -> Result<()> {
    loop {
        terminal.draw(|f| tui::ui::render(f, app))?;

        match tui::event::read_event()? {
            AppEvent::Key(key) => match app.handle_key(key) {
                Some(UserAction::Quit) => break,
                Some(UserAction::Reload) => match load_snapshot(path) {
                    Ok(snapshot) => {
                        app.update_rooms(&snapshot.rooms);
                        app.lobby_tab
                            .show_message(format!("✓ Reloaded {} rooms", snapshot.rooms.len()));
                    }
                    Err(e) => {
                        tracing::warn!("Reload failed: {}", e);
                        app.lobby_tab.show_message(format!("✗ Reload failed: {}", e));
                    }
                },
                Some(UserAction::CopyEndpoint) => {
                    if let Err(e) = app.copy_selected_endpoint() {
                        tracing::warn!("Copy failed: {}", e);
                    }
                }
                None => {}
            },
            AppEvent::Tick => app.tick(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
