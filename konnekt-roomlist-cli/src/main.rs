use clap::{Parser, Subcommand};
use konnekt_roomlist_cli::{
    infrastructure::{load_snapshot, write_schema},
    presentation::render_table,
    CliError, Config, LogConfig, Result,
};
use konnekt_roomlist_core::{build_rows, Column, LobbyRowModel, RowFilter, SortOrder};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "konnekt-roomlist")]
#[command(version, about = "Konnekt room list - inspect lobby snapshots")]
struct Cli {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rooms of a snapshot as a table
    List {
        /// Snapshot JSON file (defaults to $ROOMLIST_SNAPSHOT)
        #[arg(short = 's', long)]
        snapshot: Option<PathBuf>,

        /// Column to sort by: game, name, description, members or host
        #[arg(long, default_value = "game")]
        sort: Column,

        /// Sort descending
        #[arg(short = 'd', long)]
        descending: bool,

        /// Only show rooms matching this text
        #[arg(long)]
        search: Option<String>,

        /// Hide rooms nobody is in
        #[arg(long)]
        hide_empty: bool,

        /// Hide rooms at capacity
        #[arg(long)]
        hide_full: bool,
    },

    /// Print what the members of one room are doing
    Members {
        /// Snapshot JSON file (defaults to $ROOMLIST_SNAPSHOT)
        #[arg(short = 's', long)]
        snapshot: Option<PathBuf>,

        /// Room index in snapshot order
        #[arg(short = 'r', long)]
        room: usize,
    },

    /// Write the JSON Schema of the snapshot format
    Schema {
        /// Output directory
        #[arg(short = 'o', long, default_value = ".")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    let log_config = if cli.verbose {
        LogConfig::dev()
    } else {
        LogConfig::default().with_level(config.log_level)
    };
    let log_config = log_config.with_log_file(config.log_file.clone());
    log_config.init()?;

    match cli.command {
        Commands::List {
            snapshot,
            sort,
            descending,
            search,
            hide_empty,
            hide_full,
        } => {
            let path = config.snapshot_or(snapshot).ok_or(CliError::MissingSnapshot)?;
            let order = if descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let filter = RowFilter::default()
                .with_search(search.unwrap_or_default())
                .hiding_empty(hide_empty)
                .hiding_full(hide_full);

            list_rooms(path, sort, order, filter)?;
        }
        Commands::Members { snapshot, room } => {
            let path = config.snapshot_or(snapshot).ok_or(CliError::MissingSnapshot)?;
            show_members(path, room)?;
        }
        Commands::Schema { out } => {
            let path = write_schema(&out)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn list_rooms(path: PathBuf, column: Column, order: SortOrder, filter: RowFilter) -> Result<()> {
    let snapshot = load_snapshot(&path)?;

    let mut model = LobbyRowModel::new();
    model.sort(column, order);
    model.set_filter(filter);
    model.refresh(&snapshot.rooms);

    let visible = model.visible_rows().count();
    if visible == 0 {
        warn!("No rooms match the current filter");
    }
    info!(
        "Showing {} of {} rooms sorted by {} ({})",
        visible,
        model.row_count(),
        column,
        order
    );

    println!("{}", render_table(model.visible_rows()));

    Ok(())
}

fn show_members(path: PathBuf, index: usize) -> Result<()> {
    let snapshot = load_snapshot(&path)?;
    let rows = build_rows(&snapshot.rooms);

    let row = rows
        .get(index)
        .ok_or_else(|| CliError::room_out_of_range(index, rows.len()))?;

    if row.member_count() == 0 {
        info!("Room {} has no members", index);
    }
    println!("{}", row.member_tooltip());

    Ok(())
}
