pub mod table;

#[cfg(feature = "tui")]
pub mod tui;

pub use table::render_table;
