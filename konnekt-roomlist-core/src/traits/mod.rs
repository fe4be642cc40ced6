pub mod icon_theme;

pub use icon_theme::{IconTheme, NoIconTheme, LOCK_ICON, PLACEHOLDER_GAME_ICON};
