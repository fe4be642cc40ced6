pub mod infrastructure;
pub mod presentation;

pub use infrastructure::{CliError, Config, LogConfig, Result};
