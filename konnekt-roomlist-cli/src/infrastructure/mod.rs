pub mod config;
pub mod error;
pub mod observability;
pub mod snapshot;

pub use config::Config;
pub use error::{CliError, Result};
pub use observability::LogConfig;
pub use snapshot::{load_snapshot, write_schema};
