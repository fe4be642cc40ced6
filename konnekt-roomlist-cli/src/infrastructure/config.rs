use std::path::PathBuf;

/// Environment variable naming the default snapshot file
pub const SNAPSHOT_ENV: &str = "ROOMLIST_SNAPSHOT";

/// Environment variable naming the default log level
pub const LOG_LEVEL_ENV: &str = "ROOMLIST_LOG";

/// Environment variable naming a file that receives log output
pub const LOG_FILE_ENV: &str = "ROOMLIST_LOG_FILE";

/// Settings that may come from the environment instead of flags
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub snapshot_path: Option<PathBuf>,
    pub log_level: tracing::Level,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(SNAPSHOT_ENV).ok(),
            std::env::var(LOG_LEVEL_ENV).ok(),
            std::env::var(LOG_FILE_ENV).ok(),
        )
    }

    fn from_vars(
        snapshot: Option<String>,
        log_level: Option<String>,
        log_file: Option<String>,
    ) -> Self {
        Self {
            snapshot_path: snapshot
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(tracing::Level::INFO),
            log_file: log_file
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Snapshot given on the command line wins over the environment
    pub fn snapshot_or(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.snapshot_path.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None, None)
    }
}
