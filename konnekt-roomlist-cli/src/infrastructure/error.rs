use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema generation failed: {0}")]
    SchemaGeneration(String),

    #[error("Invalid schema directory: {path}")]
    InvalidSchemaDirectory { path: PathBuf },

    #[error("No snapshot given (pass --snapshot or set ROOMLIST_SNAPSHOT)")]
    MissingSnapshot,

    #[error("Room index {index} out of range (snapshot has {len} rooms)")]
    RoomIndexOutOfRange { index: usize, len: usize },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    pub fn invalid_directory(path: PathBuf) -> Self {
        CliError::InvalidSchemaDirectory { path }
    }

    pub fn room_out_of_range(index: usize, len: usize) -> Self {
        CliError::RoomIndexOutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
