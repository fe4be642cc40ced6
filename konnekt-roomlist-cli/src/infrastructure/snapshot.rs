use crate::infrastructure::{CliError, Result};
use konnekt_roomlist_core::RoomSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the exported snapshot schema
pub const SCHEMA_FILE_NAME: &str = "room_snapshot.schema.json";

/// Read one lobby refresh from a JSON file
pub fn load_snapshot(path: &Path) -> Result<RoomSnapshot> {
    let contents = fs::read_to_string(path)?;
    let snapshot: RoomSnapshot = serde_json::from_str(&contents)?;

    tracing::info!(
        path = %path.display(),
        rooms = snapshot.rooms.len(),
        "Loaded room snapshot"
    );

    Ok(snapshot)
}

/// Write the JSON Schema of the snapshot format into `dir`
pub fn write_schema(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(CliError::invalid_directory(dir.to_path_buf()));
    }

    let schema = schemars::schema_for!(RoomSnapshot);
    let json = serde_json::to_string_pretty(&schema)
        .map_err(|e| CliError::SchemaGeneration(e.to_string()))?;

    let path = dir.join(SCHEMA_FILE_NAME);
    fs::write(&path, json)?;

    tracing::info!(path = %path.display(), "Wrote snapshot schema");

    Ok(path)
}
