use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Displayable, sortable facet of a lobby row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    GameName,
    RoomName,
    RoomDescription,
    MemberCount,
    Host,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 5] = [
        Column::GameName,
        Column::RoomName,
        Column::RoomDescription,
        Column::MemberCount,
        Column::Host,
    ];

    pub fn next(&self) -> Self {
        match self {
            Column::GameName => Column::RoomName,
            Column::RoomName => Column::RoomDescription,
            Column::RoomDescription => Column::MemberCount,
            Column::MemberCount => Column::Host,
            Column::Host => Column::GameName,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Column::GameName => Column::Host,
            Column::RoomName => Column::GameName,
            Column::RoomDescription => Column::RoomName,
            Column::MemberCount => Column::RoomDescription,
            Column::Host => Column::MemberCount,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Column::GameName => "Game",
            Column::RoomName => "Room",
            Column::RoomDescription => "Description",
            Column::MemberCount => "Players",
            Column::Host => "Host",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown column '{0}' (expected game, name, description, members or host)")]
pub struct ParseColumnError(pub String);

impl FromStr for Column {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "game" => Ok(Column::GameName),
            "name" | "room" => Ok(Column::RoomName),
            "description" => Ok(Column::RoomDescription),
            "members" | "players" => Ok(Column::MemberCount),
            "host" => Ok(Column::Host),
            _ => Err(ParseColumnError(s.to_string())),
        }
    }
}

/// Direction of a column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}
