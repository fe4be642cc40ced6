use crate::domain::{Member, Pixmap};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Game a room was opened for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameInfo {
    /// Title ID of the preferred game
    #[serde(default)]
    pub title_id: u64,

    /// Display name (may be empty if the host did not report one)
    #[serde(default)]
    pub name: String,

    /// Icon extracted from the game, if the local library has it
    #[serde(default)]
    pub icon: Option<Pixmap>,
}

/// Identity and endpoint of the room host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HostInfo {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub ip: String,

    #[serde(default)]
    pub port: u16,

    /// Token used to verify the host's identity when joining
    #[serde(default)]
    pub verify_uid: String,
}

/// A joinable room as reported by the lobby server
///
/// Read-only input: the model never mutates rooms, it projects them into rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Room {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub game: GameInfo,

    #[serde(default)]
    pub host: HostInfo,

    /// Members in join order
    #[serde(default)]
    pub members: Vec<Member>,

    /// Room capacity. The member count may transiently reach or exceed it.
    #[serde(default)]
    pub max_players: u32,

    #[serde(default)]
    pub has_password: bool,
}

impl Room {
    /// Create an open room with no members
    pub fn new(name: String, game: GameInfo, host: HostInfo, max_players: u32) -> Self {
        Self {
            name,
            game,
            host,
            max_players,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    pub fn with_password(mut self, has_password: bool) -> Self {
        self.has_password = has_password;
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Check if no more members can join
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_players as usize
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One lobby refresh, as delivered by the session layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoomSnapshot {
    #[serde(default)]
    pub rooms: Vec<Room>,
}
