use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user currently inside a room
///
/// Value type: built once from the session snapshot and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Member {
    /// Account name (may be empty for unregistered users)
    #[serde(default)]
    username: String,
    /// Name chosen for this room
    nickname: String,
    /// Title ID of the game the member is running (0 = none)
    #[serde(default)]
    title_id: u64,
    /// Name of the game the member is running (empty = not playing)
    #[serde(default)]
    game_name: String,
}

impl Member {
    pub fn new(username: String, nickname: String, title_id: u64, game_name: String) -> Self {
        Self {
            username,
            nickname,
            title_id,
            game_name,
        }
    }

    /// Member without an account who is not running a game
    pub fn anonymous(nickname: String) -> Self {
        Self {
            nickname,
            ..Default::default()
        }
    }

    // Getters

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn title_id(&self) -> u64 {
        self.title_id
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// Check if the member is running a game
    pub fn is_playing(&self) -> bool {
        !self.game_name.is_empty()
    }

    /// Name shown in the lobby: `nickname`, or `nickname (username)` when the
    /// account name differs
    pub fn display_name(&self) -> String {
        if self.username.is_empty() || self.username == self.nickname {
            self.nickname.clone()
        } else {
            format!("{} ({})", self.nickname, self.username)
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
