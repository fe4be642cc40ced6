use crate::domain::{HostInfo, Member, Room};
use crate::presentation::collation::locale_aware_cmp;
use crate::presentation::decoration::{
    decorate_member_count, format_game_icon, format_password_decoration, Decoration,
};
use crate::presentation::tooltip::format_member_tooltip;
use crate::presentation::Column;
use crate::traits::{IconTheme, NoIconTheme};
use std::cmp::Ordering;

/// Constant label in front of every room description
pub const DESCRIPTION_PREFIX: &str = "Description: ";

/// Value a column is sorted by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Text(String),
    Count(usize),
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => locale_aware_cmp(a, b),
            (SortKey::Count(a), SortKey::Count(b)) => a.cmp(b),
            // A column never mixes key kinds; rank them anyway to stay total
            (SortKey::Count(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Count(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One displayable cell of a row
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    display: String,
    decoration: Option<Decoration>,
    sort_key: SortKey,
}

impl Cell {
    fn text(display: String, sort_text: String) -> Self {
        Self {
            display,
            decoration: None,
            sort_key: SortKey::Text(sort_text),
        }
    }

    fn with_decoration(mut self, decoration: Option<Decoration>) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn decoration(&self) -> Option<&Decoration> {
        self.decoration.as_ref()
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }
}

/// Display-ready projection of one room
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    game: Cell,
    name: Cell,
    description: Cell,
    members: Cell,
    host: Cell,
    description_text: String,
    member_tooltip: String,
    member_names: Vec<String>,
    member_count: usize,
    max_players: u32,
    title_id: u64,
    endpoint: HostInfo,
}

impl Row {
    pub fn cell(&self, column: Column) -> &Cell {
        match column {
            Column::GameName => &self.game,
            Column::RoomName => &self.name,
            Column::RoomDescription => &self.description,
            Column::MemberCount => &self.members,
            Column::Host => &self.host,
        }
    }

    /// Room description without the display prefix
    pub fn description(&self) -> &str {
        &self.description_text
    }

    /// Text shown when the room is expanded
    pub fn member_tooltip(&self) -> &str {
        &self.member_tooltip
    }

    /// Display names of the members, in join order
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }

    pub fn member_count(&self) -> usize {
        self.member_count
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    pub fn is_full(&self) -> bool {
        self.member_count >= self.max_players as usize
    }

    pub fn title_id(&self) -> u64 {
        self.title_id
    }

    /// Where a join request for this room has to go
    pub fn endpoint(&self) -> &HostInfo {
        &self.endpoint
    }
}

/// Projects rooms into rows, resolving icons through a theme
pub struct RowBuilder<'a> {
    theme: &'a dyn IconTheme,
}

impl<'a> RowBuilder<'a> {
    pub fn new(theme: &'a dyn IconTheme) -> Self {
        Self { theme }
    }

    pub fn build(&self, room: &Room) -> Row {
        let member_count = room.members.len();

        let game = Cell::text(room.game.name.clone(), room.game.name.clone()).with_decoration(
            Some(Decoration::Icon(format_game_icon(
                room.game.icon.as_ref(),
                self.theme,
            ))),
        );

        let name = Cell::text(room.name.clone(), room.name.clone()).with_decoration(
            format_password_decoration(room.has_password, self.theme).map(Decoration::Icon),
        );

        let description = Cell::text(
            format!("{}{}", DESCRIPTION_PREFIX, room.description),
            room.description.clone(),
        );

        let members = Cell {
            display: format!("{} / {} ", member_count, room.max_players),
            decoration: decorate_member_count(member_count, room.max_players)
                .map(Decoration::Foreground),
            sort_key: SortKey::Count(member_count),
        };

        let host = Cell::text(room.host.username.clone(), room.host.username.clone());

        Row {
            game,
            name,
            description,
            members,
            host,
            description_text: room.description.clone(),
            member_tooltip: format_member_tooltip(&room.members),
            member_names: room.members.iter().map(Member::display_name).collect(),
            member_count,
            max_players: room.max_players,
            title_id: room.game.title_id,
            endpoint: room.host.clone(),
        }
    }

    pub fn build_rows(&self, rooms: &[Room]) -> Vec<Row> {
        rooms.iter().map(|room| self.build(room)).collect()
    }
}

/// Build rows for a lobby refresh without an icon theme
pub fn build_rows(rooms: &[Room]) -> Vec<Row> {
    RowBuilder::new(&NoIconTheme).build_rows(rooms)
}
