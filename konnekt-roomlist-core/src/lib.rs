pub mod domain;
pub mod presentation;
pub mod traits;

pub use domain::{GameInfo, HostInfo, Member, Pixmap, PixmapError, Room, RoomSnapshot};
pub use presentation::{
    build_rows, compare_column, decorate_member_count, format_game_icon, format_member_tooltip,
    format_password_decoration, sort_rows, Cell, Color, Column, Decoration, LobbyRowModel,
    ParseColumnError, Row, RowBuilder, RowFilter, SortKey, SortOrder,
};
pub use traits::{IconTheme, NoIconTheme};
