pub mod collation;
pub mod column;
pub mod compare;
pub mod decoration;
pub mod filter;
pub mod model;
pub mod row;
pub mod tooltip;

pub use collation::locale_aware_cmp;
pub use column::{Column, ParseColumnError, SortOrder};
pub use compare::{compare_column, sort_rows};
pub use decoration::{
    decorate_member_count, format_game_icon, format_password_decoration, Color, Decoration,
    GAME_ICON_SIZE, LOCK_ICON_SIZE,
};
pub use filter::RowFilter;
pub use model::LobbyRowModel;
pub use row::{build_rows, Cell, Row, RowBuilder, SortKey, DESCRIPTION_PREFIX};
pub use tooltip::format_member_tooltip;
