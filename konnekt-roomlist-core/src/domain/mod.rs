pub mod member;
pub mod pixmap;
pub mod room;

pub use member::Member;
pub use pixmap::{Pixmap, PixmapError};
pub use room::{GameInfo, HostInfo, Room, RoomSnapshot};
