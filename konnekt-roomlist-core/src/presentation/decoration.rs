use crate::domain::Pixmap;
use crate::traits::{IconTheme, LOCK_ICON, PLACEHOLDER_GAME_ICON};
use serde::{Deserialize, Serialize};

/// Edge length of game icons in the list
pub const GAME_ICON_SIZE: u32 = 32;

/// Edge length of the password lock glyph
pub const LOCK_ICON_SIZE: u32 = 16;

/// Fill of the square shown when neither icon nor placeholder is available
const BLANK_ICON_FILL: [u8; 4] = [0, 0, 0, 255];

/// Foreground color override for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Room is at or over capacity
    pub const FULL: Color = Color::rgb(255, 48, 32);
    /// One seat left
    pub const NEAR_FULL: Color = Color::rgb(255, 140, 32);
    /// Nobody in the room
    pub const EMPTY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Non-text visual attribute of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Icon(Pixmap),
    Foreground(Color),
}

/// Pick the member count color for a room
///
/// `None` means "no override": the view keeps its normal text color.
pub fn decorate_member_count(members_count: usize, max_players: u32) -> Option<Color> {
    let max_players = max_players as usize;

    // max_players == 0 always lands here, so the near-full check cannot underflow
    if members_count >= max_players {
        Some(Color::FULL)
    } else if members_count == 0 {
        // An empty single-seat room reads as empty, not as one seat left
        Some(Color::EMPTY)
    } else if members_count == max_players - 1 {
        Some(Color::NEAR_FULL)
    } else {
        None
    }
}

/// Resolve the icon shown next to the game name, at display size
pub fn format_game_icon(icon: Option<&Pixmap>, theme: &dyn IconTheme) -> Pixmap {
    let source = match icon.filter(|icon| !icon.is_null()) {
        Some(icon) => Some(icon.clone()),
        None => theme
            .icon(PLACEHOLDER_GAME_ICON, GAME_ICON_SIZE)
            .filter(|icon| !icon.is_null()),
    };

    match source {
        Some(icon) => icon.scaled_to_fit(GAME_ICON_SIZE),
        None => Pixmap::filled(GAME_ICON_SIZE, GAME_ICON_SIZE, BLANK_ICON_FILL),
    }
}

/// Lock glyph for password protected rooms, nothing otherwise
pub fn format_password_decoration(has_password: bool, theme: &dyn IconTheme) -> Option<Pixmap> {
    if !has_password {
        return None;
    }

    let glyph = theme
        .icon(LOCK_ICON, LOCK_ICON_SIZE)
        .filter(|icon| !icon.is_null())
        .map(|icon| icon.scaled_to_fit(LOCK_ICON_SIZE))
        .unwrap_or_else(|| Pixmap::filled(LOCK_ICON_SIZE, LOCK_ICON_SIZE, BLANK_ICON_FILL));

    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NoIconTheme;

    /// Theme that knows every icon, drawn as a solid white square
    struct WhiteTheme;

    impl IconTheme for WhiteTheme {
        fn icon(&self, _name: &str, size: u32) -> Option<Pixmap> {
            Some(Pixmap::filled(size, size, [255, 255, 255, 255]))
        }
    }

    #[test]
    fn test_full_room() {
        assert_eq!(decorate_member_count(4, 4), Some(Color::FULL));
        assert_eq!(decorate_member_count(6, 4), Some(Color::FULL));
    }

    #[test]
    fn test_near_full_room() {
        assert_eq!(decorate_member_count(3, 4), Some(Color::NEAR_FULL));
        assert_eq!(decorate_member_count(1, 2), Some(Color::NEAR_FULL));
    }

    #[test]
    fn test_empty_room() {
        for max_players in 1..64 {
            assert_eq!(decorate_member_count(0, max_players), Some(Color::EMPTY));
        }
    }

    #[test]
    fn test_no_override_in_between() {
        assert_eq!(decorate_member_count(2, 8), None);
        assert_eq!(decorate_member_count(1, 3), None);
    }

    #[test]
    fn test_zero_capacity_is_always_full() {
        for count in 0..10 {
            assert_eq!(decorate_member_count(count, 0), Some(Color::FULL));
        }
    }

    #[test]
    fn test_game_icon_passes_through_and_scales() {
        let icon = Pixmap::filled(64, 64, [1, 2, 3, 255]);
        let shown = format_game_icon(Some(&icon), &WhiteTheme);

        assert_eq!((shown.width(), shown.height()), (32, 32));
        assert_eq!(shown.pixel(0, 0), Some([1, 2, 3, 255]));
    }

    #[test]
    fn test_missing_game_icon_uses_placeholder() {
        let shown = format_game_icon(None, &WhiteTheme);

        assert_eq!(shown.pixel(5, 5), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_null_game_icon_uses_placeholder() {
        let shown = format_game_icon(Some(&Pixmap::default()), &WhiteTheme);

        assert_eq!(shown.pixel(5, 5), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_no_icon_and_no_theme_gives_blank_square() {
        let shown = format_game_icon(None, &NoIconTheme);

        assert_eq!((shown.width(), shown.height()), (32, 32));
        assert_eq!(shown.pixel(31, 31), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_password_decoration() {
        assert_eq!(format_password_decoration(false, &WhiteTheme), None);

        let lock = format_password_decoration(true, &WhiteTheme).unwrap();
        assert_eq!((lock.width(), lock.height()), (16, 16));
        assert_eq!(lock.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_password_decoration_without_theme() {
        let lock = format_password_decoration(true, &NoIconTheme).unwrap();

        assert_eq!((lock.width(), lock.height()), (16, 16));
    }
}
