use crate::domain::Pixmap;

/// Themed icon used in place of a missing game icon
pub const PLACEHOLDER_GAME_ICON: &str = "chip";

/// Themed icon marking password protected rooms
pub const LOCK_ICON: &str = "lock";

/// Trait that hosting views implement to resolve named icons
pub trait IconTheme {
    /// Look up `name` rendered at `size`×`size` pixels
    ///
    /// Returns `None` when the theme has no such icon.
    fn icon(&self, name: &str, size: u32) -> Option<Pixmap>;
}

/// Theme without any icons (headless hosts, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIconTheme;

impl IconTheme for NoIconTheme {
    fn icon(&self, _name: &str, _size: u32) -> Option<Pixmap> {
        None
    }
}

impl<T: IconTheme + ?Sized> IconTheme for &T {
    fn icon(&self, name: &str, size: u32) -> Option<Pixmap> {
        (**self).icon(name, size)
    }
}

impl<T: IconTheme + ?Sized> IconTheme for Box<T> {
    fn icon(&self, name: &str, size: u32) -> Option<Pixmap> {
        (**self).icon(name, size)
    }
}
