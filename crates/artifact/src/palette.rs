//! Deterministic fallback colors for chart entries that carry none.

use once_cell::sync::Lazy;
use sheaf_types::Color;

static FALLBACK_PALETTE: Lazy<[Color; 10]> = Lazy::new(|| {
    [
        Color::rgb(0x1f, 0x77, 0xb4),
        Color::rgb(0xff, 0x7f, 0x0e),
        Color::rgb(0x2c, 0xa0, 0x2c),
        Color::rgb(0xd6, 0x27, 0x28),
        Color::rgb(0x94, 0x67, 0xbd),
        Color::rgb(0x8c, 0x56, 0x4b),
        Color::rgb(0xe3, 0x77, 0xc2),
        Color::rgb(0x7f, 0x7f, 0x7f),
        Color::rgb(0xbc, 0xbd, 0x22),
        Color::rgb(0x17, 0xbe, 0xcf),
    ]
});

/// Color for the entry at `index`, cycling through the palette. Purely
/// index-based so repeated renders of the same input color identically.
pub fn fallback_color(index: usize) -> Color {
    FALLBACK_PALETTE[index % FALLBACK_PALETTE.len()].clone()
}

/// The entry's own color when it has one, the palette otherwise.
pub fn entry_color(own: Option<&Color>, index: usize) -> Color {
    own.cloned().unwrap_or_else(|| fallback_color(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_deterministically() {
        assert_eq!(fallback_color(0), fallback_color(10));
        assert_eq!(fallback_color(3), fallback_color(13));
        assert_ne!(fallback_color(0), fallback_color(1));
    }

    #[test]
    fn own_color_wins() {
        let own = Color::rgb(1, 2, 3);
        assert_eq!(entry_color(Some(&own), 4), own);
        assert_eq!(entry_color(None, 4), fallback_color(4));
    }
}
