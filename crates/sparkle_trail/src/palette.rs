//! Colours and the fixed sparkle palette.

use std::fmt;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 8-bit channel values, rounded.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// CSS `rgba(r, g, b, a)` form, as accepted by canvas fill styles.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
    }
}

/// One of the five sparkle colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Indigo.
    Primary,
    /// Pink.
    Secondary,
    /// Teal.
    Accent,
    /// White.
    White,
    /// Amber.
    Gold,
}

impl PaletteColor {
    /// Every palette entry, in draw order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::White,
        Self::Gold,
    ];

    /// Picks a palette entry from a uniform sample in `[0, 1)`.
    ///
    /// Out-of-range samples are clamped onto the first or last entry.
    #[must_use]
    pub fn from_unit(sample: f64) -> Self {
        let last = Self::ALL.len() - 1;
        let index = (sample * Self::ALL.len() as f64).floor();
        if index <= 0.0 {
            Self::ALL[0]
        } else {
            Self::ALL[(index as usize).min(last)]
        }
    }

    /// Opaque colour for this entry.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Primary => Color::from_rgb8(99, 102, 241),
            Self::Secondary => Color::from_rgb8(236, 72, 153),
            Self::Accent => Color::from_rgb8(20, 184, 166),
            Self::White => Color::from_rgb8(255, 255, 255),
            Self::Gold => Color::from_rgb8(251, 191, 36),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_covers_palette() {
        assert_eq!(PaletteColor::from_unit(0.0), PaletteColor::Primary);
        assert_eq!(PaletteColor::from_unit(0.2), PaletteColor::Secondary);
        assert_eq!(PaletteColor::from_unit(0.5), PaletteColor::Accent);
        assert_eq!(PaletteColor::from_unit(0.7), PaletteColor::White);
        assert_eq!(PaletteColor::from_unit(0.999), PaletteColor::Gold);
    }

    #[test]
    fn test_from_unit_clamps() {
        assert_eq!(PaletteColor::from_unit(-3.0), PaletteColor::Primary);
        assert_eq!(PaletteColor::from_unit(1.0), PaletteColor::Gold);
        assert_eq!(PaletteColor::from_unit(f64::NAN), PaletteColor::Primary);
    }

    #[test]
    fn test_css_format() {
        let css = PaletteColor::Primary.color().with_alpha(0.5).to_string();
        assert_eq!(css, "rgba(99, 102, 241, 0.5)");
    }

    #[test]
    fn test_rgb8_round_trip() {
        assert_eq!(PaletteColor::Gold.color().to_rgb8(), [251, 191, 36]);
    }
}
