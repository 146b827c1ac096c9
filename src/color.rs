//! Background color selection.
//!
//! The background is a single process-wide choice held by the
//! [`Composer`](crate::Composer) and read by every render performed after it
//! is selected. Colors parse from hex strings or CSS color names via the
//! `palette` crate.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use palette::Srgb;

use crate::error::Error;

// ============================================================================
// BackgroundColor
// ============================================================================

/// The solid color filled behind every composed photo.
///
/// Defaults to pure red, matching the initially highlighted swatch in a
/// fresh session.
///
/// # Example
///
/// ```
/// use poster_composer::BackgroundColor;
///
/// let green: BackgroundColor = "#00ff00".parse().unwrap();
/// assert_eq!(green.to_hex(), "#00ff00");
///
/// // CSS color names work too.
/// let navy: BackgroundColor = "navy".parse().unwrap();
/// assert_eq!(navy.to_hex(), "#000080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor(Srgb<u8>);

impl BackgroundColor {
    /// Creates a color from 8-bit RGB components.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    /// Returns the color as a fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.0.red, self.0.green, self.0.blue, 255])
    }

    /// Returns the color as a `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }

    /// The discrete swatches offered by the selection palette.
    ///
    /// The first entry is the default selection.
    pub fn presets() -> [Self; 8] {
        [
            Self::from_rgb(255, 0, 0),
            Self::from_rgb(0, 255, 0),
            Self::from_rgb(0, 0, 255),
            Self::from_rgb(255, 255, 0),
            Self::from_rgb(255, 165, 0),
            Self::from_rgb(128, 0, 128),
            Self::from_rgb(0, 0, 0),
            Self::from_rgb(255, 255, 255),
        ]
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::from_rgb(255, 0, 0)
    }
}

impl FromStr for BackgroundColor {
    type Err = Error;

    /// Parses a `#rrggbb` hex string (the `#` is optional) or a CSS color
    /// name such as `"red"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(rgb) = s.parse::<Srgb<u8>>() {
            return Ok(Self(rgb));
        }
        palette::named::from_str(&s.to_ascii_lowercase())
            .map(Self)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_red() {
        assert_eq!(BackgroundColor::default().to_hex(), "#ff0000");
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        let a: BackgroundColor = "#00ff00".parse().unwrap();
        let b: BackgroundColor = "00ff00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rgba().0, [0, 255, 0, 255]);
    }

    #[test]
    fn parses_named_colors() {
        let c: BackgroundColor = "blue".parse().unwrap();
        assert_eq!(c.to_hex(), "#0000ff");
    }

    #[test]
    fn rejects_garbage() {
        assert!("not-a-color".parse::<BackgroundColor>().is_err());
        assert!("#12".parse::<BackgroundColor>().is_err());
    }

    #[test]
    fn hex_roundtrip() {
        let c = BackgroundColor::from_rgb(18, 52, 86);
        let parsed: BackgroundColor = c.to_hex().parse().unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn default_is_first_preset() {
        assert_eq!(BackgroundColor::presets()[0], BackgroundColor::default());
    }
}
