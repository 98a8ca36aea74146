// SPDX-License-Identifier: MPL-2.0
//! Hex color parsing and alpha-channel color values.

use super::newtypes::OpacityPercent;
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color parsed from `#rgb` or `#rrggbb` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a string is not a 3- or 6-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHexColor(pub String);

impl fmt::Display for InvalidHexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for InvalidHexColor {}

impl HexColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (case-insensitive).
    ///
    /// Short form digits are doubled, so `#f80` is `#ff8800`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHexColor`] for any other length or a non-hex digit.
    pub fn parse(input: &str) -> Result<Self, InvalidHexColor> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let invalid = || InvalidHexColor(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = nibble * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Combines this color with an opacity into an alpha-channel color.
    #[must_use]
    pub fn with_opacity(self, opacity: OpacityPercent) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: opacity.as_alpha(),
        }
    }
}

impl FromStr for HexColor {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An RGB color with an alpha channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    /// Formats as a CSS `rgba()` function, e.g. `rgba(255, 255, 255, 0.5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alpha is always a whole percentage, two decimals are exact.
        let alpha = format!("{:.2}", self.a);
        let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Converts a hex color string and opacity percentage into an [`Rgba`].
///
/// Unparseable colors fall back to black so a bad host payload never
/// breaks styling.
#[must_use]
pub fn hex_to_rgba(hex: &str, opacity: OpacityPercent) -> Rgba {
    HexColor::parse(hex)
        .unwrap_or(HexColor::BLACK)
        .with_opacity(opacity)
}
