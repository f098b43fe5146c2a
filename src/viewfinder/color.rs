// SPDX-License-Identifier: MPL-2.0
//! 8-bit RGBA color used by the viewfinder configuration and draw surfaces.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Formats as `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Error returned when a color string is not `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': expected #RRGGBB or #RRGGBBAA", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

impl From<Rgba> for tiny_skia::Color {
    fn from(c: Rgba) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<Rgba> for iced::Color {
    fn from(c: Rgba) -> Self {
        iced::Color::from_rgba8(c.r, c.g, c.b, c.a as f32 / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex_as_opaque() {
        let color: Rgba = "#FF8000".parse().expect("valid color");
        assert_eq!(color, Rgba::new(255, 128, 0, 255));
    }

    #[test]
    fn parses_eight_digit_hex_with_alpha() {
        let color: Rgba = "#00000080".parse().expect("valid color");
        assert_eq!(color, Rgba::new(0, 0, 0, 128));
    }

    #[test]
    fn rejects_missing_hash_and_bad_lengths() {
        assert!("FFFFFF".parse::<Rgba>().is_err());
        assert!("#FFF".parse::<Rgba>().is_err());
        assert!("#GG0000".parse::<Rgba>().is_err());
        assert!("#ÿÿÿ".parse::<Rgba>().is_err());
    }

    #[test]
    fn hex_output_parses_back() {
        let color = Rgba::new(18, 52, 86, 120);
        assert_eq!(color.to_hex(), "#12345678");
        assert_eq!(color.to_hex().parse::<Rgba>(), Ok(color));
    }

    #[test]
    fn iced_conversion_keeps_alpha() {
        let color: iced::Color = Rgba::WHITE.with_alpha(0).into();
        assert_eq!(color.a, 0.0);
        assert_eq!(color.r, 1.0);
    }
}
