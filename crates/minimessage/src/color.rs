//! Color values and the named-color registry.
//!
//! Colors are stored as normalized RGB triples (each channel in `0.0..=1.0`)
//! so gradient interpolation can work directly on the channels. Hex encoding
//! quantizes to 8 bits per channel.
//!
//! Supported color tokens:
//!
//! - **Hex**: `#RRGGBB` (hex digits are case-insensitive)
//! - **Named**: the sixteen classic chat colors (`red`, `dark_blue`,
//!   `light_purple`, ...) plus the `grey`/`dark_grey` spellings

use std::fmt;

use phf::phf_map;

use crate::error::ColorParseError;

/// A normalized RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel (0.0-1.0).
    pub r: f64,
    /// Green channel (0.0-1.0).
    pub g: f64,
    /// Blue channel (0.0-1.0).
    pub b: f64,
}

impl Color {
    /// Create a color from normalized channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 8-bit channels, rounding to the nearest step.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            Self::channel_to_u8(self.r),
            Self::channel_to_u8(self.g),
            Self::channel_to_u8(self.b),
        )
    }

    fn channel_to_u8(c: f64) -> u8 {
        (c.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Encode as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Snap every channel to the nearest 8-bit step.
    ///
    /// Equivalent to a `to_hex` / `from_hex` round-trip.
    pub fn quantize(&self) -> Self {
        let (r, g, b) = self.to_rgb8();
        Self::from_rgb8(r, g, b)
    }

    /// Parse a color token.
    ///
    /// Tokens starting with `#` are decoded as hex; anything else is looked
    /// up in the named-color registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimessage::Color;
    ///
    /// let white = Color::parse("white").unwrap();
    /// let hex = Color::parse("#FFFFFF").unwrap();
    /// assert_eq!(white, hex);
    /// assert!(Color::parse("#fff").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, ColorParseError> {
        if token.starts_with('#') {
            Self::from_hex(token)
        } else {
            Self::from_name(token)
        }
    }

    /// Decode a `#RRGGBB` hex string.
    pub fn from_hex(token: &str) -> Result<Self, ColorParseError> {
        let Some(hex) = token.strip_prefix('#') else {
            return Err(ColorParseError::InvalidHex(token.to_string()));
        };

        let digits: Vec<char> = hex.chars().collect();
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidHex(token.to_string()));
        }

        let pair = |i: usize| -> Result<u8, ColorParseError> {
            let high = Self::parse_hex_digit(digits[i])
                .ok_or_else(|| ColorParseError::InvalidHex(token.to_string()))?;
            let low = Self::parse_hex_digit(digits[i + 1])
                .ok_or_else(|| ColorParseError::InvalidHex(token.to_string()))?;
            Ok(high * 16 + low)
        };

        Ok(Self::from_rgb8(pair(0)?, pair(2)?, pair(4)?))
    }

    fn parse_hex_digit(c: char) -> Option<u8> {
        c.to_digit(16).map(|d| d as u8)
    }

    /// Resolve a color name against the registry.
    ///
    /// The exact registry key is tried first, then a case-insensitive match
    /// against each entry's canonical name.
    pub fn from_name(name: &str) -> Result<Self, ColorParseError> {
        NamedColor::lookup(name)
            .map(NamedColor::color)
            .ok_or_else(|| ColorParseError::UnknownName(name.to_string()))
    }

    /// The canonical name of this color, if it is exactly a registry color.
    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .values()
            .find(|named| named.color() == *self)
            .map(|named| named.name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str(&self.to_hex()),
        }
    }
}

/// An entry in the named-color registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedColor {
    /// Canonical display name.
    pub name: &'static str,
    rgb: [u8; 3],
}

impl NamedColor {
    /// The color value of this entry.
    pub fn color(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::from_rgb8(r, g, b)
    }

    /// Find a registry entry by key, falling back to a case-insensitive
    /// match on the canonical name.
    pub fn lookup(name: &str) -> Option<&'static NamedColor> {
        if let Some(named) = NAMED_COLORS.get(name) {
            return Some(named);
        }

        NAMED_COLORS
            .values()
            .find(|named| named.name.eq_ignore_ascii_case(name))
    }

    /// Returns true if `name` resolves to a registry color.
    pub fn is_known(name: &str) -> bool {
        Self::lookup(name).is_some()
    }
}

const fn named(name: &'static str, rgb: [u8; 3]) -> NamedColor {
    NamedColor { name, rgb }
}

/// Registry of named colors, keyed by lowercase name.
///
/// Alias keys point at the entry of their canonical spelling.
static NAMED_COLORS: phf::Map<&'static str, NamedColor> = phf_map! {
    "black" => named("black", [0x00, 0x00, 0x00]),
    "dark_blue" => named("dark_blue", [0x00, 0x00, 0xaa]),
    "dark_green" => named("dark_green", [0x00, 0xaa, 0x00]),
    "dark_aqua" => named("dark_aqua", [0x00, 0xaa, 0xaa]),
    "dark_red" => named("dark_red", [0xaa, 0x00, 0x00]),
    "dark_purple" => named("dark_purple", [0xaa, 0x00, 0xaa]),
    "gold" => named("gold", [0xff, 0xaa, 0x00]),
    "gray" => named("gray", [0xaa, 0xaa, 0xaa]),
    "grey" => named("gray", [0xaa, 0xaa, 0xaa]),
    "dark_gray" => named("dark_gray", [0x55, 0x55, 0x55]),
    "dark_grey" => named("dark_gray", [0x55, 0x55, 0x55]),
    "blue" => named("blue", [0x55, 0x55, 0xff]),
    "green" => named("green", [0x55, 0xff, 0x55]),
    "aqua" => named("aqua", [0x55, 0xff, 0xff]),
    "red" => named("red", [0xff, 0x55, 0x55]),
    "light_purple" => named("light_purple", [0xff, 0x55, 0xff]),
    "yellow" => named("yellow", [0xff, 0xff, 0x55]),
    "white" => named("white", [0xff, 0xff, 0xff]),
};
