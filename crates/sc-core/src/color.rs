//! RGB color with 8-bit channels.
//!
//! Colors can be built from raw bytes, from a small table of named colors,
//! from normalized float triples, or from `#RRGGBB` hex strings. Every
//! fallible constructor returns a [`ColorError`] instead of panicking.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use winnow::prelude::*;
use winnow::token::take_while;

/// Failure to construct a [`Color`] from user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("color '{0}' is not defined")]
    UnknownName(String),

    #[error("color components must be within 0-1, got ({r}, {g}, {b})")]
    OutOfRange { r: f32, g: f32, b: f32 },

    #[error("hex color must be exactly 6 digits, optionally prefixed with '#' (got {0})")]
    HexLength(usize),

    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// Named colors as normalized float triples.
const NAMED_COLORS: &[(&str, [f32; 3])] = &[
    ("RED", [1.0, 0.0, 0.0]),
    ("GREEN", [0.0, 1.0, 0.0]),
    ("BLUE", [0.0, 0.0, 1.0]),
    ("BLACK", [0.0, 0.0, 0.0]),
    ("WHITE", [1.0, 1.0, 1.0]),
];

/// RGB color. Stored as 3 × u8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look up a named color. The name is case-insensitive.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        let [r, g, b] = NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, rgb)| *rgb)
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))?;
        Self::from_float(r, g, b)
    }

    /// Build a color from components in `0.0..=1.0`.
    ///
    /// Channels are `floor(v * 255)`. NaN counts as out of range.
    pub fn from_float(r: f32, g: f32, b: f32) -> Result<Self, ColorError> {
        let in_range = |v: f32| (0.0..=1.0).contains(&v);
        if !(in_range(r) && in_range(g) && in_range(b)) {
            return Err(ColorError::OutOfRange { r, g, b });
        }
        let channel = |v: f32| (v * 255.0).floor() as u8;
        Ok(Self::rgb(channel(r), channel(g), channel(b)))
    }

    /// Parse `RRGGBB`, optionally prefixed with a single `#`. Digits are
    /// case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let len = digits.chars().count();
        if len != 6 {
            return Err(ColorError::HexLength(len));
        }
        let (r, g, b) = (hex_byte, hex_byte, hex_byte)
            .parse(digits)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
        Ok(Self::rgb(r, g, b))
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn hex_byte(input: &mut &str) -> ModalResult<u8> {
    take_while(2, |c: char| c.is_ascii_hexdigit())
        .try_map(|pair: &str| u8::from_str_radix(pair, 16))
        .parse_next(input)
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts `#RRGGBB`, a color name, or bare `RRGGBB`.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        Self::from_name(s).or_else(|err| {
            if s.len() == 6 && s.bytes().all(|c| c.is_ascii_hexdigit()) {
                Self::from_hex(s)
            } else {
                Err(err)
            }
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
