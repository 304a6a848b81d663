//! Display colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color written as `#RRGGBB`, `#RRGGBBAA` or a basic color name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(s: impl Into<String>) -> Self {
        Color(s.into())
    }

    /// Convert to an RGBA tuple, or `None` if the color is not recognized.
    pub fn to_rgba(&self) -> Option<(u8, u8, u8, u8)> {
        let s = self.0.trim();
        if s.starts_with('#') {
            parse_hex_color(s)
        } else {
            named_color(s)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.to_rgba().is_some()
    }

    /// Normalized `#rrggbb` form (alpha appended only when not opaque).
    pub fn to_hex(&self) -> Option<String> {
        let (r, g, b, a) = self.to_rgba()?;
        Some(if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color(s)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::new(s)
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();

    match s.len() {
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<(u8, u8, u8, u8)> {
    let rgba = match name.to_lowercase().as_str() {
        "transparent" => (0, 0, 0, 0),
        "black" => (0, 0, 0, 255),
        "white" => (255, 255, 255, 255),
        "red" => (255, 0, 0, 255),
        "green" => (0, 128, 0, 255),
        "blue" => (0, 0, 255, 255),
        "yellow" => (255, 255, 0, 255),
        "cyan" => (0, 255, 255, 255),
        "magenta" => (255, 0, 255, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        "lightgray" | "lightgrey" => (211, 211, 211, 255),
        _ => return None,
    };
    Some(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::from("#FF5500").to_rgba(), Some((255, 85, 0, 255)));
        assert_eq!(Color::from("#00000080").to_rgba(), Some((0, 0, 0, 128)));
        assert_eq!(Color::from("orange").to_rgba(), Some((255, 165, 0, 255)));
        assert_eq!(Color::from("Grey").to_rgba(), Some((128, 128, 128, 255)));
    }

    #[test]
    fn test_invalid_colors() {
        assert!(!Color::from("#12345").is_valid());
        assert!(!Color::from("#GGGGGG").is_valid());
        assert!(!Color::from("chartreuse-ish").is_valid());
        assert!(!Color::from("#ééé").is_valid());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::from("red").to_hex().as_deref(), Some("#ff0000"));
        assert_eq!(
            Color::from("#D7302780").to_hex().as_deref(),
            Some("#d7302780")
        );
    }
}
