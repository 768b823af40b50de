// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{OverlayError, Result};

/// Color type for visualization.
///
/// Serialized as a lowercase `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Red, used for `person`.
    pub const RED: Self = Self(0xef, 0x44, 0x44); // #ef4444
    /// Blue, used for `car`.
    pub const BLUE: Self = Self(0x3b, 0x82, 0xf6); // #3b82f6
    /// Amber, used for `dog`.
    pub const AMBER: Self = Self(0xf5, 0x9e, 0x0b); // #f59e0b
    /// Violet, used for `cat`.
    pub const VIOLET: Self = Self(0x8b, 0x5c, 0xf6); // #8b5cf6
    /// Emerald, used for `package`.
    pub const EMERALD: Self = Self(0x10, 0xb9, 0x81); // #10b981
    /// Gray fallback for unrecognized labels.
    pub const GRAY: Self = Self(0x6b, 0x72, 0x80); // #6b7280
    /// White, used for badge text.
    pub const WHITE: Self = Self(255, 255, 255);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Parse a `#rgb` or `#rrggbb` hex color (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::InvalidColor`] if the string is not a hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || OverlayError::InvalidColor(format!("'{hex}' is not a #rgb or #rrggbb color"));

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Stroke color of a detection box.
///
/// Hex strings are parsed into [`BoxColor::Rgb`]; any other color string the
/// host renderer understands (`"red"`, `"rgb(0 0 0)"`, `"#ff000080"`) is kept
/// verbatim as [`BoxColor::Css`]. Both serialize back to a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoxColor {
    Rgb(Color),
    Css(String),
}

impl BoxColor {
    /// Interpret a color string, falling back to passing it through unchanged.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Color::from_hex(s).map_or_else(|_| Self::Css(s.to_owned()), Self::Rgb)
    }

    /// The RGB value, if the color was a hex string.
    #[must_use]
    pub const fn rgb(&self) -> Option<Color> {
        match self {
            Self::Rgb(color) => Some(*color),
            Self::Css(_) => None,
        }
    }
}

impl From<Color> for BoxColor {
    fn from(color: Color) -> Self {
        Self::Rgb(color)
    }
}

impl fmt::Display for BoxColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(color) => write!(f, "{color}"),
            Self::Css(css) => f.write_str(css),
        }
    }
}

impl FromStr for BoxColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for BoxColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BoxColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Object classes with a dedicated box color.
///
/// Labels are matched case-insensitively; anything else falls into
/// [`ObjectClass::Other`], which always resolves to [`Color::GRAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    Person,
    Car,
    Dog,
    Cat,
    Package,
    Other,
}

impl ObjectClass {
    /// Classify a detection label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "person" => Self::Person,
            "car" => Self::Car,
            "dog" => Self::Dog,
            "cat" => Self::Cat,
            "package" => Self::Package,
            _ => Self::Other,
        }
    }

    /// Box stroke color for this class.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Person => Color::RED,
            Self::Car => Color::BLUE,
            Self::Dog => Color::AMBER,
            Self::Cat => Color::VIOLET,
            Self::Package => Color::EMERALD,
            Self::Other => Color::GRAY,
        }
    }
}

/// Resolve the stroke color for a detection.
///
/// An explicit override always wins, whatever its format; otherwise the
/// label decides.
#[must_use]
pub fn resolve_box_color(label: &str, color: Option<&BoxColor>) -> BoxColor {
    color.map_or_else(
        || BoxColor::Rgb(ObjectClass::from_label(label).color()),
        Clone::clone,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ef4444").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("EF4444").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::GRAY.to_hex(), "#6b7280");
        assert_eq!(Color::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_serde_hex_string() {
        let json = serde_json::to_string(&Color::BLUE).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::BLUE);
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_label_lookup_is_case_insensitive() {
        assert_eq!(ObjectClass::from_label("Person"), ObjectClass::Person);
        assert_eq!(ObjectClass::from_label("PERSON").color(), Color::RED);
        assert_eq!(ObjectClass::from_label("truck"), ObjectClass::Other);
    }

    #[test]
    fn test_resolve_box_color() {
        assert_eq!(resolve_box_color("person", None).to_string(), "#ef4444");
        assert_eq!(resolve_box_color("car", None).to_string(), "#3b82f6");
        assert_eq!(resolve_box_color("dog", None).to_string(), "#f59e0b");
        assert_eq!(resolve_box_color("cat", None).to_string(), "#8b5cf6");
        assert_eq!(resolve_box_color("package", None).to_string(), "#10b981");
        assert_eq!(resolve_box_color("bicycle", None).to_string(), "#6b7280");
        assert_eq!(resolve_box_color("", None), BoxColor::Rgb(Color::GRAY));

        let custom = BoxColor::Rgb(Color::new(1, 2, 3));
        assert_eq!(resolve_box_color("person", Some(&custom)), custom);
        let named = BoxColor::parse("red");
        assert_eq!(resolve_box_color("car", Some(&named)).to_string(), "red");
    }

    #[test]
    fn test_box_color_passes_through_non_hex() {
        assert_eq!(BoxColor::parse("#EF4444"), BoxColor::Rgb(Color::RED));
        assert_eq!(BoxColor::parse("red"), BoxColor::Css("red".into()));
        assert_eq!(BoxColor::parse("#ff000080").rgb(), None);
        assert_eq!(BoxColor::parse("rgb(0, 0, 0)").to_string(), "rgb(0, 0, 0)");

        let back: BoxColor = serde_json::from_str("\"rgb(1 2 3)\"").unwrap();
        assert_eq!(back, BoxColor::Css("rgb(1 2 3)".into()));
        assert_eq!(serde_json::to_string(&back).unwrap(), "\"rgb(1 2 3)\"");
        assert_eq!(serde_json::to_string(&BoxColor::Rgb(Color::BLUE)).unwrap(), "\"#3b82f6\"");
    }
}
