use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value held by the skin variable namespace, or produced by resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Assigned but empty; exists, and is falsy.
    None,
    Bool(bool),
    Number(f64),
    Text(String),
    Color(Color),
    Borders(Borders),
    Padding(Padding),
    Frame(Frame),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_borders(&self) -> Option<&Borders> {
        match self {
            Self::Borders(b) => Some(b),
            _ => None,
        }
    }

    /// Truthiness used for flag variables such as `button_tile`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::None => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::Color(_) | Self::Borders(_) | Self::Padding(_) | Self::Frame(_) => true,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Borders> for Value {
    fn from(value: Borders) -> Self {
        Self::Borders(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Padding(Padding),
    Borders(Borders),
}

// Strings that parse as hex colors become `Value::Color`.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Null => Self::None,
            RawValue::Bool(b) => Self::Bool(b),
            RawValue::Number(n) => Self::Number(n),
            RawValue::Text(s) => match s.parse::<Color>() {
                Ok(color) => Self::Color(color),
                Err(_) => Self::Text(s),
            },
            RawValue::Padding(p) => Self::Padding(p),
            RawValue::Borders(b) => Self::Borders(b),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected #rgb, #rgba, #rrggbb or #rrggbbaa")
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError);
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 0x11);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

        let parsed = match hex.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(0xff)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(0xff)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(ParseColorError),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::new(r, g, b, a)),
            _ => Err(ParseColorError),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Left, top, right, bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding(pub f64, pub f64, pub f64, pub f64);

/// Frame borders with optional extra padding per side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Borders {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    #[serde(default)]
    pub pad_left: f64,
    #[serde(default)]
    pub pad_top: f64,
    #[serde(default)]
    pub pad_right: f64,
    #[serde(default)]
    pub pad_bottom: f64,
}

impl Borders {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            pad_left: 0.0,
            pad_top: 0.0,
            pad_right: 0.0,
            pad_bottom: 0.0,
        }
    }

    pub const fn with_pad(mut self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        self.pad_left = left;
        self.pad_top = top;
        self.pad_right = right;
        self.pad_bottom = bottom;
        self
    }

    /// Each border plus its pad.
    pub fn padding(&self) -> Padding {
        Padding(
            self.left + self.pad_left,
            self.top + self.pad_top,
            self.right + self.pad_right,
            self.bottom + self.pad_bottom,
        )
    }
}

/// Background frame configuration handed to the host's renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub image: String,
    pub borders: Option<Borders>,
    pub tile: bool,
}
