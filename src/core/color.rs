//! SGR attribute tables
//!
//! The firmware console only ever emits the eight basic ANSI colors, the
//! two "default" codes and a handful of text style toggles. Cells keep the
//! raw SGR codes; these tables give them names and classify incoming
//! attribute-set parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default foreground SGR code
pub const FG_DEFAULT: u8 = 39;
/// Default background SGR code
pub const BG_DEFAULT: u8 = 49;
/// Default text style SGR code (also the "reset everything" code)
pub const TEXT_DEFAULT: u8 = 0;

/// The colors understood by the firmware console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl Color {
    const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Brown,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Default,
    ];

    /// Offset of this color inside an SGR color block (30-39, 40-49)
    fn offset(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Brown => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::Default => 9,
        }
    }

    /// SGR code selecting this color as foreground
    pub fn fg_code(self) -> u8 {
        30 + self.offset()
    }

    /// SGR code selecting this color as background
    pub fn bg_code(self) -> u8 {
        40 + self.offset()
    }

    /// Look up a foreground SGR code (30-37, 39)
    pub fn from_fg_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.fg_code() == code)
    }

    /// Look up a background SGR code (40-47, 49)
    pub fn from_bg_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.bg_code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Brown => "brown",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Default => "default",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("unknown color '{}'", s))
    }
}

/// Text style codes. Each SGR style code replaces the previous one; styles
/// are not combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "+bold")]
    Bold,
    #[serde(rename = "+italics")]
    Italics,
    #[serde(rename = "+underscore")]
    Underscore,
    #[serde(rename = "+reverse")]
    Reverse,
    #[serde(rename = "+strikethrough")]
    Strikethrough,
    #[serde(rename = "-bold")]
    NoBold,
    #[serde(rename = "-italics")]
    NoItalics,
    #[serde(rename = "-underscore")]
    NoUnderscore,
    #[serde(rename = "-reverse")]
    NoReverse,
    #[serde(rename = "-strikethrough")]
    NoStrikethrough,
}

impl TextStyle {
    const ALL: [TextStyle; 11] = [
        TextStyle::Default,
        TextStyle::Bold,
        TextStyle::Italics,
        TextStyle::Underscore,
        TextStyle::Reverse,
        TextStyle::Strikethrough,
        TextStyle::NoBold,
        TextStyle::NoItalics,
        TextStyle::NoUnderscore,
        TextStyle::NoReverse,
        TextStyle::NoStrikethrough,
    ];

    pub fn code(self) -> u8 {
        match self {
            TextStyle::Default => 0,
            TextStyle::Bold => 1,
            TextStyle::Italics => 3,
            TextStyle::Underscore => 4,
            TextStyle::Reverse => 7,
            TextStyle::Strikethrough => 9,
            TextStyle::NoBold => 22,
            TextStyle::NoItalics => 23,
            TextStyle::NoUnderscore => 24,
            TextStyle::NoReverse => 27,
            TextStyle::NoStrikethrough => 29,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            TextStyle::Default => "default",
            TextStyle::Bold => "+bold",
            TextStyle::Italics => "+italics",
            TextStyle::Underscore => "+underscore",
            TextStyle::Reverse => "+reverse",
            TextStyle::Strikethrough => "+strikethrough",
            TextStyle::NoBold => "-bold",
            TextStyle::NoItalics => "-italics",
            TextStyle::NoUnderscore => "-underscore",
            TextStyle::NoReverse => "-reverse",
            TextStyle::NoStrikethrough => "-strikethrough",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown text style '{}'", s))
    }
}

/// What a single attribute-set parameter does to the current attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrEffect {
    /// `0`: foreground, background and text style back to defaults
    Reset,
    Foreground(u8),
    Background(u8),
    Text(u8),
    Unknown(u8),
}

impl SgrEffect {
    /// Classify an SGR code. Tables are consulted in order: foreground,
    /// background, text style.
    pub fn classify(code: u8) -> Self {
        if code == TEXT_DEFAULT {
            SgrEffect::Reset
        } else if Color::from_fg_code(code).is_some() {
            SgrEffect::Foreground(code)
        } else if Color::from_bg_code(code).is_some() {
            SgrEffect::Background(code)
        } else if TextStyle::from_code(code).is_some() {
            SgrEffect::Text(code)
        } else {
            SgrEffect::Unknown(code)
        }
    }
}
