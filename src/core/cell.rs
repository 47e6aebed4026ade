//! Screen Cell
//!
//! Represents a single position of the screen grid: one character and the
//! three raw SGR codes it was drawn with.

use serde::{Deserialize, Serialize};

use super::color::{BG_DEFAULT, FG_DEFAULT, TEXT_DEFAULT};

/// Foreground, background and text style codes of a cell or of the pen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attr {
    pub fg: u8,
    pub bg: u8,
    pub text: u8,
}

impl Default for Attr {
    fn default() -> Self {
        Self {
            fg: FG_DEFAULT,
            bg: BG_DEFAULT,
            text: TEXT_DEFAULT,
        }
    }
}

impl Attr {
    pub fn new(fg: u8, bg: u8, text: u8) -> Self {
        Self { fg, bg, text }
    }

    /// Back to the default foreground, background and text style
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single cell in the screen grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character drawn in this cell (a space when never drawn)
    pub ch: char,
    pub attr: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: Attr::default(),
        }
    }
}

impl Cell {
    pub fn new(ch: char, attr: Attr) -> Self {
        Self { ch, attr }
    }

    /// Clear the cell to default state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Partial attribute match: only the fields that are set are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttrFilter {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub text: Option<u8>,
}

impl AttrFilter {
    pub fn fg_bg(fg: u8, bg: u8) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            text: None,
        }
    }

    pub fn bg(bg: u8) -> Self {
        Self {
            bg: Some(bg),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: u8) -> Self {
        self.text = Some(text);
        self
    }

    pub fn matches(&self, attr: &Attr) -> bool {
        self.fg.map_or(true, |fg| fg == attr.fg)
            && self.bg.map_or(true, |bg| bg == attr.bg)
            && self.text.map_or(true, |text| text == attr.text)
    }
}
