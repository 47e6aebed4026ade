//! Cursor state management
//!
//! The cursor tracks the active draw position and the pen attributes that
//! new text is drawn with. Until the first cursor-position command there is
//! no draw position and text has nowhere to go.

use serde::{Deserialize, Serialize};

use super::cell::Attr;

/// A 0-indexed grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Cursor state: draw position and current attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Active draw position, `None` while unanchored
    pub position: Option<Position>,
    /// Attributes applied to newly drawn text
    pub attr: Attr,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a 0-indexed position. Negative coordinates leave the cursor
    /// unanchored.
    pub fn move_to(&mut self, row: i64, col: i64) {
        self.position = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => Some(Position { row, col }),
            _ => None,
        };
    }

    /// Drop the draw position
    pub fn unset(&mut self) {
        self.position = None;
    }

    /// Advance the column after drawing `n` characters. The row never
    /// changes.
    pub fn advance(&mut self, n: usize) {
        if let Some(pos) = self.position.as_mut() {
            pos.col += n;
        }
    }
}
