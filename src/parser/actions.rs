//! Commands produced by the tokenizer
//!
//! These represent the only three things the firmware console does to the
//! screen: change the pen attributes, move the cursor, draw text.

use serde::{Deserialize, Serialize};

/// Kind of a tokenized command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// SGR: one attribute code
    SetAttribute,
    /// CUP: row and column, 1-based, optionally `:N` anchored from the end
    CursorPosition,
    /// Literal text to draw at the cursor
    DrawText,
}

/// A tokenized console command.
///
/// Parameters stay raw strings; their count and meaning depend on the kind
/// and are checked when the command is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,
    pub params: Vec<String>,
}

impl Command {
    pub fn new(kind: CommandKind, params: Vec<String>) -> Self {
        Self { kind, params }
    }

    pub fn set_attribute(code: impl Into<String>) -> Self {
        Self::new(CommandKind::SetAttribute, vec![code.into()])
    }

    pub fn cursor_position(row: impl Into<String>, col: impl Into<String>) -> Self {
        Self::new(CommandKind::CursorPosition, vec![row.into(), col.into()])
    }

    pub fn draw_text(text: impl Into<String>) -> Self {
        Self::new(CommandKind::DrawText, vec![text.into()])
    }

    /// Check if this is a draw command with something to draw
    pub fn is_visible_draw(&self) -> bool {
        self.kind == CommandKind::DrawText && !(self.params.len() == 1 && self.params[0].is_empty())
    }
}
