//! Colorized snapshot generation
//!
//! A snapshot names every cell's colors and text style. It is only
//! available when every cell holds attribute codes from the known SGR
//! tables; callers should treat the error as "no snapshot", not as a
//! failure to retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::{Color, TextStyle};
use super::grid::Grid;

/// Why a snapshot could not be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("cell at row {row}, column {col} has unknown {kind} code {code}")]
    UnknownAttribute {
        row: usize,
        col: usize,
        kind: &'static str,
        code: u8,
    },
}

/// Snapshot of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredCell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub style: TextStyle,
}

/// Named colors of the whole grid (row-major)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredScreen {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<Vec<ColoredCell>>,
}

impl ColoredScreen {
    /// Capture the grid, failing on the first cell with an unknown code
    pub fn capture(grid: &Grid) -> Result<Self, SnapshotError> {
        let mut cells = Vec::with_capacity(grid.rows());
        for (row, line) in grid.iter().enumerate() {
            let mut colored = Vec::with_capacity(line.cells.len());
            for (col, cell) in line.cells.iter().enumerate() {
                let unknown = |kind: &'static str, code: u8| SnapshotError::UnknownAttribute {
                    row,
                    col,
                    kind,
                    code,
                };
                let fg = Color::from_fg_code(cell.attr.fg)
                    .ok_or_else(|| unknown("foreground", cell.attr.fg))?;
                let bg = Color::from_bg_code(cell.attr.bg)
                    .ok_or_else(|| unknown("background", cell.attr.bg))?;
                let style = TextStyle::from_code(cell.attr.text)
                    .ok_or_else(|| unknown("text style", cell.attr.text))?;
                colored.push(ColoredCell {
                    ch: cell.ch,
                    fg,
                    bg,
                    style,
                });
            }
            cells.push(colored);
        }

        Ok(Self {
            cols: grid.cols(),
            rows: grid.rows(),
            cells,
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&ColoredCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }
}
