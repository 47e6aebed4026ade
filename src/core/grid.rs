//! Screen Grid
//!
//! A fixed-size 2D grid of cells. Dimensions are set at construction and
//! never change; writes outside the grid are dropped.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::cell::{Attr, Cell};

/// A row of cells in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); cols],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Row text, one character per column
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

/// The screen grid - a 2D array of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Row>,
    cols: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new(cols)).collect(),
            cols,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Get a reference to a cell
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Get a reference to a row
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Write `text` starting at (`row`, `col`) with the given attributes.
    ///
    /// Characters that would land past the right edge are dropped. A row
    /// outside the grid is reported and nothing is written. Returns the
    /// number of cells written.
    pub fn draw(&mut self, row: usize, col: usize, text: &str, attr: Attr) -> usize {
        let cols = self.cols;
        let Some(line) = self.rows.get_mut(row) else {
            warn!(
                row = row + 1,
                height = self.rows.len(),
                "draw below the last screen row ignored"
            );
            return 0;
        };

        let mut written = 0;
        for (offset, ch) in text.chars().enumerate() {
            let target = col + offset;
            if target >= cols {
                break;
            }
            line.cells[target] = Cell::new(ch, attr);
            written += 1;
        }
        written
    }

    /// Reset every cell to its default
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }
}
