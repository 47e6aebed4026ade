//! Screen model implementation
//!
//! The screen owns the cell grid and the attribute runs derived from it.
//! Runs are recomputed wholesale by [`Screen::merge`] after every feed and
//! are the only thing the page analyzer reads.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::cell::{Attr, AttrFilter};
use super::grid::Grid;
use super::line::{merge, Segment};

/// The main screen structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    grid: Grid,
    /// Attribute runs per row; empty until the first merge
    segments: Vec<Vec<Segment>>,
}

impl Screen {
    /// Create a new screen with the given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            grid: Grid::new(cols, rows),
            segments: vec![Vec::new(); rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Write text into the grid. Runs are not updated until [`Screen::merge`].
    pub fn draw(&mut self, row: usize, col: usize, text: &str, attr: Attr) -> usize {
        self.grid.draw(row, col, text, attr)
    }

    /// Recompute the attribute runs of every row
    pub fn merge(&mut self) {
        self.segments = self.grid.iter().map(|row| merge(&row.cells)).collect();
    }

    /// Reset the grid to defaults and drop all runs
    pub fn clear(&mut self) {
        self.grid.clear();
        for row in &mut self.segments {
            row.clear();
        }
    }

    /// Attribute runs of a row (empty for unknown rows or before a merge)
    pub fn segments(&self, row: usize) -> &[Segment] {
        self.segments.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether every row has been merged at least once since the last clear
    pub fn is_available(&self) -> bool {
        self.segments.iter().all(|row| !row.is_empty())
    }

    /// Text of a row, one character per column
    pub fn row_text(&self, row: usize) -> String {
        self.segments(row).iter().map(|s| s.text.as_str()).collect()
    }

    /// Text of every row, top to bottom
    pub fn text_rows(&self) -> Vec<String> {
        (0..self.rows()).map(|row| self.row_text(row)).collect()
    }

    /// Whether every run touching `cols` in `row` matches the filter.
    /// A row without runs never matches.
    pub fn row_matches(&self, row: usize, filter: AttrFilter, cols: Range<usize>) -> bool {
        let segments = self.segments(row);
        !segments.is_empty()
            && segments
                .iter()
                .filter(|s| s.overlaps(cols.start, cols.end))
                .all(|s| filter.matches(&s.attr))
    }

    /// Whether at least one run touching `cols` in `row` matches the filter.
    /// With `visible_only`, the matching part must also contain something
    /// other than spaces.
    pub fn row_contains(
        &self,
        row: usize,
        filter: AttrFilter,
        cols: Range<usize>,
        visible_only: bool,
    ) -> bool {
        self.segments(row)
            .iter()
            .filter(|s| s.overlaps(cols.start, cols.end))
            .filter(|s| filter.matches(&s.attr))
            .any(|s| {
                !visible_only
                    || !s
                        .clipped_text(cols.start, cols.end)
                        .trim_matches(' ')
                        .is_empty()
            })
    }
}
