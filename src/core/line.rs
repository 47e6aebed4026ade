//! Attribute runs
//!
//! A row of cells is compressed into segments: maximal horizontal runs of
//! cells sharing the same foreground, background and text style. Segments
//! of a row are contiguous, ordered left to right and cover every column
//! exactly once.

use serde::{Deserialize, Serialize};

use super::cell::{Attr, Cell};

/// A run of same-attribute cells within one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Characters of the run, one per column
    pub text: String,
    /// First column of the run
    pub begin: usize,
    /// One past the last column of the run
    pub end: usize,
    pub attr: Attr,
}

impl Segment {
    fn start(col: usize, cell: &Cell) -> Self {
        Self {
            text: cell.ch.to_string(),
            begin: col,
            end: col + 1,
            attr: cell.attr,
        }
    }

    /// Number of columns covered
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether the run intersects the column range `[begin, end)`
    pub fn overlaps(&self, begin: usize, end: usize) -> bool {
        self.begin < end && self.end > begin
    }

    /// The part of the text that falls inside the column range `[begin, end)`
    pub fn clipped_text(&self, begin: usize, end: usize) -> String {
        let from = begin.saturating_sub(self.begin);
        let to = end.min(self.end).saturating_sub(self.begin);
        if to <= from {
            return String::new();
        }
        self.text.chars().skip(from).take(to - from).collect()
    }
}

/// Compress a row of cells into attribute runs.
///
/// This is a pure function of the cells, so merging an unchanged row twice
/// always produces identical segments.
pub fn merge(cells: &[Cell]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some(first) = cells.first() else {
        return segments;
    };

    let mut running = Segment::start(0, first);
    for (col, cell) in cells.iter().enumerate().skip(1) {
        if cell.attr == running.attr {
            running.text.push(cell.ch);
            running.end = col + 1;
        } else {
            let next = Segment::start(col, cell);
            segments.push(std::mem::replace(&mut running, next));
        }
    }
    segments.push(running);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str, attrs: &[Attr]) -> Vec<Cell> {
        text.chars()
            .zip(attrs.iter())
            .map(|(ch, attr)| Cell::new(ch, *attr))
            .collect()
    }

    #[test]
    fn test_merge_single_cell() {
        let cells = vec![Cell::new('x', Attr::default())];
        let segments = merge(&cells);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "x");
        assert_eq!((segments[0].begin, segments[0].end), (0, 1));
    }

    #[test]
    fn test_merge_empty_row() {
        assert!(merge(&[]).is_empty());
    }

    #[test]
    fn test_merge_splits_on_attribute_change() {
        let plain = Attr::default();
        let red = Attr::new(31, 47, 0);
        let cells = row("abCDe", &[plain, plain, red, red, plain]);
        let segments = merge(&cells);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "ab");
        assert_eq!(segments[1].text, "CD");
        assert_eq!((segments[1].begin, segments[1].end), (2, 4));
        assert_eq!(segments[1].attr, red);
        assert_eq!(segments[2].text, "e");
        assert_eq!((segments[2].begin, segments[2].end), (4, 5));
    }

    #[test]
    fn test_merge_text_attribute_counts() {
        let normal = Attr::new(30, 47, 0);
        let bold = Attr::new(30, 47, 1);
        let cells = row("ab", &[normal, bold]);
        assert_eq!(merge(&cells).len(), 2);
    }

    #[test]
    fn test_clipped_text() {
        let segment = Segment {
            text: "Hello".to_string(),
            begin: 10,
            end: 15,
            attr: Attr::default(),
        };
        assert_eq!(segment.clipped_text(0, 100), "Hello");
        assert_eq!(segment.clipped_text(11, 13), "el");
        assert_eq!(segment.clipped_text(14, 20), "o");
        assert_eq!(segment.clipped_text(15, 20), "");
        assert!(segment.overlaps(14, 16));
        assert!(!segment.overlaps(15, 16));
        assert!(!segment.overlaps(0, 10));
    }
}
