//! Popup extraction

use std::ops::Range;

use tracing::{debug, warn};

use super::model::{Entry, EntryType, Page};
use super::zones::{column_of, columns, strip};
use super::PageScan;
use crate::config::PatternName;

/// Top border of a popup: its row and column span
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    row: usize,
    cols: Range<usize>,
}

impl PageScan<'_> {
    /// Parse a popup drawn inside the workspace. Returns false when the
    /// workspace holds no popup top border.
    pub(super) fn parse_popup(&self, page: &mut Page, workspace: Range<usize>) -> bool {
        let Some(frame) = self.find_popup_top(page, workspace.clone()) else {
            return false;
        };
        page.is_popup = true;

        let row_pattern = self.config.pattern(PatternName::PopupRow);
        let bottom = self.config.pattern(PatternName::PopupBottom);
        let scroll_down = self.spec().scroll_down;
        let inner = frame.cols.start + 1..frame.cols.end.saturating_sub(1);

        let mut entries = Vec::new();
        let mut highlight = None;
        let mut closed = false;
        for row in frame.row + 1..workspace.end {
            let text = self.text(row);
            if let Some(caps) = bottom.captures(&text) {
                page.scrollable_down = marker(&caps, scroll_down);
                closed = true;
                break;
            }
            if !row_pattern.is_match(&text) {
                debug!(row, "popup row does not match, ignored");
                continue;
            }

            let label = strip(&columns(&text, inner.start, inner.end)).to_string();
            if self
                .screen
                .row_contains(row, self.filters.popup_highlight, frame.cols.clone(), true)
            {
                highlight = Some(entries.len());
            }
            let editable = self
                .screen
                .row_contains(row, self.filters.highlight_bg, frame.cols.clone(), false)
                || self
                    .screen
                    .row_contains(row, self.filters.default_bg, frame.cols.clone(), false);
            let kind = if editable {
                EntryType::InputBox
            } else {
                EntryType::SelectableText
            };
            entries.push(Entry::new(label, "", kind));
        }

        if !closed {
            warn!(top = frame.row, "popup has no bottom border, entries ignored");
            return true;
        }

        if !entries.is_empty() && highlight.is_none() {
            page.is_dialog = true;
            for entry in entries
                .iter_mut()
                .filter(|entry| entry.kind == EntryType::SelectableText)
            {
                entry.kind = EntryType::DisabledText;
            }
        }
        page.entries = entries;
        page.highlight = highlight;
        true
    }

    /// The last popup top border of the workspace
    fn find_popup_top(&self, page: &mut Page, workspace: Range<usize>) -> Option<Frame> {
        let top = self.config.pattern(PatternName::PopupTop);
        let scroll_up = self.spec().scroll_up;
        let mut frame = None;
        for row in workspace {
            let text = self.text(row);
            let Some(caps) = top.captures(&text) else {
                continue;
            };
            let Some(border) = caps.get(0) else {
                continue;
            };
            page.scrollable_up = marker(&caps, scroll_up);
            frame = Some(Frame {
                row,
                cols: column_of(&text, border.start())..column_of(&text, border.end()),
            });
        }
        frame
    }
}

/// Whether capture group 1 starts with the scroll marker
fn marker(caps: &regex::Captures<'_>, scroll: char) -> bool {
    caps.get(1)
        .map_or(false, |group| group.as_str().starts_with(scroll))
}
