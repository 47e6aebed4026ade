//! Header, footer and workspace detection

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::zones::strip;
use super::PageScan;
use crate::config::PatternName;

/// Row bounds of the fixed parts of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub header: Range<usize>,
    pub footer: Range<usize>,
    pub title: Option<String>,
}

impl Layout {
    /// Rows between the header and the footer; empty when they overlap
    pub fn workspace(&self) -> Range<usize> {
        let begin = self.header.end;
        begin..self.footer.start.max(begin)
    }
}

impl PageScan<'_> {
    pub(super) fn layout(&self) -> Layout {
        let (header, title) = self.detect_header();
        let footer = self.detect_footer();
        if header.end >= footer.start {
            warn!(
                header_end = header.end,
                footer_begin = footer.start,
                "no workspace between header and footer"
            );
        }
        Layout {
            header,
            footer,
            title,
        }
    }

    /// Look for a top border in the header window, a title right below it
    /// and a bottom border two rows below. The first complete frame wins.
    fn detect_header(&self) -> (Range<usize>, Option<String>) {
        let spec = self.spec();
        let top = self.config.pattern(PatternName::HeaderTop);
        let title_pattern = self.config.pattern(PatternName::HeaderTitle);
        let bottom = self.config.pattern(PatternName::HeaderBottom);

        let mut header = spec.header_begin..spec.header_end;
        let mut title = None;
        for row in spec.header_begin..spec.header_end.min(self.screen.rows()) {
            if !top.is_match(&self.text(row)) {
                continue;
            }
            header.start = row;

            let line = self.text(row + 1);
            match title_pattern.captures(&line) {
                Some(caps) => {
                    let matched = caps.get(1).or_else(|| caps.get(0));
                    title = matched
                        .map(|m| strip(m.as_str()).to_string())
                        .filter(|text| !text.is_empty());
                }
                None => debug!(row = row + 1, "no title below the header top border"),
            }

            if bottom.is_match(&self.text(row + 2)) {
                header.end = row + 3;
                break;
            }
            debug!(row = row + 2, "header top border without a bottom border");
        }
        (header, title)
    }

    /// Find the footer, first by its borders and then by its background
    fn detect_footer(&self) -> Range<usize> {
        let spec = self.spec();
        let rows = self.screen.rows();
        let cols = self.screen.cols();
        let default_begin = rows.saturating_sub(spec.footer_height);
        let mut footer = default_begin..rows;

        let top = self.config.pattern(PatternName::FooterTop);
        let bottom = self.config.pattern(PatternName::FooterBottom);
        let bordered = (default_begin..rows)
            .rev()
            .find(|&row| bottom.is_match(&self.text(row)));
        if let Some(last) = bordered {
            footer.end = last + 1;
            let window = footer.end.saturating_sub(spec.footer_border_window)..last;
            match window.rev().find(|&row| top.is_match(&self.text(row))) {
                Some(first) => footer.start = first,
                None => warn!(
                    window = spec.footer_border_window,
                    "footer top border not found above its bottom border, using the default"
                ),
            }
            return footer;
        }
        debug!("footer bottom border not found, matching the footer background");

        let background = self.filters.footer_bg;
        let Some(last) = (default_begin..rows)
            .rev()
            .find(|&row| self.screen.row_matches(row, background, 0..cols))
        else {
            warn!("footer not found, using the default bounds");
            return footer;
        };
        footer.end = last + 1;
        let window = footer.end.saturating_sub(spec.footer_color_window)..last;
        let inner = 1..cols.saturating_sub(1);
        match window
            .rev()
            .find(|&row| !self.screen.row_matches(row, background, inner.clone()))
        {
            Some(first) => footer.start = first,
            None => warn!(
                window = spec.footer_color_window,
                "footer begin not found above the footer background, using the default"
            ),
        }
        footer
    }
}
