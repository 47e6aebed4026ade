//! Structural page analyzer
//!
//! Reads the merged screen and infers its layout (header, footer and the
//! workspace between them), then extracts either a popup or the list of
//! entries of the main page.
//!
//! The analyzer never fails. Anything it cannot make sense of is logged and
//! replaced by the nearest sane default.

mod entries;
mod layout;
mod model;
mod popup;
mod zones;

use tracing::debug;

use crate::config::{ProfileConfig, ProfileSpec};
use crate::core::{AttrFilter, Screen};

pub use layout::Layout;
pub use model::{Entry, EntryLayout, EntryType, Page, PageOptions};

/// Extract the page currently shown on `screen`
pub fn analyze(screen: &Screen, config: &ProfileConfig, options: PageOptions) -> Page {
    let mut page = Page::default();
    if !screen.is_available() {
        debug!("screen has no merged rows yet, returning an empty page");
        return page;
    }

    let scan = PageScan::new(screen, config);
    let layout = scan.layout();
    let workspace = layout.workspace();
    page.title = layout.title;

    if !scan.parse_popup(&mut page, workspace.clone()) {
        scan.parse_entries(&mut page, workspace, options);
    }
    page
}

/// Header, footer and workspace bounds of the screen, or `None` while the
/// screen has not been merged
pub fn detect_layout(screen: &Screen, config: &ProfileConfig) -> Option<Layout> {
    screen
        .is_available()
        .then(|| PageScan::new(screen, config).layout())
}

/// Attribute filters derived from a profile
#[derive(Debug, Clone, Copy)]
struct Filters {
    highlight: AttrFilter,
    popup_highlight: AttrFilter,
    page: AttrFilter,
    selectable: AttrFilter,
    disabled: AttrFilter,
    subtitle: AttrFilter,
    /// Backgrounds that make a popup row an input box
    highlight_bg: AttrFilter,
    default_bg: AttrFilter,
    footer_bg: AttrFilter,
}

impl Filters {
    fn new(spec: &ProfileSpec) -> Self {
        Self {
            highlight: spec.highlight.filter(),
            popup_highlight: spec.popup_highlight.filter(),
            page: spec.page.filter(),
            selectable: spec.selectable.filter(),
            disabled: spec.disabled.filter().with_text(spec.disabled_style.code()),
            subtitle: spec.subtitle.filter(),
            highlight_bg: AttrFilter::bg(spec.highlight.bg.bg_code()),
            default_bg: AttrFilter::bg(spec.default_bg.bg_code()),
            footer_bg: AttrFilter::bg(spec.footer_bg.bg_code()),
        }
    }
}

/// One read-only analysis pass over a screen
struct PageScan<'a> {
    screen: &'a Screen,
    config: &'a ProfileConfig,
    filters: Filters,
}

impl<'a> PageScan<'a> {
    fn new(screen: &'a Screen, config: &'a ProfileConfig) -> Self {
        Self {
            screen,
            config,
            filters: Filters::new(config.spec()),
        }
    }

    fn spec(&self) -> &ProfileSpec {
        self.config.spec()
    }

    fn text(&self, row: usize) -> String {
        self.screen.row_text(row)
    }
}
