//! Entry extraction for the main page
//!
//! Every workspace row is cut into key, value and description zones and
//! classified. Entries that wrap over several rows are stitched back
//! together by two continuation rules: one for key/value pairs, one for
//! highlighted keys.

use std::ops::Range;

use tracing::debug;

use super::model::{Entry, EntryLayout, EntryType, Page, PageOptions};
use super::zones::{first_word, join, rstrip, strip, width, Zones};
use super::PageScan;

/// Which rows a key/value continuation may absorb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Stop at disabled text and subtitles
    Enabled,
    /// Stop at anything that is not disabled text
    Disabled,
}

/// What a key/value continuation has absorbed so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seen {
    Nothing,
    Key,
    Value,
    KeyValue,
}

/// Text of an entry after continuation, and the last row it used
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stitched {
    key: String,
    value: String,
    description: String,
    last_row: usize,
}

impl Stitched {
    /// Unstripped zones of a row nothing was stitched to
    fn single(zones: Zones, row: usize) -> Self {
        Self {
            key: zones.key,
            value: zones.value,
            description: zones.description,
            last_row: row,
        }
    }
}

impl PageScan<'_> {
    fn zones(&self, row: usize) -> Zones {
        let spec = self.spec();
        Zones::split(&self.text(row), spec.value_column, spec.description_column)
    }

    /// Scroll marker in `row` drawn with the page colors
    fn has_scroll_marker(&self, row: usize, marker: char) -> bool {
        let text = self.text(row);
        let Some(col) = text.chars().position(|ch| ch == marker) else {
            return false;
        };
        self.screen.row_matches(row, self.filters.page, col..col + 1)
    }

    /// Classify workspace rows, first and last excluded, into entries
    pub(super) fn parse_entries(
        &self,
        page: &mut Page,
        workspace: Range<usize>,
        options: PageOptions,
    ) {
        let spec = self.spec();
        let value_column = spec.value_column;
        let description_column = spec.description_column;

        page.scrollable_up = self.has_scroll_marker(workspace.start, spec.scroll_up);
        page.scrollable_down = workspace
            .end
            .checked_sub(1)
            .map_or(false, |row| self.has_scroll_marker(row, spec.scroll_down));

        let end = workspace.end.saturating_sub(1);
        let mut entries: Vec<Entry> = Vec::new();
        let mut descriptions: Vec<String> = Vec::new();
        let mut highlight: Option<usize> = None;
        let mut highlight_first = false;
        let mut row = workspace.start + 1;

        while row < end {
            let zones = self.zones(row);
            let mut kv = format!("{}{}", zones.key, zones.value);
            let mut current = Stitched::single(zones, row);

            let highlighted =
                self.screen
                    .row_contains(row, self.filters.highlight, 0..description_column, false);
            if highlighted {
                if highlight.is_none() {
                    highlight = Some(entries.len());
                    highlight_first = true;
                } else {
                    highlight_first = false;
                }
            }

            let kind = if self
                .screen
                .row_contains(row, self.filters.disabled, 0..description_column, true)
            {
                current = self.continue_key_value(row, end, Mode::Disabled);
                EntryType::DisabledText
            } else if self
                .screen
                .row_contains(row, self.filters.subtitle, 0..value_column, true)
            {
                EntryType::Subtitle
            } else if strip(&current.key).starts_with("> ") {
                current.key = kv.clone();
                current.value.clear();
                if highlight == Some(entries.len()) {
                    current = self.continue_highlight(row, end);
                }
                EntryType::Menu
            } else if strip(&current.value).starts_with('<') {
                current = self.continue_key_value(row, end, Mode::Enabled);
                EntryType::Dropdown
            } else if strip(&current.value).starts_with('[') {
                current = self.continue_key_value(row, end, Mode::Enabled);
                match strip(&current.value) {
                    "[ ]" => EntryType::CheckboxUnchecked,
                    "[X]" => EntryType::CheckboxChecked,
                    _ => EntryType::InputBox,
                }
            } else if self
                .screen
                .row_contains(row, self.filters.selectable, 0..value_column, true)
                || !strip(&kv).is_empty()
            {
                if !strip(&current.key).is_empty() && !strip(&current.value).is_empty() {
                    if current.key.ends_with("  ") {
                        current = self.continue_key_value(row, end, Mode::Enabled);
                    } else {
                        current.key = kv.clone();
                        current.value.clear();
                        if highlight == Some(entries.len()) {
                            current = self.continue_highlight(row, end);
                        }
                    }
                }
                EntryType::SelectableText
            } else {
                EntryType::Unknown
            };

            let bracketed = matches!(
                kind,
                EntryType::Dropdown
                    | EntryType::CheckboxChecked
                    | EntryType::CheckboxUnchecked
                    | EntryType::InputBox
            );
            if bracketed {
                kv = format!("{}{}", strip(&current.key), strip(&current.value));
            }

            if kind != EntryType::Unknown && (kind.is_selectable() || !options.selectable_only) {
                let key = strip(&current.key);
                let value = strip(&current.value);
                // Later rows of a highlight run belong to the entry above
                let previous = if highlighted && !highlight_first {
                    entries.last_mut()
                } else {
                    None
                };
                match (options.layout, previous) {
                    (EntryLayout::Separated, Some(last)) => {
                        last.key.push_str(key);
                        last.value.push_str(value);
                    }
                    (EntryLayout::Concatenated, Some(last)) => {
                        last.key.push_str(strip(&kv));
                    }
                    (EntryLayout::Separated, None) => {
                        entries.push(Entry::new(key, value, kind));
                    }
                    (EntryLayout::Concatenated, None) => {
                        entries.push(Entry::new(strip(&kv), "", kind));
                    }
                }
            }

            let description = strip(&current.description);
            if !description.is_empty() {
                descriptions.push(description.to_string());
            }
            row = current.last_row + 1;
        }

        page.description = descriptions.join(" ");
        page.entries = entries;
        page.highlight = highlight;
    }

    /// Absorb the rows below `row` that continue its key, value or
    /// description. Fragments only wrap when the first word would not have
    /// fit the space left on the previous row.
    fn continue_key_value(&self, row: usize, end: usize, mode: Mode) -> Stitched {
        let spec = self.spec();
        let value_column = spec.value_column;
        let description_column = spec.description_column;
        let value_width = description_column - value_column;

        let zones = self.zones(row);
        let mut key = strip(&zones.key).to_string();
        let mut value = strip(&zones.value).to_string();
        let mut description = strip(&zones.description).to_string();
        let mut free_key = value_column.saturating_sub(width(rstrip(&zones.key)) + 3);
        let mut free_value = value_width.saturating_sub(width(&value) + 3);
        let mut seen = Seen::Nothing;

        let mut next = row + 1;
        while next < end {
            let zones = self.zones(next);
            let next_key = strip(&zones.key);
            let next_value = strip(&zones.value);

            if next_key.starts_with("> ") {
                break;
            }
            let disabled =
                self.screen
                    .row_contains(next, self.filters.disabled, 0..description_column, true);
            let stop = match mode {
                Mode::Enabled => {
                    disabled
                        || self
                            .screen
                            .row_contains(next, self.filters.subtitle, 0..value_column, true)
                }
                Mode::Disabled => !disabled,
            };
            if stop {
                break;
            }
            // A blank row ends the entry even after a value was absorbed
            if next_key.is_empty() && (next_value.is_empty() || value.is_empty()) {
                break;
            }

            if !next_key.is_empty() {
                if seen == Seen::Value {
                    debug!(
                        row = next,
                        value = next_value,
                        "independent key following an independent value"
                    );
                    break;
                }
                if width(first_word(next_key)) <= free_key {
                    break;
                }
                free_key = value_column.saturating_sub(width(rstrip(&zones.key)) + 3);

                if next_value.is_empty() {
                    seen = Seen::Key;
                } else {
                    if seen == Seen::Key {
                        break;
                    }
                    if !open_bracket(&value) && width(first_word(next_value)) <= free_value {
                        break;
                    }
                    free_value = value_width.saturating_sub(width(next_value) + 3);
                    seen = Seen::KeyValue;
                    value = join(&value, next_value);
                }
                key = join(&key, next_key);
            } else {
                if seen == Seen::Key {
                    break;
                }
                seen = Seen::Value;
                value = join(&value, next_value);
            }

            description = join(&description, strip(&zones.description));
            next += 1;
        }

        Stitched {
            key,
            value,
            description,
            last_row: next - 1,
        }
    }

    /// Absorb the highlighted rows below `row` into one key. A fragment
    /// that filled its zone joins the next one without a space.
    fn continue_highlight(&self, row: usize, end: usize) -> Stitched {
        let description_column = self.spec().description_column;
        let zones = self.zones(row);
        let mut key = format!("{}{}", zones.key, zones.value);
        let mut previous = key.clone();

        let mut next = row + 1;
        while next < end
            && self
                .screen
                .row_contains(next, self.filters.highlight, 0..description_column, false)
        {
            let zones = self.zones(next);
            let fragment = format!("{}{}", zones.key, zones.value);
            let separator = if width(rstrip(&previous)) == description_column {
                ""
            } else {
                " "
            };
            key = format!("{}{}{}", strip(&key), separator, strip(&fragment));
            previous = fragment;
            next += 1;
        }

        Stitched {
            key,
            value: String::new(),
            description: zones.description,
            last_row: next - 1,
        }
    }
}

/// A `[` or `<` value whose closing bracket is on a later row
fn open_bracket(value: &str) -> bool {
    (value.starts_with('[') && !value.contains(']'))
        || (value.starts_with('<') && !value.contains('>'))
}
