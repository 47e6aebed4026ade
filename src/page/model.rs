//! Page model
//!
//! The result of one analysis pass over the screen. Nothing here is kept
//! between passes; every query builds a fresh page.

use serde::{Deserialize, Serialize};

/// Semantic type of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    #[default]
    Unknown,
    /// `> ` prefixed key that opens a sub page
    Menu,
    /// `<value>`
    Dropdown,
    CheckboxChecked,
    CheckboxUnchecked,
    /// `[value]` other than a checkbox, or an editable popup row
    InputBox,
    SelectableText,
    DisabledText,
    Subtitle,
}

impl EntryType {
    const ALL: [EntryType; 9] = [
        EntryType::Unknown,
        EntryType::Menu,
        EntryType::Dropdown,
        EntryType::CheckboxChecked,
        EntryType::CheckboxUnchecked,
        EntryType::InputBox,
        EntryType::SelectableText,
        EntryType::DisabledText,
        EntryType::Subtitle,
    ];

    /// Numeric type code used by external consumers
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Whether the user can move the focus onto an entry of this type
    pub fn is_selectable(self) -> bool {
        matches!(
            self,
            EntryType::Menu
                | EntryType::Dropdown
                | EntryType::CheckboxChecked
                | EntryType::CheckboxUnchecked
                | EntryType::InputBox
                | EntryType::SelectableText
        )
    }
}

/// One UI element of a page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, kind: EntryType) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind,
        }
    }
}

/// Structured content of the current screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    pub title: Option<String>,
    /// Description zone of every row. Each fragment is stripped and
    /// fragments are joined with a single space.
    pub description: String,
    pub entries: Vec<Entry>,
    /// Index into `entries` of the focused entry
    pub highlight: Option<usize>,
    pub scrollable_up: bool,
    pub scrollable_down: bool,
    /// A popup without any focusable entry
    pub is_dialog: bool,
    pub is_popup: bool,
}

impl Page {
    /// The focused entry, if any
    pub fn highlighted(&self) -> Option<&Entry> {
        self.highlight.and_then(|index| self.entries.get(index))
    }

    /// First entry whose key contains `needle`, ignoring case
    pub fn find(&self, needle: &str) -> Option<&Entry> {
        let needle = needle.to_uppercase();
        self.entries
            .iter()
            .find(|entry| entry.key.to_uppercase().contains(&needle))
    }
}

/// How key and value zones end up in an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryLayout {
    /// Key and value are kept apart
    #[default]
    Separated,
    /// Key and value are joined into the key; the value stays empty
    Concatenated,
}

/// Options of a page extraction pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageOptions {
    /// Only emit entries the user can focus
    pub selectable_only: bool,
    pub layout: EntryLayout,
}

impl PageOptions {
    /// Every entry, key and value separated
    pub fn all() -> Self {
        Self::default()
    }

    /// Focusable entries, key and value separated
    pub fn selectable() -> Self {
        Self {
            selectable_only: true,
            ..Self::default()
        }
    }

    pub fn concatenated(mut self) -> Self {
        self.layout = EntryLayout::Concatenated;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_codes() {
        assert_eq!(EntryType::Unknown.code(), 0);
        assert_eq!(EntryType::Menu.code(), 1);
        assert_eq!(EntryType::InputBox.code(), 5);
        assert_eq!(EntryType::Subtitle.code(), 8);
        for code in 0..9 {
            assert_eq!(EntryType::from_code(code).unwrap().code(), code);
        }
        assert_eq!(EntryType::from_code(9), None);
    }

    #[test]
    fn test_selectable_types() {
        let selectable: Vec<u8> = EntryType::ALL
            .iter()
            .filter(|kind| kind.is_selectable())
            .map(|kind| kind.code())
            .collect();
        assert_eq!(selectable, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_page_lookup() {
        let page = Page {
            entries: vec![
                Entry::new("Boot Mode", "<UEFI>", EntryType::Dropdown),
                Entry::new("Secure Boot", "[X]", EntryType::CheckboxChecked),
            ],
            highlight: Some(1),
            ..Page::default()
        };
        assert_eq!(page.highlighted().unwrap().key, "Secure Boot");
        assert_eq!(page.find("boot mode").unwrap().value, "<UEFI>");
        assert!(page.find("network").is_none());
    }

    #[test]
    fn test_page_serialization() {
        let page = Page {
            title: Some("Main".to_string()),
            entries: vec![Entry::new("> Advanced", "", EntryType::Menu)],
            highlight: Some(0),
            ..Page::default()
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["title"], "Main");
        assert_eq!(json["entries"][0]["type"], "menu");
        assert_eq!(json["highlight"], 0);
        assert_eq!(json["is_popup"], false);
    }

    #[test]
    fn test_options() {
        let options = PageOptions::selectable().concatenated();
        assert!(options.selectable_only);
        assert_eq!(options.layout, EntryLayout::Concatenated);
        assert_eq!(PageOptions::all().layout, EntryLayout::Separated);
    }
}
