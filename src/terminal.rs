//! Screen state machine
//!
//! Ties together the tokenizer, the screen model and the page analyzer.
//! Each [`Terminal`] is an independent screen session: feeding bytes
//! applies the tokenized commands to the grid, and every query reads the
//! merged result.

use tracing::{trace, warn};

use crate::config::{Profile, ProfileConfig};
use crate::core::charset::decode_console;
use crate::core::{ColoredScreen, Cursor, Screen, SgrEffect, SnapshotError};
use crate::page::{self, Layout, Page, PageOptions};
use crate::parser::{Command, CommandKind, ConsoleContext, Tokenizer};

/// Marker of embedded controller log lines leaking into drawn text
const EC_COMMAND: &str = "EC Command";

/// Decode a cursor-position parameter against the grid dimension it
/// addresses. `:N` counts back from the end, so `:0` is the dimension
/// itself. Returns the 1-based value, or `None` when it is not a number.
pub fn decode_position(param: &str, dimension: usize) -> Option<i64> {
    let param = param.trim();
    match param.strip_prefix(':') {
        Some(offset) => {
            let offset: i64 = offset.trim().parse().ok()?;
            i64::try_from(dimension).ok().map(|dim| dim - offset)
        }
        None => param.parse().ok(),
    }
}

/// A firmware screen session
#[derive(Debug, Clone)]
pub struct Terminal {
    config: ProfileConfig,
    screen: Screen,
    tokenizer: Tokenizer,
    /// Draw position and pen; survives feeds and screen resets
    cursor: Cursor,
}

impl Terminal {
    /// Create a session for a built-in profile
    pub fn new(profile: Profile) -> Self {
        Self::with_config(ProfileConfig::builtin(profile))
    }

    /// Create a session from a profile name; unknown names fall back to the
    /// default profile
    pub fn with_profile_name(name: &str) -> Self {
        Self::new(Profile::from_name_or_default(name))
    }

    /// Create a session for a custom profile
    pub fn with_config(config: ProfileConfig) -> Self {
        let spec = config.spec();
        let screen = Screen::new(spec.cols, spec.rows);
        Self {
            config,
            screen,
            tokenizer: Tokenizer::new(ConsoleContext::Setup),
            cursor: Cursor::new(),
        }
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn rows(&self) -> usize {
        self.screen.rows()
    }

    pub fn cols(&self) -> usize {
        self.screen.cols()
    }

    /// Process console output. Commands are applied in stream order, then
    /// every row is merged into attribute runs.
    pub fn feed(&mut self, data: &[u8]) {
        let text = decode_console(data);
        let commands = self.tokenizer.split(&text);
        let mut drawn = 0;
        for command in &commands {
            if self.apply(command) {
                drawn += 1;
            }
        }
        self.screen.merge();
        trace!(bytes = data.len(), commands = commands.len(), drawn, "feed applied");
    }

    /// Clear the grid and its runs. The cursor and pen are kept.
    pub fn reset(&mut self) {
        self.screen.clear();
    }

    /// Apply one command. Returns true when something was drawn.
    fn apply(&mut self, command: &Command) -> bool {
        match command.kind {
            CommandKind::SetAttribute => {
                self.set_attribute(&command.params);
                false
            }
            CommandKind::CursorPosition => {
                self.move_cursor(&command.params);
                false
            }
            CommandKind::DrawText => self.draw_text(&command.params),
        }
    }

    fn set_attribute(&mut self, params: &[String]) {
        let [param] = params else {
            warn!(count = params.len(), "attribute-set expects one parameter");
            return;
        };
        let Ok(code) = param.trim().parse::<u8>() else {
            warn!(param = %param, "attribute-set parameter is not a code");
            return;
        };

        let attr = &mut self.cursor.attr;
        match SgrEffect::classify(code) {
            SgrEffect::Reset => attr.reset(),
            SgrEffect::Foreground(fg) => attr.fg = fg,
            SgrEffect::Background(bg) => attr.bg = bg,
            SgrEffect::Text(text) => attr.text = text,
            SgrEffect::Unknown(code) => warn!(code, "unknown display attribute ignored"),
        }
    }

    fn move_cursor(&mut self, params: &[String]) {
        let [row, col] = params else {
            warn!(count = params.len(), "cursor-position expects two parameters");
            return;
        };
        match (
            decode_position(row, self.rows()),
            decode_position(col, self.cols()),
        ) {
            (Some(row), Some(col)) => self.cursor.move_to(row - 1, col - 1),
            _ => {
                warn!(row = %row, col = %col, "cursor position is not a number");
                self.cursor.unset();
            }
        }
    }

    fn draw_text(&mut self, params: &[String]) -> bool {
        let [text] = params else {
            warn!(count = params.len(), "draw-text expects one parameter");
            return false;
        };
        let Some(position) = self.cursor.position else {
            return false;
        };

        let mut content: String = text.chars().filter(|&ch| ch != '\n').collect();
        if let Some(index) = content.find(EC_COMMAND) {
            content.truncate(index);
        }
        if content.is_empty() {
            return false;
        }

        self.screen
            .draw(position.row, position.col, &content, self.cursor.attr);
        self.cursor.advance(content.chars().count());
        true
    }

    /// Text of one row, empty for an unknown row or before the first feed
    pub fn row_text(&self, row: usize) -> String {
        self.screen.row_text(row)
    }

    /// Text of every row, top to bottom
    pub fn whole_page(&self) -> Vec<String> {
        self.screen.text_rows()
    }

    /// Named colors of every cell
    pub fn colored_snapshot(&self) -> Result<ColoredScreen, SnapshotError> {
        ColoredScreen::capture(self.screen.grid())
    }

    /// Header, footer and workspace of the current screen
    pub fn layout(&self) -> Option<Layout> {
        page::detect_layout(&self.screen, &self.config)
    }

    /// Extract the current page
    pub fn page(&self, options: PageOptions) -> Page {
        page::analyze(&self.screen, &self.config, options)
    }

    /// Focusable entries with keys and values kept apart
    pub fn selectable_page(&self) -> Page {
        self.page(PageOptions::selectable())
    }

    /// Values of every entry whose key contains `key`, ignoring case, each
    /// followed by `;`. Empty while a popup is shown.
    pub fn value_by_key(&self, key: &str) -> String {
        let page = self.page(PageOptions::all());
        if page.is_popup {
            return String::new();
        }
        let needle = key.to_uppercase();
        page.entries
            .iter()
            .filter(|entry| entry.key.trim_matches(' ').to_uppercase().contains(&needle))
            .map(|entry| format!("{};", entry.value.trim_matches(' ')))
            .collect()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
