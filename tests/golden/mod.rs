//! Serial capture builders for golden tests
//!
//! Builds the byte streams a firmware setup console sends for a full page
//! redraw: the clear-and-home preamble, SGR pen changes, absolute cursor
//! moves and text. Borders are drawn with code page 437 bytes, the way the
//! firmware sends them.

#![allow(dead_code)]

pub const CLIENT_COLS: usize = 100;
pub const CLIENT_ROWS: usize = 31;
pub const SERVER_COLS: usize = 80;
pub const SERVER_ROWS: usize = 25;

// CP437 box drawing
pub const HORIZONTAL: u8 = 0xC4;
pub const VERTICAL: u8 = 0xB3;
pub const TOP_LEFT: u8 = 0xDA;
pub const TOP_RIGHT: u8 = 0xBF;
pub const BOTTOM_LEFT: u8 = 0xC0;
pub const BOTTOM_RIGHT: u8 = 0xD9;
pub const ARROW_UP: u8 = 0x18;
pub const ARROW_DOWN: u8 = 0x19;

/// SGR pen: foreground, background and bold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub fg: u8,
    pub bg: u8,
    pub bold: bool,
}

impl Pen {
    pub const fn new(fg: u8, bg: u8) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub const BODY: Pen = Pen::new(34, 47);
pub const PLAIN: Pen = Pen::new(30, 47);
pub const HIGHLIGHT: Pen = Pen::new(37, 40);
pub const DISABLED: Pen = Pen::new(30, 47).bold();
pub const SCROLL: Pen = Pen::new(31, 47);
pub const POPUP: Pen = Pen::new(34, 46);
pub const POPUP_HIGHLIGHT: Pen = Pen::new(37, 46);
pub const FOOTER: Pen = Pen::new(37, 40);

/// A console capture under construction
#[derive(Debug, Clone, Default)]
pub struct Capture {
    bytes: Vec<u8>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the clear-and-home preamble of a full redraw
    pub fn redraw() -> Self {
        Self::new().raw(b"\x1b[2J\x1b[01;01H")
    }

    pub fn sgr(self, params: &str) -> Self {
        self.raw(format!("\x1b[{}m", params).as_bytes())
    }

    /// Reset the pen, then set its style and colors one code at a time
    pub fn pen(self, pen: Pen) -> Self {
        let capture = self.sgr("0");
        let capture = if pen.bold { capture.sgr("1") } else { capture };
        capture.sgr(&pen.fg.to_string()).sgr(&pen.bg.to_string())
    }

    /// Move to a 0-indexed position
    pub fn at(self, row: usize, col: usize) -> Self {
        assert!(row < 99 && col < 99, "cursor parameters are at most two digits");
        self.raw(format!("\x1b[{};{}H", row + 1, col + 1).as_bytes())
    }

    pub fn text(self, text: &str) -> Self {
        assert!(text.is_ascii(), "console text is single-byte");
        self.raw(text.as_bytes())
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Pen, cursor move and text in one go
    pub fn put(self, row: usize, col: usize, pen: Pen, text: &str) -> Self {
        self.pen(pen).at(row, col).text(text)
    }

    /// Paint a whole row with blanks
    pub fn fill(self, row: usize, cols: usize, pen: Pen) -> Self {
        self.put(row, 0, pen, &" ".repeat(cols))
    }

    /// A horizontal border `left` + lines + `right`, `width` cells wide
    pub fn border(self, row: usize, col: usize, pen: Pen, left: u8, right: u8, width: usize) -> Self {
        self.pen(pen).at(row, col).raw(&hline(left, right, width))
    }

    /// A framed row: vertical bars around `inner`
    pub fn framed(self, row: usize, col: usize, pen: Pen, inner: &str) -> Self {
        self.pen(pen)
            .at(row, col)
            .raw(&[VERTICAL])
            .text(inner)
            .raw(&[VERTICAL])
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// `left`, then horizontal lines, then `right`
pub fn hline(left: u8, right: u8, width: usize) -> Vec<u8> {
    let mut line = vec![HORIZONTAL; width.max(2)];
    line[0] = left;
    if let Some(last) = line.last_mut() {
        *last = right;
    }
    line
}

/// Key at column 1 and value at column `value_column`
pub fn entry(capture: Capture, row: usize, value_column: usize, pen: Pen, key: &str, value: &str) -> Capture {
    let capture = capture.put(row, 1, pen, key);
    if value.is_empty() {
        capture
    } else {
        capture.put(row, value_column, pen, value)
    }
}

// ============================================================================
// Client pages (100x31, value column 36, description column 70)
// ============================================================================

pub const CLIENT_TITLE: &str = "Main  Advanced  Security  Boot  Exit";

/// Client page chrome: dashed header, tab title, black footer
pub fn client_frame() -> Capture {
    let mut capture = Capture::redraw();
    for row in 0..CLIENT_ROWS {
        capture = capture.fill(row, CLIENT_COLS, BODY);
    }
    let mut capture = capture
        .border(1, 0, BODY, HORIZONTAL, HORIZONTAL, CLIENT_COLS)
        .put(2, 0, BODY, &format!("{:^100}", CLIENT_TITLE))
        .border(3, 0, BODY, HORIZONTAL, HORIZONTAL, CLIENT_COLS);
    for row in 28..CLIENT_ROWS {
        capture = capture.fill(row, CLIENT_COLS, FOOTER);
    }
    capture
        .put(29, 1, FOOTER, "F1  General Help      F9  Optimized Defaults")
        .put(30, 1, FOOTER, "ESC Exit              F10 Save & Exit")
}

/// A client main page with one entry of each kind and "Boot Mode" focused
pub fn client_main_page() -> Capture {
    let capture = client_frame().put(5, 1, PLAIN, "System Information");
    let capture = entry(capture, 6, 36, DISABLED, "BIOS Version", "1.0.7");
    let capture = capture.put(8, 1, BODY, "> Advanced Settings");
    let capture = capture
        .put(9, 1, HIGHLIGHT, "Boot Mode")
        .put(9, 36, BODY, "<UEFI>")
        .put(9, 70, BODY, "Select the boot");
    let capture = entry(capture, 10, 36, BODY, "Secure Boot", "[X]").put(10, 70, BODY, "mode.");
    let capture = entry(
        capture,
        11,
        36,
        BODY,
        "Intel Virtualization Technology for",
        "<Enabled>",
    );
    let capture = capture.put(12, 1, BODY, "Directed I/O");
    let capture = entry(capture, 13, 36, BODY, "Setup Password", "[Not Installed]");
    capture.pen(SCROLL).at(26, 98).raw(&[ARROW_DOWN])
}

/// The client main page with a two-option popup over it
pub fn client_popup_page() -> Capture {
    client_main_page()
        .border(10, 30, POPUP, TOP_LEFT, TOP_RIGHT, 20)
        .framed(11, 30, POPUP, &format!("{:^18}", "Disabled"))
        .framed(12, 30, POPUP_HIGHLIGHT, &format!("{:^18}", "Enabled"))
        .border(13, 30, POPUP, BOTTOM_LEFT, BOTTOM_RIGHT, 20)
}

/// A client screen without borders: only the body background
pub fn client_blank() -> Capture {
    let mut capture = Capture::redraw();
    for row in 0..CLIENT_ROWS {
        capture = capture.fill(row, CLIENT_COLS, BODY);
    }
    capture
}

// ============================================================================
// Server pages (80x25, value column 30, description column 57)
// ============================================================================

/// Server page chrome: boxed title and boxed footer
pub fn server_frame(title: &str) -> Capture {
    let mut capture = Capture::redraw();
    for row in 0..SERVER_ROWS {
        capture = capture.fill(row, SERVER_COLS, PLAIN);
    }
    capture
        .border(0, 0, PLAIN, TOP_LEFT, TOP_RIGHT, SERVER_COLS)
        .framed(1, 0, PLAIN, &format!("{:^78}", title))
        .border(2, 0, PLAIN, BOTTOM_LEFT, BOTTOM_RIGHT, SERVER_COLS)
        .border(21, 0, PLAIN, TOP_LEFT, TOP_RIGHT, SERVER_COLS)
        .framed(22, 0, PLAIN, &format!("{:<78}", " F1: Help   +/-: Change Opt.   F10: Save"))
        .pen(PLAIN)
        .at(23, 0)
        .raw(&[BOTTOM_LEFT])
        .raw(&[HORIZONTAL; 10])
        .text(" Esc: Exit ")
        .raw(&[HORIZONTAL; 57])
        .raw(&[BOTTOM_RIGHT])
}

/// A server "Advanced" page with "> Power Management" focused
pub fn server_advanced_page() -> Capture {
    let capture = server_frame("Advanced")
        .put(4, 1, BODY, "Processor Configuration")
        .put(5, 1, PLAIN, "> Memory Configuration")
        .put(6, 1, HIGHLIGHT, "> Power Management")
        .put(6, 57, PLAIN, "Configure power");
    let capture = entry(capture, 7, 30, PLAIN, "Hyper-Threading", "[X]").put(7, 57, PLAIN, "saving features.");
    let capture = entry(capture, 8, 30, PLAIN, "Turbo Mode", "<Enabled>");
    entry(capture, 10, 30, PLAIN, "Memory Speed", "2933 MT/s")
}

/// A server confirmation box without any focus
pub fn server_dialog_page() -> Capture {
    server_frame("Save & Exit")
        .border(9, 20, POPUP, TOP_LEFT, TOP_RIGHT, 40)
        .framed(10, 20, POPUP, &format!("{:^38}", "Save configuration and exit?"))
        .framed(11, 20, POPUP, &format!("{:^38}", "Press Enter to confirm"))
        .border(12, 20, POPUP, BOTTOM_LEFT, BOTTOM_RIGHT, 40)
}
