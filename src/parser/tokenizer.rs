//! Escape-segment tokenizer
//!
//! The firmware console only emits a tiny subset of VT100: SGR attribute
//! changes, absolute cursor positioning and text. Rather than running a
//! full VT500 state machine, the stream is split on ESC and each segment is
//! classified against a short ordered pattern table:
//!
//! ```text
//! ESC[31m           -> SetAttribute("31")
//! ESC[12;34HMain    -> CursorPosition("12", "34"), DrawText("Main")
//! ESC[?25l          -> (dropped)
//! ```
//!
//! Segments that match no pattern are dropped. Commands keep the order of
//! the byte stream.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::actions::{Command, CommandKind};
use super::noise;
use crate::core::charset::decode_latin1;

const ESC: char = '\x1b';

/// Screen-clear-and-home preamble sent before every full redraw
const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[01;01H";

/// Only this many leading characters of a segment are matched
const MATCH_WINDOW: usize = 100;

/// Which console produced the stream. The pre-OS shell needs more lenient
/// patterns because it mixes commands with free-running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleContext {
    /// Firmware setup (in-BIOS) console
    #[default]
    Setup,
    /// Pre-OS shell console
    Shell,
}

/// One row of the command pattern table
struct CommandPattern {
    kind: CommandKind,
    regex: Regex,
    /// Delimiters that split a match into raw parameter pieces, in order
    markers: &'static [&'static str],
}

impl CommandPattern {
    fn new(kind: CommandKind, pattern: &str, markers: &'static [&'static str]) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("built-in command pattern is valid"),
            markers,
        }
    }
}

fn setup_patterns() -> &'static [CommandPattern] {
    static PATTERNS: OnceLock<Vec<CommandPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            CommandPattern::new(
                CommandKind::SetAttribute,
                r"^[0-9]{1,2}(?:;[0-9]{1,2})*m$",
                &["m"],
            ),
            CommandPattern::new(
                CommandKind::CursorPosition,
                r"^[^\r\n]{1,2};[^\r\n]{1,2}H[^\r\n]*$",
                &[";", "H"],
            ),
        ]
    })
}

fn shell_patterns() -> &'static [CommandPattern] {
    static PATTERNS: OnceLock<Vec<CommandPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            CommandPattern::new(
                CommandKind::SetAttribute,
                r"^[0-9]{1,2}(?:;[0-9]{1,2})*m(?s:.*)$",
                &["m"],
            ),
            CommandPattern::new(
                CommandKind::CursorPosition,
                r"^[^\r\n]{1,2};[^\r\n]{1,2}H(?s:.*)$",
                &[";", "H"],
            ),
        ]
    })
}

/// Split `text` at each marker in turn. The text after the last marker
/// found is always the final piece.
fn split_markers<'a>(text: &'a str, markers: &[&str]) -> Vec<&'a str> {
    let mut pieces = Vec::with_capacity(markers.len() + 1);
    let mut start = 0;
    for marker in markers {
        if let Some(at) = text[start..].find(marker) {
            pieces.push(&text[start..start + at]);
            start += at + marker.len();
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// The first `MATCH_WINDOW` characters of a segment
fn match_window(segment: &str) -> &str {
    match segment.char_indices().nth(MATCH_WINDOW) {
        Some((at, _)) => &segment[..at],
        None => segment,
    }
}

/// Turn a leading run of non-escape text into a draw command and return
/// the rest of the input, which is either empty or starts with ESC.
pub fn leading_text<'a>(input: &'a str, commands: &mut Vec<Command>) -> &'a str {
    match input.find(ESC) {
        Some(0) => input,
        Some(at) => {
            commands.push(Command::draw_text(&input[..at]));
            &input[at..]
        }
        None => {
            if !input.is_empty() {
                commands.push(Command::draw_text(input));
            }
            ""
        }
    }
}

/// Splits console output into commands
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    context: ConsoleContext,
    strip_ec_logs: bool,
}

impl Tokenizer {
    pub fn new(context: ConsoleContext) -> Self {
        Self {
            context,
            strip_ec_logs: false,
        }
    }

    /// In shell context, also cut out embedded-controller log spans
    pub fn with_ec_log_stripping(mut self, enabled: bool) -> Self {
        self.strip_ec_logs = enabled;
        self
    }

    fn patterns(&self) -> &'static [CommandPattern] {
        match self.context {
            ConsoleContext::Setup => setup_patterns(),
            ConsoleContext::Shell => shell_patterns(),
        }
    }

    /// Tokenize input, treating any leading text before the first ESC as a
    /// draw command.
    pub fn tokenize(&self, input: &str) -> Vec<Command> {
        let mut commands = Vec::new();
        let rest = leading_text(input, &mut commands);
        commands.extend(self.split(rest));
        commands
    }

    /// Tokenize the escape segments of the input. Text before the first
    /// ESC is not a segment and is ignored.
    pub fn split(&self, input: &str) -> Vec<Command> {
        let input = input.replace(CLEAR_AND_HOME, "");
        let mut commands = Vec::new();

        for raw in input.split(ESC).filter(|s| !s.is_empty()) {
            let mut segment = raw.to_string();
            match self.context {
                ConsoleContext::Setup => noise::strip_setup_logs(&mut segment),
                ConsoleContext::Shell if self.strip_ec_logs => noise::strip_ec_logs(&mut segment),
                ConsoleContext::Shell => {}
            }
            let segment = segment.strip_prefix('[').unwrap_or(&segment);
            self.classify(segment, &mut commands);
        }

        commands
    }

    fn classify(&self, segment: &str, commands: &mut Vec<Command>) {
        let window = match_window(segment);
        let Some(pattern) = self.patterns().iter().find(|p| p.regex.is_match(window)) else {
            trace!(segment = %segment.escape_debug(), "unsupported segment dropped");
            return;
        };

        let pieces = split_markers(segment, pattern.markers);
        match pieces.as_slice() {
            [first, second, rest @ ..] if !rest.is_empty() => {
                commands.push(Command::new(
                    pattern.kind,
                    vec![first.to_string(), second.to_string()],
                ));
                commands.push(Command::draw_text(rest.concat()));
            }
            [param, text] => {
                if pattern.kind == CommandKind::SetAttribute {
                    commands.extend(param.split(';').map(Command::set_attribute));
                } else {
                    commands.push(Command::new(pattern.kind, vec![param.to_string()]));
                }
                if !text.is_empty() {
                    commands.push(Command::draw_text(*text));
                }
            }
            _ => trace!(segment = %segment.escape_debug(), "segment without parameters dropped"),
        }
    }
}

/// Whether setup-console bytes would draw anything at all
pub fn has_draw_content(bytes: &[u8]) -> bool {
    Tokenizer::new(ConsoleContext::Setup)
        .split(&decode_latin1(bytes))
        .iter()
        .any(Command::is_visible_draw)
}

/// Plain text of pre-OS shell output: every drawn string, in order
pub fn shell_text(bytes: &[u8], strip_ec_logs: bool) -> String {
    Tokenizer::new(ConsoleContext::Shell)
        .with_ec_log_stripping(strip_ec_logs)
        .tokenize(&decode_latin1(bytes))
        .into_iter()
        .filter(|c| c.kind == CommandKind::DrawText && c.params.len() == 1)
        .flat_map(|c| c.params)
        .collect()
}
