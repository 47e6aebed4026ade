//! Console stream tokenizer
//!
//! Converts firmware console output into an ordered list of commands.
//! Only attribute-set, cursor-position and draw-text commands are produced;
//! everything else in the stream is dropped.

mod actions;
mod noise;
mod tokenizer;

pub use actions::{Command, CommandKind};
pub use tokenizer::{has_draw_content, leading_text, shell_text, ConsoleContext, Tokenizer};
