//! BIOS Screen Library
//!
//! Turns the VT100 byte stream of a firmware setup console into a
//! queryable model of the screen, for test tooling that drives setup menus
//! without a display. This crate provides:
//!
//! - `parser`: splits console output into attribute, cursor and text commands
//! - `core`: cell grid, attribute runs, cursor, colorized snapshots
//! - `page`: header/footer/popup detection and entry extraction
//! - `config`: per-firmware screen profiles
//!
//! [`Terminal`] ties them together as one screen session.

pub mod config;
pub mod core;
pub mod page;
pub mod parser;
mod terminal;

pub use config::{ConfigError, Profile, ProfileConfig, ProfileSpec};
pub use page::{Entry, EntryLayout, EntryType, Page, PageOptions};
pub use terminal::{decode_position, Terminal};
