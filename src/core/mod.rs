//! Screen Core Module
//!
//! Platform-independent screen state. This module contains:
//! - SGR attribute tables and cell representation
//! - The fixed-size cell grid and its attribute runs
//! - Cursor and pen state
//! - Colorized snapshot generation
//!
//! The core is deterministic: given the same sequence of commands it always
//! produces the same grid and the same runs.

pub mod charset;
mod cell;
mod color;
mod cursor;
mod grid;
mod line;
mod screen;
mod snapshot;

pub use cell::{Attr, AttrFilter, Cell};
pub use color::{Color, SgrEffect, TextStyle, BG_DEFAULT, FG_DEFAULT, TEXT_DEFAULT};
pub use cursor::{Cursor, Position};
pub use grid::{Grid, Row};
pub use line::{merge, Segment};
pub use screen::Screen;
pub use snapshot::{ColoredCell, ColoredScreen, SnapshotError};
