//! Serial byte decoding
//!
//! The firmware draws borders and arrows with code page 437 glyphs. They
//! are translated to ASCII look-alikes so that border patterns can be
//! written in plain ASCII. Every other byte maps to the character with the
//! same code point, so one byte always fills one cell.

/// Translate a CP437 box-drawing or arrow byte, if it is one
fn translate(byte: u8) -> Option<char> {
    match byte {
        0xBF | 0xC0 => Some('\\'),
        0xD9 | 0xDA => Some('/'),
        0xB3 => Some('|'),
        0xC4 => Some('-'),
        0x10 => Some('>'),
        0x18 => Some('^'),
        0x19 => Some('v'),
        _ => None,
    }
}

/// Decode console bytes with box-drawing translation
pub fn decode_console(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| translate(b).unwrap_or(b as char))
        .collect()
}

/// Decode bytes one-to-one (Latin-1)
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
