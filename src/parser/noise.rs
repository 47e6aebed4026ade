//! Firmware log noise filters
//!
//! The embedded controller and flash drivers print diagnostic lines onto
//! the same serial port as the setup screen. Those lines are cut out of a
//! segment before it is classified.

const CRLF: &str = "\r\n";
const EC_COMMAND: &str = "EC Command:";
const EC_DATA: &str = "Receiving EC Data:";
const FVB_WRITE: &str = "FvbProtocolWrite:";

/// Remove one span from `marker` up to and including the last CRLF of the
/// segment. Nothing is removed unless that CRLF follows the marker.
fn strip_once(segment: &mut String, marker: &str) {
    let (Some(start), Some(end)) = (segment.find(marker), segment.rfind(CRLF)) else {
        return;
    };
    if end < start {
        return;
    }
    segment.replace_range(start..end + CRLF.len(), "");
}

/// In-setup filter: drop one EC command span and one flash-write span
pub fn strip_setup_logs(segment: &mut String) {
    strip_once(segment, EC_COMMAND);
    strip_once(segment, FVB_WRITE);
}

/// Shell filter: repeatedly drop `EC Command:` ... `Receiving EC Data:` ...
/// CRLF spans until none is complete.
pub fn strip_ec_logs(segment: &mut String) {
    loop {
        let Some(start) = segment.find(EC_COMMAND) else {
            break;
        };
        let Some(data) = segment[start..].find(EC_DATA).map(|i| start + i) else {
            break;
        };
        let Some(end) = segment[data..].find(CRLF).map(|i| data + i + CRLF.len()) else {
            break;
        };
        segment.replace_range(start..end, "");
    }
}
