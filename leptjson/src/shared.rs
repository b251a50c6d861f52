// SPDX-License-Identifier: Apache-2.0

/// Shared helpers for the scanner and the driver
use crate::ParseError;

/// JSON insignificant whitespace: space, tab, newline and carriage return.
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// True when `byte` ends a number token: end of input or whitespace.
pub fn is_token_end(byte: Option<u8>) -> bool {
    match byte {
        None => true,
        Some(b) => is_whitespace(b),
    }
}

/// Number tokens are pure ASCII once accepted by the scanner, so a UTF-8
/// failure here means the span was wrong.
pub fn from_utf8(bytes: &[u8]) -> Result<&str, ParseError> {
    core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidValue)
}
