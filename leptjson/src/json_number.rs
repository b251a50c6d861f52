// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::ParseError;

/// Converts an accepted number token to `f64`.
///
/// The token must already have passed the number scanner; this is only the
/// decimal-to-binary conversion step. Returns the value together with the
/// number of bytes the conversion consumed, which is always the whole token.
///
/// A result that rounds to infinity of either sign is reported as
/// [`ParseError::NumberTooBig`]. Underflow rounds toward zero and succeeds.
pub fn parse_float(bytes: &[u8]) -> Result<(f64, usize), ParseError> {
    let s = crate::shared::from_utf8(bytes)?;
    match f64::from_str(s) {
        Ok(val) if val.is_infinite() => Err(ParseError::NumberTooBig),
        Ok(val) => Ok((val, s.len())),
        Err(_) => Err(ParseError::InvalidValue),
    }
}
