// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::json_number::parse_float;
use crate::parse_error::ParseError;
use crate::shared::is_token_end;
use crate::slice_input_buffer::SliceInputBuffer;

/// Error reported when a leading `0` is followed by something other than
/// `.`, `e`, `E` or the end of the token, e.g. `01`.
#[cfg(feature = "leading-zero-root-not-singular")]
const LEADING_ZERO_ERROR: ParseError = ParseError::RootNotSingular;
#[cfg(feature = "leading-zero-invalid")]
const LEADING_ZERO_ERROR: ParseError = ParseError::InvalidValue;

/// Stages of the number grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Sign,
    IntegerLeadingNonZero,
    IntegerZero,
    Fraction,
    Exponent,
    Done,
    Error(ParseError),
}

/// Grammar-acceptance scanner for a single JSON number token.
///
/// The scanner only reads; it never moves the input cursor. Its sole output
/// is the end offset of a valid token, or the error kind of the stage that
/// rejected it.
struct NumberScanner<'a, 'b> {
    input: &'b SliceInputBuffer<'a>,
    pos: usize,
}

impl<'a, 'b> NumberScanner<'a, 'b> {
    fn new(input: &'b SliceInputBuffer<'a>) -> Self {
        Self {
            input,
            pos: input.current_pos(),
        }
    }

    fn byte(&self) -> Option<u8> {
        self.input.byte_at(self.pos)
    }

    /// Consumes a run of digits, returning how many were consumed.
    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.byte() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Dispatch shared by both integer stages.
    fn after_integer(&self, error: ParseError) -> Num {
        match self.byte() {
            Some(b'.') => Num::Fraction,
            Some(b'e' | b'E') => Num::Exponent,
            other if is_token_end(other) => Num::Done,
            _ => Num::Error(error),
        }
    }

    fn sign(&mut self) -> Num {
        if self.byte() == Some(b'-') {
            self.pos += 1;
        }
        match self.byte() {
            Some(b'1'..=b'9') => Num::IntegerLeadingNonZero,
            Some(b'0') => Num::IntegerZero,
            _ => Num::Error(ParseError::InvalidValue),
        }
    }

    fn integer_leading_non_zero(&mut self) -> Num {
        self.skip_digits();
        self.after_integer(ParseError::InvalidValue)
    }

    fn integer_zero(&mut self) -> Num {
        self.pos += 1;
        self.after_integer(LEADING_ZERO_ERROR)
    }

    fn fraction(&mut self) -> Num {
        self.pos += 1; // '.'
        if self.skip_digits() == 0 {
            return Num::Error(ParseError::InvalidValue);
        }
        match self.byte() {
            Some(b'e' | b'E') => Num::Exponent,
            other if is_token_end(other) => Num::Done,
            _ => Num::Error(ParseError::InvalidValue),
        }
    }

    fn exponent(&mut self) -> Num {
        self.pos += 1; // 'e' or 'E'
        if let Some(b'+' | b'-') = self.byte() {
            self.pos += 1;
        }
        if self.skip_digits() == 0 {
            return Num::Error(ParseError::InvalidValue);
        }
        if is_token_end(self.byte()) {
            Num::Done
        } else {
            Num::Error(ParseError::InvalidValue)
        }
    }

    /// Runs the state machine to completion.
    fn scan(mut self) -> Result<usize, ParseError> {
        let mut state = Num::Sign;
        loop {
            trace!(
                "Pos: {}, Byte: {:?}, State: {:?}",
                self.pos,
                self.byte().map(char::from),
                state
            );
            state = match state {
                Num::Sign => self.sign(),
                Num::IntegerLeadingNonZero => self.integer_leading_non_zero(),
                Num::IntegerZero => self.integer_zero(),
                Num::Fraction => self.fraction(),
                Num::Exponent => self.exponent(),
                Num::Done => return Ok(self.pos),
                Num::Error(err) => return Err(err),
            };
        }
    }
}

/// Returns the end offset of the number token starting at the cursor.
pub fn scan_number(input: &SliceInputBuffer<'_>) -> Result<usize, ParseError> {
    NumberScanner::new(input).scan()
}

/// Scans, converts and consumes the number token at the cursor.
///
/// The cursor is advanced to the end of the span the conversion consumed,
/// which must coincide with the end the scanner accepted.
pub fn parse_number(input: &mut SliceInputBuffer<'_>) -> Result<f64, ParseError> {
    let start = input.current_pos();
    let end = scan_number(input)?;
    let number_bytes = input.slice(start, end)?;
    let (value, consumed) = parse_float(number_bytes)?;
    let converted_end = start + consumed;
    if converted_end != end {
        debug!("Conversion ended at {converted_end}, scanner at {end}");
        return Err(ParseError::InvalidValue);
    }
    input.advance_to(converted_end)?;
    debug!("Number {value} at {start}..{end}");
    Ok(value)
}
