// SPDX-License-Identifier: Apache-2.0

use log::debug;

use crate::literal::{self, parse_literal};
use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::{InputBuffer, SliceInputBuffer};
use crate::value::Value;

/// Parses a single JSON value from a slice.
///
/// A parser owns the read cursor for exactly one document and is consumed by
/// [`SliceParser::parse`], so no position carries over between parses.
// Lifetime 'a is the input buffer lifetime
pub struct SliceParser<'a> {
    buffer: SliceInputBuffer<'a>,
}

impl<'a> SliceParser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use leptjson::{SliceParser, Value};
    /// let parser = SliceParser::new(" -1.5e3 ");
    /// assert_eq!(parser.parse(), Ok(Value::Number(-1500.0)));
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// # Example
    /// ```
    /// # use leptjson::{SliceParser, Value};
    /// let parser = SliceParser::new_from_slice(b"null");
    /// assert_eq!(parser.parse(), Ok(Value::Null));
    /// ```
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        SliceParser {
            buffer: SliceInputBuffer::new(input),
        }
    }

    /// Parses the whole input as exactly one value surrounded by optional
    /// whitespace.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let result = self.parse_root();
        if let Err(err) = &result {
            debug!("Parse failed: {:?} at {}", err, self.buffer.current_pos());
        }
        result
    }

    fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.buffer.skip_whitespace();
        let value = self.parse_value()?;
        self.buffer.skip_whitespace();
        if !self.buffer.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    /// Dispatches on the byte at the cursor.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let first = self.buffer.peek_byte()?;
        debug!(
            "Dispatching on {:?} at {}",
            first as char,
            self.buffer.current_pos()
        );
        match first {
            b't' => parse_literal(&mut self.buffer, &literal::TRUE),
            b'f' => parse_literal(&mut self.buffer, &literal::FALSE),
            b'n' => parse_literal(&mut self.buffer, &literal::NULL),
            _ => parse_number(&mut self.buffer).map(Value::Number),
        }
    }
}
