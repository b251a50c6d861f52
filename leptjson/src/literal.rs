// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;
use crate::slice_input_buffer::{InputBuffer, SliceInputBuffer};
use crate::value::Value;

/// A fixed JSON literal and the value it produces.
#[derive(Debug, Clone, Copy)]
pub struct Literal {
    pub spelling: &'static [u8],
    pub value: Value,
}

pub const TRUE: Literal = Literal {
    spelling: b"true",
    value: Value::True,
};
pub const FALSE: Literal = Literal {
    spelling: b"false",
    value: Value::False,
};
pub const NULL: Literal = Literal {
    spelling: b"null",
    value: Value::Null,
};

/// Matches `literal` at the cursor, consuming it on success.
///
/// The caller has already chosen the literal from its first byte, so any
/// mismatch, including running out of input, is [`ParseError::InvalidValue`].
/// The cursor is left wherever the mismatch was found.
pub fn parse_literal(
    input: &mut SliceInputBuffer<'_>,
    literal: &Literal,
) -> Result<Value, ParseError> {
    for &expected in literal.spelling {
        match input.consume_byte() {
            Ok(byte) if byte == expected => {}
            _ => return Err(ParseError::InvalidValue),
        }
    }
    Ok(literal.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_each_literal() {
        for (text, literal) in [("true", TRUE), ("false", FALSE), ("null", NULL)] {
            let mut buffer = SliceInputBuffer::new(text.as_bytes());
            assert_eq!(parse_literal(&mut buffer, &literal), Ok(literal.value));
            assert_eq!(buffer.current_pos(), text.len());
        }
    }

    #[test]
    fn test_match_stops_after_literal() {
        let mut buffer = SliceInputBuffer::new(b"nullx");
        assert_eq!(parse_literal(&mut buffer, &NULL), Ok(Value::Null));
        assert_eq!(buffer.current_pos(), 4);
        assert_eq!(buffer.peek_byte(), Ok(b'x'));
    }

    #[test]
    fn test_truncated_literal() {
        let mut buffer = SliceInputBuffer::new(b"tru");
        assert_eq!(
            parse_literal(&mut buffer, &TRUE),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_mismatched_literal() {
        let mut buffer = SliceInputBuffer::new(b"fals3");
        assert_eq!(
            parse_literal(&mut buffer, &FALSE),
            Err(ParseError::InvalidValue)
        );

        let mut buffer = SliceInputBuffer::new(b"nUll");
        assert_eq!(
            parse_literal(&mut buffer, &NULL),
            Err(ParseError::InvalidValue)
        );
    }
}
