// SPDX-License-Identifier: Apache-2.0

//! A minimal JSON value parser.
//!
//! Parses one JSON document consisting of `null`, `true`, `false` or a
//! number, surrounded by optional whitespace, into a [`Value`].
//!
//! ```
//! use leptjson::{parse, ParseError, Value, ValueType};
//!
//! let v = parse("  -1.5e3  ").unwrap();
//! assert_eq!(v.get_type(), ValueType::Number);
//! assert_eq!(v.get_number(), -1500.0);
//!
//! assert_eq!(parse("truee"), Err(ParseError::RootNotSingular));
//! assert_eq!(parse("1e400"), Err(ParseError::NumberTooBig));
//! ```

#![cfg_attr(not(test), no_std)]

// Compile-time configuration validation
mod config_check;

mod shared;

mod slice_input_buffer;

mod json_number;

mod number_parser;

mod literal;

mod parse_error;
pub use parse_error::ParseError;

mod value;
pub use value::{Value, ValueType};

mod slice_parser;
pub use slice_parser::SliceParser;

/// Parses `input` as a single JSON value.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    SliceParser::new(input).parse()
}

/// Parses a byte slice as a single JSON value.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    SliceParser::new_from_slice(input).parse()
}
