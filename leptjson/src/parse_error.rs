// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// Errors that can occur during JSON parsing.
///
/// The kinds are mutually exclusive: the first failure encountered is the one
/// reported, and no partially parsed value is ever returned alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    ExpectValue,
    /// A literal or number token is malformed.
    InvalidValue,
    /// A valid value is followed by more non-whitespace content.
    RootNotSingular,
    /// A well-formed number does not fit in an `f64`.
    NumberTooBig,
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            slice_input_buffer::Error::ReachedEnd => ParseError::ExpectValue,
            slice_input_buffer::Error::InvalidSliceBounds => ParseError::InvalidValue,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => f.write_str("expected a value"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::RootNotSingular => f.write_str("root value is not singular"),
            ParseError::NumberTooBig => f.write_str("number too big"),
        }
    }
}

impl core::error::Error for ParseError {}
