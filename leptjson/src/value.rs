// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::ParseError;

/// The tag of a [`Value`]: which kind of JSON value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    True,
    False,
    Number,
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ValueType::Null => "null",
            ValueType::True => "true",
            ValueType::False => "false",
            ValueType::Number => "number",
        })
    }
}

/// A parsed JSON value.
///
/// The numeric payload only exists on the `Number` variant, so it cannot be
/// read while another variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A JSON number, stored as `f64`.
    Number(f64),
}

impl Value {
    /// Parses `input` into this value in place.
    ///
    /// The value is reset to [`Value::Null`] first, so on error no earlier
    /// content remains visible.
    ///
    /// # Example
    /// ```
    /// use leptjson::{ParseError, Value};
    /// let mut v = Value::True;
    /// assert_eq!(v.parse("1e400"), Err(ParseError::NumberTooBig));
    /// assert_eq!(v, Value::Null);
    /// ```
    pub fn parse(&mut self, input: &str) -> Result<(), ParseError> {
        *self = Value::Null;
        *self = crate::parse(input)?;
        Ok(())
    }

    /// Returns the tag of this value.
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::True => ValueType::True,
            Value::False => ValueType::False,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    /// Panics if the value is not a number. Use [`Value::as_f64`] when the
    /// kind is not already known.
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("get_number called on a {} value", other.get_type()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl TryFrom<&[u8]> for Value {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        crate::parse_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_type() {
        assert_eq!(Value::Null.get_type(), ValueType::Null);
        assert_eq!(Value::True.get_type(), ValueType::True);
        assert_eq!(Value::False.get_type(), ValueType::False);
        assert_eq!(Value::Number(1.5).get_type(), ValueType::Number);
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Number(-2.5).get_number(), -2.5);
        assert_eq!(Value::Number(-2.5).as_f64(), Some(-2.5));
        assert_eq!(Value::True.as_f64(), None);
        assert_eq!(Value::True.as_bool(), Some(true));
        assert_eq!(Value::False.as_bool(), Some(false));
        assert_eq!(Value::Null.as_bool(), None);
        assert!(!Value::Number(0.0).is_null());
    }

    #[test]
    #[should_panic(expected = "get_number called on a true value")]
    fn test_get_number_on_non_number_panics() {
        Value::True.get_number();
    }

    #[test]
    fn test_parse_in_place() {
        let mut v = Value::Null;
        assert_eq!(v.parse(" 3.5 "), Ok(()));
        assert_eq!(v, Value::Number(3.5));

        assert_eq!(v.parse("false"), Ok(()));
        assert_eq!(v, Value::False);

        assert_eq!(v.parse("1 2"), Err(ParseError::RootNotSingular));
        assert_eq!(v, Value::Null);
    }

    #[test]
    fn test_from_str_and_try_from() {
        assert_eq!("true".parse::<Value>(), Ok(Value::True));
        assert_eq!("".parse::<Value>(), Err(ParseError::ExpectValue));
        assert_eq!(Value::try_from(&b"-4"[..]), Ok(Value::Number(-4.0)));
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Null.to_string(), "null");
        assert_eq!(ValueType::Number.to_string(), "number");
    }
}
