// SPDX-License-Identifier: Apache-2.0

use crate::shared::is_whitespace;

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// The read cursor of a single parse: the input slice and the current offset.
///
/// Bounds come from the slice length, so there is no terminator byte to
/// read past.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

pub trait InputBuffer {
    fn is_at_end(&self) -> bool;
    fn peek_byte(&self) -> Result<u8, Error>;
    fn consume_byte(&mut self) -> Result<u8, Error>;
}

impl InputBuffer for SliceInputBuffer<'_> {
    fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }
    fn peek_byte(&self) -> Result<u8, Error> {
        self.data.get(self.pos).copied().ok_or(Error::ReachedEnd)
    }
    fn consume_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek_byte()?;
        self.pos = self.pos.checked_add(1).ok_or(Error::InvalidSliceBounds)?;
        Ok(byte)
    }
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Byte at an absolute offset, without moving the cursor.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.data.get(pos).copied()
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }

    /// Moves the cursor to `pos`, which may be at most the data length.
    pub fn advance_to(&mut self, pos: usize) -> Result<(), Error> {
        if pos < self.pos || pos > self.data.len() {
            return Err(Error::InvalidSliceBounds);
        }
        self.pos = pos;
        Ok(())
    }

    /// Advances past any JSON whitespace. Never fails.
    pub fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.data.get(self.pos) {
            if !is_whitespace(byte) {
                break;
            }
            self.pos += 1;
        }
    }
}
