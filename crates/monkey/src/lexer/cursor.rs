//! Byte cursor over the source being scanned.
//!
//! The cursor tracks three things: `pos`, the index of the byte under
//! examination; `lookahead`, the index that the next [`Cursor::advance`]
//! will move to; and `current`, the byte at `pos`. Once `lookahead` runs
//! past the end of the source, `current` becomes `None`, the end sentinel.
//! An interior NUL byte is still `Some(0)` and never mistaken for the end.
//!
//! `lookahead == pos + 1` holds after every transition.

/// Cursor over an immutable source buffer
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    lookahead: usize,
    current: Option<u8>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first byte of `source`.
    ///
    /// Construction performs the first [`advance`](Self::advance), so the
    /// cursor is ready to scan without further setup.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            pos: 0,
            lookahead: 0,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// Move to the next byte, or onto the end sentinel.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.source.as_bytes().get(self.lookahead).copied();
        self.pos = self.lookahead;
        self.lookahead += 1;
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Always stops at the end sentinel.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current.is_some_and(&pred) {
            self.advance();
        }
    }

    /// Advance past the whole UTF-8 character starting at the current byte.
    ///
    /// Moves one byte at a time so the `lookahead` relation is kept. Does
    /// nothing at the end of input.
    pub fn advance_char(&mut self) {
        let width = self.source[self.pos..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        for _ in 0..width {
            self.advance();
        }
    }

    /// The byte under the cursor, `None` at the end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Byte offset of the current byte.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte offset the next advance moves to.
    #[inline]
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Source text from `start` up to the current position.
    ///
    /// # Contract
    ///
    /// `start` must be a character boundary at or before `pos`. Every token
    /// start the scanner records is one.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds position {}", self.pos);
        &self.source[start..self.pos]
    }
}
