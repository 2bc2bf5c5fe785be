//! Hand-written scanner

use super::cursor::Cursor;
use super::token::{classify, is_digit, is_letter, Token, TokenKind};
use crate::common::Span;
use std::iter::FusedIterator;

/// Lexer for Monkey source code
///
/// Produces one token per [`next_token`](Self::next_token) call and returns
/// `EndOfInput` forever once the source is exhausted. Bytes that start no
/// token come back as `Illegal` tokens; scanning never fails.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer positioned on the first byte of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Token<'a> {
        self.next_spanned().0
    }

    /// Get the next token together with the byte range it was read from
    pub fn next_spanned(&mut self) -> (Token<'a>, Span) {
        self.skip_whitespace();

        let start = self.cursor.pos();
        let Some(byte) = self.cursor.current() else {
            return (Token::end_of_input(), Span::new(start, start));
        };

        if let Some(kind) = TokenKind::fixed_lexeme(byte) {
            self.cursor.advance();
            return (Token::new(kind, self.cursor.slice_from(start)), self.span_from(start));
        }

        // The identifier and integer loops stop on the first byte past the
        // lexeme, so neither takes the trailing advance the other arms do.
        if is_letter(byte) {
            let literal = self.read_identifier();
            return (Token::new(classify(literal), literal), self.span_from(start));
        }

        if is_digit(byte) {
            let literal = self.read_integer();
            return (Token::new(TokenKind::Integer, literal), self.span_from(start));
        }

        self.cursor.advance_char();
        let literal = self.cursor.slice_from(start);
        tracing::trace!(offset = start, literal, "illegal character");
        (Token::new(TokenKind::Illegal, literal), self.span_from(start))
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_letter);
        self.cursor.slice_from(start)
    }

    fn read_integer(&mut self) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_digit);
        self.cursor.slice_from(start)
    }

    fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.cursor.pos())
    }

    /// Tokenize the entire source, ending with a single `EndOfInput` token
    pub fn tokenize_all(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_end_of_input();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Cursor state, for inspection
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Get the source being lexed
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

/// Yields tokens up to, but not including, `EndOfInput`
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_end_of_input()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
