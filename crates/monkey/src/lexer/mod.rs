//! Lexer module for tokenizing Monkey source code

mod cursor;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use scanner::Lexer;
pub use token::{classify, is_digit, is_letter, Token, TokenKind};
