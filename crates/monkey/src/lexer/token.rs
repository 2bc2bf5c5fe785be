//! Token definitions and lexeme classification

use std::fmt;

/// A classified lexeme borrowed from the source being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, literal: &'a str) -> Self {
        Self { kind, literal }
    }

    /// The terminal token; its literal is always empty
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.kind, self.literal)
        }
    }
}

/// All token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Special ===
    Illegal,
    EndOfInput,

    // === Identifiers and literals ===
    Identifier,
    Integer,

    // === Operators ===
    Assign,
    Plus,

    // === Punctuation ===
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // === Keywords ===
    Function,
    Let,
}

/// Reserved words and the kind each one scans as
static KEYWORDS: [(&str, TokenKind); 2] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
];

/// Classify an identifier-shaped lexeme as a keyword or a plain identifier
pub fn classify(lexeme: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == lexeme)
        .map_or(TokenKind::Identifier, |&(_, kind)| kind)
}

/// `a`-`z`, `A`-`Z` or `_`
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// `0`-`9`
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

impl TokenKind {
    /// Kind of a single-character operator or punctuation byte
    pub fn fixed_lexeme(byte: u8) -> Option<TokenKind> {
        let kind = match byte {
            b'=' => TokenKind::Assign,
            b'+' => TokenKind::Plus,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if this kind is produced by a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let)
    }

    /// Upper-case name used in token dumps
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keywords() {
        assert_eq!(classify("let"), TokenKind::Let);
        assert_eq!(classify("fn"), TokenKind::Function);
        for (word, kind) in &KEYWORDS {
            assert_eq!(classify(word), *kind);
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_non_keywords_are_identifiers() {
        assert_eq!(classify("five"), TokenKind::Identifier);
        assert_eq!(classify("Let"), TokenKind::Identifier);
        assert_eq!(classify("lets"), TokenKind::Identifier);
        assert_eq!(classify("function"), TokenKind::Identifier);
        assert_eq!(classify("_"), TokenKind::Identifier);
        assert_eq!(classify(""), TokenKind::Identifier);
    }

    #[test]
    fn test_character_classes() {
        assert!(is_letter(b'a') && is_letter(b'z'));
        assert!(is_letter(b'A') && is_letter(b'Z'));
        assert!(is_letter(b'_'));
        assert!(!is_letter(b'0') && !is_letter(b'@') && !is_letter(0));
        assert!(!is_letter(0xC3));

        assert!(is_digit(b'0') && is_digit(b'9'));
        assert!(!is_digit(b'a') && !is_digit(b'/') && !is_digit(b':'));
    }

    #[test]
    fn test_fixed_lexemes() {
        let expected = [
            (b'=', TokenKind::Assign),
            (b'+', TokenKind::Plus),
            (b',', TokenKind::Comma),
            (b';', TokenKind::Semicolon),
            (b'(', TokenKind::LParen),
            (b')', TokenKind::RParen),
            (b'{', TokenKind::LBrace),
            (b'}', TokenKind::RBrace),
        ];
        for (byte, kind) in expected {
            assert_eq!(TokenKind::fixed_lexeme(byte), Some(kind));
        }
        assert_eq!(TokenKind::fixed_lexeme(b'-'), None);
        assert_eq!(TokenKind::fixed_lexeme(b'@'), None);
        assert_eq!(TokenKind::fixed_lexeme(b'a'), None);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Let, "let").to_string(), "LET let");
        assert_eq!(Token::new(TokenKind::Assign, "=").to_string(), "ASSIGN =");
        assert_eq!(Token::end_of_input().to_string(), "EOF");
        assert!(Token::end_of_input().is_end_of_input());
    }

    proptest! {
        #[test]
        fn classify_is_identifier_outside_keyword_table(word in "[a-zA-Z_]{1,12}") {
            let kind = classify(&word);
            if word == "let" || word == "fn" {
                prop_assert!(kind.is_keyword());
            } else {
                prop_assert_eq!(kind, TokenKind::Identifier);
            }
        }
    }
}
