//! Monkey - lexical front end for the Monkey language
//!
//! This library turns Monkey source text into a stream of classified tokens.
//!
//! ## Architecture
//!
//! The crate is organized into:
//! - **Lexer** (`lexer/`): Cursor, scanner and token classification
//! - **Driver** (`driver/`): Whole-file token dumps and illegal-token diagnostics
//! - **REPL** (`repl`): Line-at-a-time token printer
//! - **Common** (`common/`): Shared infrastructure (errors, spans)

pub mod common;
pub mod driver;
pub mod lexer;
pub mod repl;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, DiagnosticReporter, Span};
pub use driver::{CompileContext, Driver, DriverConfig, TokenDump};
pub use lexer::{Lexer, Token, TokenKind};
