//! Common infrastructure shared by the lexer, driver and REPL

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter};
pub use span::Span;
