//! Token dump driver
//!
//! Runs the lexer over a whole source file, renders the token stream and
//! turns `Illegal` tokens into diagnostics when the configuration asks for it.

use std::fmt::Write as _;

use crate::common::{CompileError, CompileResult, DiagnosticReporter, Span};
use crate::lexer::{Lexer, Token, TokenKind};

/// Configuration options passed to the driver
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Prefix every dumped token with its byte range
    pub show_spans: bool,
    /// Treat any `Illegal` token as a failure
    pub deny_illegal: bool,
    pub verbose: bool,
}

/// Compilation context providing access to diagnostics and file info
pub struct CompileContext<'a> {
    pub filename: String,
    pub file_id: usize,
    pub reporter: &'a DiagnosticReporter,
}

impl<'a> CompileContext<'a> {
    pub fn new(filename: String, file_id: usize, reporter: &'a DiagnosticReporter) -> Self {
        Self { filename, file_id, reporter }
    }
}

/// Tokens of one source together with where they came from
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDump<'a> {
    pub tokens: Vec<(Token<'a>, Span)>,
}

impl<'a> TokenDump<'a> {
    /// Scan `source` to the end; the last entry is always `EndOfInput`
    pub fn scan(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let (token, span) = lexer.next_spanned();
            let is_eof = token.is_end_of_input();
            tokens.push((token, span));
            if is_eof {
                break;
            }
        }
        Self { tokens }
    }

    pub fn illegal(&self) -> impl Iterator<Item = &(Token<'a>, Span)> + '_ {
        self.tokens.iter().filter(|(t, _)| t.kind == TokenKind::Illegal)
    }

    /// One line per token, `KIND literal`
    pub fn render(&self, show_spans: bool, include_eof: bool) -> String {
        let mut out = String::new();
        for (token, span) in &self.tokens {
            if token.is_end_of_input() && !include_eof {
                continue;
            }
            if show_spans {
                let _ = write!(out, "{span} ");
            }
            let _ = writeln!(out, "{}", format_token(token));
        }
        out
    }
}

/// Display a token, escaping control characters in illegal literals
pub fn format_token(token: &Token<'_>) -> String {
    match token.kind {
        TokenKind::Illegal => format!("{} {}", token.kind, token.literal.escape_debug()),
        _ => token.to_string(),
    }
}

/// Driver that lexes sources and renders token dumps
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Lex `source` and return its rendered token dump
    pub fn dump_tokens(&self, source: &str, ctx: &CompileContext) -> CompileResult<String> {
        let dump = TokenDump::scan(source);
        let illegal: Vec<CompileError> = dump
            .illegal()
            .map(|(token, span)| {
                CompileError::lexer(
                    format!("illegal character '{}'", token.literal.escape_debug()),
                    *span,
                )
            })
            .collect();

        if self.config.verbose {
            tracing::info!(
                file = %ctx.filename,
                tokens = dump.tokens.len(),
                illegal = illegal.len(),
                "lexed source"
            );
        }

        if let Some(first) = illegal.first() {
            if self.config.deny_illegal {
                for err in &illegal {
                    ctx.reporter.report_error(ctx.file_id, err);
                }
                let span = first.span().unwrap_or_default();
                return Err(CompileError::lexer(
                    format!("{} illegal character(s) in {}", illegal.len(), ctx.filename),
                    span,
                ));
            }
            for err in &illegal {
                tracing::warn!("{err}");
            }
        }

        Ok(dump.render(self.config.show_spans, true))
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(source: &str, config: DriverConfig) -> CompileResult<String> {
        let mut reporter = DiagnosticReporter::new();
        let file_id = reporter.add_file("test.mk", source);
        let ctx = CompileContext::new("test.mk".to_string(), file_id, &reporter);
        Driver::new(config).dump_tokens(source, &ctx)
    }

    #[test]
    fn test_dump_tokens() {
        let out = run("let five = 5;", DriverConfig::default()).unwrap();
        assert_eq!(
            out,
            "LET let\nIDENT five\nASSIGN =\nINT 5\nSEMICOLON ;\nEOF\n"
        );
    }

    #[test]
    fn test_dump_with_spans() {
        let config = DriverConfig {
            show_spans: true,
            ..Default::default()
        };
        let out = run("fn(x)", config).unwrap();
        assert_eq!(
            out,
            "0..2 FUNCTION fn\n2..3 LPAREN (\n3..4 IDENT x\n4..5 RPAREN )\n5..5 EOF\n"
        );
    }

    #[test]
    fn test_illegal_tokens_allowed_by_default() {
        let out = run("x @ y", DriverConfig::default()).unwrap();
        assert_eq!(out, "IDENT x\nILLEGAL @\nIDENT y\nEOF\n");
    }

    #[test]
    fn test_deny_illegal() {
        let config = DriverConfig {
            deny_illegal: true,
            ..Default::default()
        };
        let err = run("let a = 1 @ 2 $;", config).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Lexer { ref message, span }
                if message == "2 illegal character(s) in test.mk" && span == Span::new(10, 11)
        ));
    }

    #[test]
    fn test_deny_illegal_passes_clean_source() {
        let config = DriverConfig {
            deny_illegal: true,
            ..Default::default()
        };
        assert!(run("let add = fn(a, b) { a + b };", config).is_ok());
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let dump = TokenDump::scan("\0");
        assert_eq!(dump.render(false, false), "ILLEGAL \\0\n");
        assert_eq!(dump.illegal().count(), 1);
    }
}
