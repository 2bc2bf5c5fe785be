//! Interactive token printer

use std::io::{BufRead, Write};

use crate::common::CompileResult;
use crate::driver::TokenDump;

pub const PROMPT: &str = ">> ";

/// Read lines from `input` and write each line's tokens to `output`.
///
/// Returns when `input` is exhausted.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, show_spans: bool) -> CompileResult<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let dump = TokenDump::scan(&line);
        output.write_all(dump.render(show_spans, false).as_bytes())?;
    }
}
