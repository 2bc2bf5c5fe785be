//! Monkey - token dumper and REPL for the Monkey language
//!
//! Usage: monkey [OPTIONS] [input]

use anyhow::Context;
use clap::Parser as ClapParser;
use monkey::common::DiagnosticReporter;
use monkey::driver::{CompileContext, Driver, DriverConfig};
use monkey::repl;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "monkey")]
#[command(author = "Monkey Team")]
#[command(version)]
#[command(about = "Tokenizer for the Monkey language", long_about = None)]
struct Args {
    /// Input source file, or `-` for stdin. Starts the REPL when omitted.
    input: Option<PathBuf>,

    /// Print the byte range of every token
    #[arg(long)]
    spans: bool,

    /// Fail when the source contains illegal characters
    #[arg(long)]
    deny_illegal: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "monkey=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(input: &Path) -> anyhow::Result<(String, String)> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        return Ok(("<stdin>".to_string(), source));
    }

    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    Ok((input.display().to_string(), source))
}

fn run(args: &Args) -> anyhow::Result<()> {
    let Some(input) = &args.input else {
        tracing::debug!("starting REPL");
        let stdin = io::stdin();
        repl::start(stdin.lock(), io::stdout(), args.spans)?;
        return Ok(());
    };

    let (filename, source) = read_source(input)?;

    // Set up diagnostic reporter
    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let config = DriverConfig {
        show_spans: args.spans,
        deny_illegal: args.deny_illegal,
        verbose: args.verbose,
    };

    tracing::debug!(file = %filename, bytes = source.len(), "tokenizing");

    let ctx = CompileContext::new(filename, file_id, &reporter);
    let dump = Driver::new(config).dump_tokens(&source, &ctx)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(dump.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
