//! Brainlove CLI - run, transpile and check brainfuck and brainlove programs
//!
//! This is a thin wrapper around brainlove-core that builds the executable.
//! With no subcommand it starts an interactive REPL.

mod report;
mod repl;

use anyhow::{Context, Result};
use brainlove_core::{
    BrainloveRunner, DEFAULT_SNIPPET_RADIUS, Interpreter, Program, StdinInput, StdoutOutput,
    transpile,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brainlove", version)]
#[command(about = "Run, transpile and check brainfuck and brainlove programs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a program, reading `,` input from stdin line by line
    Run {
        /// Path to a .bf or .bl source file
        file: PathBuf,

        /// Source dialect (default: guessed from the file extension)
        #[arg(long, value_enum)]
        dialect: Option<Dialect>,

        /// Characters shown on each side of an unmatched bracket
        #[arg(long, default_value_t = DEFAULT_SNIPPET_RADIUS)]
        snippet_radius: usize,
    },

    /// Print the brainfuck expansion of a brainlove program
    Transpile {
        /// Path to a brainlove source file
        file: PathBuf,
    },

    /// Check bracket balance without running the program
    Check {
        /// Path to a .bf or .bl source file
        file: PathBuf,

        /// Source dialect (default: guessed from the file extension)
        #[arg(long, value_enum)]
        dialect: Option<Dialect>,

        /// Characters shown on each side of an unmatched bracket
        #[arg(long, default_value_t = DEFAULT_SNIPPET_RADIUS)]
        snippet_radius: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Dialect {
    Brainfuck,
    Brainlove,
}

impl Dialect {
    /// `.bf` and `.b` files are brainfuck; everything else is brainlove,
    /// which is a superset as long as the file holds no digits.
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bf") | Some("b") => Dialect::Brainfuck,
            _ => Dialect::Brainlove,
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize logging to stderr so it never mixes with program output.
///
/// Use `RUST_LOG` to override the default `warn` filter, e.g.
/// `RUST_LOG=brainlove_core=trace` to watch every bracket jump.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let outcome = match cli.command {
        None => repl::run_repl().map(|()| ExitCode::SUCCESS),
        Some(command) => run_command(command),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

// The message is printed once by the caller; the log only sees it at debug
fn failure_message(err: &anyhow::Error) -> String {
    let message = format!("{:#}", err);
    debug!(error = %message, "command failed");
    format!("Error: {}", message)
}

fn run_command(command: Command) -> Result<ExitCode> {
    match command {
        Command::Run {
            file,
            dialect,
            snippet_radius,
        } => {
            let source = read_source(&file)?;
            let dialect = dialect.unwrap_or_else(|| Dialect::from_path(&file));
            debug!(?dialect, file = %file.display(), "running program");

            let result = match dialect {
                Dialect::Brainfuck => {
                    let mut interp = Interpreter::new()
                        .with_output(Box::new(StdoutOutput::new()))
                        .with_input(Box::new(StdinInput::new()))
                        .with_snippet_radius(snippet_radius);
                    interp.execute(&source)
                }
                Dialect::Brainlove => BrainloveRunner::new(&source)
                    .with_output(Box::new(StdoutOutput::new()))
                    .with_input(Box::new(StdinInput::new()))
                    .with_snippet_radius(snippet_radius)
                    .execute(),
            };
            Ok(report::exit_status(result))
        }

        Command::Transpile { file } => {
            let source = read_source(&file)?;
            println!("{}", transpile(&source));
            Ok(ExitCode::SUCCESS)
        }

        Command::Check {
            file,
            dialect,
            snippet_radius,
        } => {
            let source = read_source(&file)?;
            // Digits can repeat brackets, so brainlove is checked after expansion
            let code = match dialect.unwrap_or_else(|| Dialect::from_path(&file)) {
                Dialect::Brainfuck => source,
                Dialect::Brainlove => transpile(&source),
            };

            let result = Program::new(&code).check_brackets(snippet_radius);
            if result.is_ok() {
                println!("{}: brackets balanced", file.display());
            }
            Ok(report::exit_status(result))
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
