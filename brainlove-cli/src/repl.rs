// Interactive brainlove REPL using editline
//
// Each line is transpiled and run on a fresh tape. `,` inside a line reads
// from stdin once the line editor has handed the terminal back.

use crate::report;
use anyhow::Result;
use brainlove_core::{Interpreter, StdinInput, StdoutOutput, transpile};
use editline::{LineEditor, terminals::StdioTerminal};
use std::io::Write;
use tracing::debug;

enum Command<'a> {
    Quit,
    Expand(&'a str),
    Run(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "quit" {
        return Some(Command::Quit);
    }
    if let Some(code) = trimmed.strip_prefix("expand ") {
        return Some(Command::Expand(code));
    }
    Some(Command::Run(trimmed))
}

pub fn run_repl() -> Result<()> {
    println!();
    println!("brainlove v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Type `quit` or press Ctrl-D to exit");
    println!("Type `expand <code>` to see the brainfuck a line expands to");
    println!("Every line starts from a clean tape");
    println!();

    let mut interp = Interpreter::new()
        .with_output(Box::new(StdoutOutput::new()))
        .with_input(Box::new(StdinInput::new()));

    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => match parse_command(&line) {
                None => continue,
                Some(Command::Quit) => break,
                Some(Command::Expand(code)) => println!("{}", transpile(code)),
                Some(Command::Run(code)) => {
                    let expanded = transpile(code);
                    debug!(expanded_len = expanded.len(), "running REPL line");
                    if let Err(e) = interp.execute(&expanded) {
                        eprintln!("{}", report::render(&e));
                    }
                }
            },
            Err(editline::Error::Eof) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - just continue
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
