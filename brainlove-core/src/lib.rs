//! # Brainlove Core
//!
//! Transpiler and interpreter library for brainfuck and brainlove.
//!
//! Brainlove is brainfuck with postfix repeat digits (`+5` is `+++++`). The
//! transpiler lowers it to plain brainfuck, which the interpreter executes
//! against an unbounded tape of byte cells.
//!
//! ## Features
//!
//! - **Sparse tape**: cells addressed by any `i64`, unset cells read as zero
//! - **Located syntax errors**: unmatched brackets report line, column and a
//!   caret snippet
//! - **Pluggable I/O**: `.` writes through the `Output` trait, `,` reads lines
//!   through the `Input` trait
//! - **no_std**: the `std` feature only adds stdin/stdout collaborators
//!
//! ## Example
//!
//! ```
//! use brainlove_core::{BrainloveRunner, BufferOutput};
//!
//! let buffer = BufferOutput::new();
//! let mut runner = BrainloveRunner::new("+8[>+9<-]>.")
//!     .with_output(Box::new(buffer.clone()));
//!
//! runner.execute().unwrap();
//! assert_eq!(buffer.as_string(), "H");
//! ```

#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
extern crate alloc;

// Public modules
pub mod error;
pub mod instruction;
pub mod program;
pub mod tape;
pub mod output;
pub mod input;
pub mod stdout_output;
pub mod transpiler;
pub mod interpreter;
pub mod evaluator;
pub mod runner;

// Internal module
mod compat;

// Re-exports for convenience
pub use error::{BoundsError, ErrorKind, RuntimeError, SyntaxError, SyntaxErrorKind};
pub use evaluator::Step;
pub use input::{Input, ScriptedInput};
pub use instruction::Instruction;
pub use interpreter::{Interpreter, decode_input};
pub use output::{BufferOutput, Output};
pub use program::{Cursor, DEFAULT_SNIPPET_RADIUS, Program, Snippet, SourcePos};
pub use runner::BrainloveRunner;
pub use tape::Tape;
pub use transpiler::{Transpiler, transpile};

#[cfg(feature = "std")]
pub use input::StdinInput;
#[cfg(feature = "std")]
pub use stdout_output::StdoutOutput;
