//! Brainlove execution: transpile once, then interpret
//!
//! A `BrainloveRunner` owns a brainlove program and a brainfuck interpreter.
//! The first `execute` expands the source and caches the result; later calls
//! reuse the cached expansion and only re-run the interpreter.

use crate::compat::{Box, String};
use crate::error::RuntimeError;
use crate::input::Input;
use crate::interpreter::Interpreter;
use crate::output::Output;
use crate::transpiler::transpile;
use tracing::debug;

pub struct BrainloveRunner {
    source: String,
    transpiled: Option<String>,
    interpreter: Interpreter,
}

impl BrainloveRunner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.into(),
            transpiled: None,
            interpreter: Interpreter::new(),
        }
    }

    pub fn with_output(mut self, output: Box<dyn Output>) -> Self {
        self.interpreter.set_output(output);
        self
    }

    pub fn with_input(mut self, input: Box<dyn Input>) -> Self {
        self.interpreter.set_input(input);
        self
    }

    pub fn with_snippet_radius(mut self, radius: usize) -> Self {
        self.interpreter = self.interpreter.with_snippet_radius(radius);
        self
    }

    pub fn is_cached(&self) -> bool {
        self.transpiled.is_some()
    }

    /// The brainfuck expansion of the source, computed on first use.
    pub fn transpiled(&mut self) -> &str {
        let source = &self.source;
        self.transpiled.get_or_insert_with(|| {
            debug!("transpile cache miss");
            transpile(source)
        })
    }

    /// Run the program. Errors are the interpreter's, located in the
    /// transpiled brainfuck text.
    pub fn execute(&mut self) -> Result<(), RuntimeError> {
        let source = &self.source;
        let code = self.transpiled.get_or_insert_with(|| {
            debug!("transpile cache miss");
            transpile(source)
        });
        self.interpreter.execute(code)
    }
}
