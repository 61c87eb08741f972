// Brainlove -> brainfuck transpiler
//
// Brainlove is brainfuck plus postfix repeat digits. A digit repeats the most
// recently expanded unit so that the unit appears `n` times in total, with `0`
// meaning ten. The unit grows with each digit, so `+23` yields six `+`:
//
//   "+5"   -> "+++++"
//   "+5-3" -> "+++++---"
//   "+23"  -> "++++++"
//
// Anything that is neither an instruction nor a digit is dropped. Bracket
// balance is not checked here; that is left to the interpreter.

use crate::compat::String;
use crate::instruction::Instruction;
use tracing::debug;

/// Expand brainlove source into plain brainfuck.
pub fn transpile(source: &str) -> String {
    Transpiler::new().transpile(source)
}

/// Expansion state for a single pass over brainlove source.
#[derive(Debug, Default)]
pub struct Transpiler {
    transpiled: String,
    // The unit a following digit will repeat
    last_unit: String,
}

impl Transpiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transpile(&mut self, source: &str) -> String {
        self.reset();

        for ch in source.chars() {
            self.handle_char(ch);
        }

        debug!(
            source_len = source.len(),
            output_len = self.transpiled.len(),
            "transpiled brainlove"
        );
        core::mem::take(&mut self.transpiled)
    }

    fn reset(&mut self) {
        self.transpiled.clear();
        self.last_unit.clear();
    }

    fn handle_char(&mut self, ch: char) {
        if let Some(instruction) = Instruction::from_char(ch) {
            self.last_unit.clear();
            self.last_unit.push(instruction.as_char());
            self.transpiled.push(instruction.as_char());
        } else if let Some(digit) = ch.to_digit(10) {
            self.repeat(digit as usize);
        }
    }

    // The unit is already in the output once, so `count - 1` more copies
    // bring it to `count` in total. Before any instruction the unit is empty
    // and this appends nothing.
    fn repeat(&mut self, digit: usize) {
        let count = if digit == 0 { 10 } else { digit };
        let expansion = self.last_unit.repeat(count - 1);

        self.transpiled.push_str(&expansion);
        self.last_unit.push_str(&expansion);
    }
}
