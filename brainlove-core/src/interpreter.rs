use crate::compat::{Box, String};
use crate::error::RuntimeError;
use crate::input::Input;
use crate::output::Output;
use crate::program::{Cursor, DEFAULT_SNIPPET_RADIUS, Program};
use crate::tape::Tape;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Brainfuck machine state: the loaded program, the cursor into it, the tape
/// pointer and the tape, plus the collaborators used by `.` and `,`.
///
/// The execution loop lives in `evaluator.rs`. An interpreter can run any
/// number of programs; each `load` starts from a clean tape.
pub struct Interpreter {
    pub(crate) program: Program,
    pub(crate) cursor: Cursor,
    pub(crate) pointer: i64,
    pub(crate) tape: Tape,
    pub(crate) halted: bool,
    pub(crate) steps: u64, // Instructions executed since the last load

    output: Option<Box<dyn Output>>, // Missing output discards `.` bytes
    input: Option<Box<dyn Input>>,   // Missing input reads as end of input
    snippet_radius: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        let program = Program::default();
        Self {
            cursor: program.cursor(),
            program,
            pointer: 0,
            tape: Tape::new(),
            halted: false,
            steps: 0,
            output: None,
            input: None,
            snippet_radius: DEFAULT_SNIPPET_RADIUS,
        }
    }

    pub fn with_output(mut self, output: Box<dyn Output>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_input(mut self, input: Box<dyn Input>) -> Self {
        self.input = Some(input);
        self
    }

    /// Characters shown on each side of a bracket in syntax error snippets
    pub fn with_snippet_radius(mut self, radius: usize) -> Self {
        self.snippet_radius = radius;
        self
    }

    pub fn set_output(&mut self, output: Box<dyn Output>) {
        self.output = Some(output);
    }

    pub fn set_input(&mut self, input: Box<dyn Input>) {
        self.input = Some(input);
    }

    pub fn snippet_radius(&self) -> usize {
        self.snippet_radius
    }

    /// Replace the program and start over from a clean machine.
    pub fn load(&mut self, source: &str) {
        self.program = Program::new(source);
        self.reset();
    }

    /// Cursor and pointer back to zero, tape cleared. The program stays.
    pub fn reset(&mut self) {
        self.cursor = self.program.cursor();
        self.pointer = 0;
        self.tape.clear();
        self.halted = false;
        self.steps = 0;
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }

    pub fn pointer(&self) -> i64 {
        self.pointer
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn cell(&self, index: i64) -> u8 {
        self.tape.get_or_zero(index)
    }

    pub fn current_cell(&self) -> u8 {
        self.tape.get_or_zero(self.pointer)
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    // RUST CONCEPT: Primitive operations used by the evaluator
    // Each instruction maps to exactly one of these

    pub fn move_right(&mut self) {
        self.pointer += 1;
    }

    pub fn move_left(&mut self) {
        self.pointer -= 1;
    }

    pub fn increment(&mut self) {
        self.tape.increment(self.pointer);
    }

    pub fn decrement(&mut self) {
        self.tape.decrement(self.pointer);
    }

    /// Emit the current cell as one byte
    pub fn write_cell(&mut self) -> Result<(), RuntimeError> {
        let byte = self.current_cell();
        if let Some(output) = &mut self.output {
            output.write(&[byte]).map_err(|_| RuntimeError::Output)?;
        }
        Ok(())
    }

    /// Block for one line of input and store its decoded value
    pub fn read_cell(&mut self) -> Result<(), RuntimeError> {
        // Anything printed as a prompt must be visible before we block
        self.flush_output()?;

        let line = match &mut self.input {
            Some(input) => input.read_line().map_err(|_| RuntimeError::Input)?,
            None => String::new(),
        };

        self.tape.set(self.pointer, decode_input(&line));
        Ok(())
    }

    pub fn flush_output(&mut self) -> Result<(), RuntimeError> {
        if let Some(output) = &mut self.output {
            output.flush().map_err(|_| RuntimeError::Output)?;
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn one line of input into a cell value.
///
/// Numeric text stores the integer part of its leading digits modulo 256
/// (`"65"` is 65, `"-1"` is 255, `"300"` is 44, `"2.9"` is 2, `"0x1A"` is 0).
/// Anything else stores the code point of its first character modulo 256.
/// Empty input stores 0.
pub fn decode_input(line: &str) -> u8 {
    let text = strip_line_ending(line);

    if let Some(value) = parse_numeric(text) {
        return value;
    }

    text.chars()
        .next()
        .map(|ch| (ch as u32 % 256) as u8)
        .unwrap_or(0)
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

// Accepts: [sign] digits ['.' digits] [('e'|'E') [sign] digits], or
// [sign] ('0x'|'0X') hexdigits, with single underscores allowed between
// digits and whitespace around it all.
fn parse_numeric(text: &str) -> Option<u8> {
    let trimmed = text.trim();
    let (negative, body) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else {
        (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };

    // Hex is numeric, but its leading decimal digits are just the zero
    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        return is_digit_run_in(hex, |b| b.is_ascii_hexdigit()).then_some(0);
    }

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    if !is_digit_run(integer) {
        return None;
    }
    if fraction.is_some_and(|f| !is_digit_run(f)) {
        return None;
    }
    if let Some(exp) = exponent {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if !is_digit_run(digits) {
            return None;
        }
    }

    let digits: String = integer.chars().filter(|&c| c != '_').collect();
    let mut value = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    if negative {
        value = -value;
    }

    // Floored remainder so negative input wraps to the top of the byte range
    let modulus = BigInt::from(256u32);
    let wrapped = ((value % &modulus) + &modulus) % &modulus;
    wrapped.to_u8()
}

fn is_digit_run(text: &str) -> bool {
    is_digit_run_in(text, |b| b.is_ascii_digit())
}

fn is_digit_run_in(text: &str, is_digit: impl Fn(u8) -> bool) -> bool {
    !text.is_empty()
        && text
            .split('_')
            .all(|part| !part.is_empty() && part.bytes().all(&is_digit))
}
