// This module implements the brainfuck execution loop
//
// EXECUTION MODEL:
// 1. Fetch the character under the cursor; anything outside the alphabet is
//    a comment and does nothing
// 2. Execute it against the tape
// 3. Advance the cursor by one
//
// `[` with a zero cell and `]` with a non-zero cell first move the cursor onto
// their partner bracket, so step 3 lands one past the partner.
//
// Two kinds of "the cursor left the program" exist and they are kept apart:
// - advancing past the last character in step 3 is how every program ends
// - running off either end while looking for a partner bracket is a syntax
//   error, located at the bracket that started the search
//
// `step` reports which of these happened as a `Step` value rather than an
// error, so normal completion never travels through the error path.

use crate::error::{BoundsError, RuntimeError};
use crate::instruction::Instruction;
use crate::interpreter::Interpreter;
use crate::program::Cursor;
use tracing::{debug, trace};

/// Outcome of executing one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// There is another instruction to execute
    Continue,
    /// The cursor moved past the last instruction; the program is done
    Halt,
    /// Execution cannot continue
    Fail(RuntimeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Interpreter {
    /// Run a brainfuck program from a clean machine to completion.
    ///
    /// Bytes produced by `.` go to the attached output in program order; each
    /// `,` blocks on the attached input. On normal completion the machine is
    /// reset, so calling `execute` again with the same program and input
    /// produces the same output.
    pub fn execute(&mut self, source: &str) -> Result<(), RuntimeError> {
        self.load(source);
        self.run()
    }

    /// Step the loaded program until it halts or fails.
    ///
    /// A failed run leaves the machine as it was at the failing instruction
    /// so the caller can inspect it; the next `load` clears it.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        debug!(program_len = self.program.len(), "starting run");

        loop {
            match self.step() {
                Step::Continue => {}
                Step::Halt => {
                    self.flush_output()?;
                    debug!(
                        steps = self.steps,
                        cells = self.tape.touched(),
                        "program completed"
                    );
                    self.reset();
                    return Ok(());
                }
                Step::Fail(err) => {
                    // The failure is what gets reported, not a flush problem
                    let _ = self.flush_output();
                    debug!(steps = self.steps, error = %err, "program failed");
                    return Err(err);
                }
            }
        }
    }

    /// Execute the instruction under the cursor and advance.
    ///
    /// Once a program has halted, further calls keep returning `Step::Halt`
    /// without touching the machine.
    pub fn step(&mut self) -> Step {
        if self.halted {
            return Step::Halt;
        }

        // Only an empty program has nothing under the cursor
        let Some(ch) = self.program.get(self.cursor.position()) else {
            self.halted = true;
            return Step::Halt;
        };

        if let Some(instruction) = Instruction::from_char(ch) {
            if let Err(err) = self.execute_instruction(instruction) {
                return Step::Fail(err);
            }
        }
        self.steps += 1;

        match self.cursor.advance(1) {
            Ok(()) => Step::Continue,
            Err(BoundsError::AfterEnd) => {
                self.halted = true;
                Step::Halt
            }
            Err(err @ BoundsError::BeforeStart) => Step::Fail(err.into()),
        }
    }

    fn execute_instruction(&mut self, instruction: Instruction) -> Result<(), RuntimeError> {
        match instruction {
            Instruction::Right => self.move_right(),
            Instruction::Left => self.move_left(),
            Instruction::Inc => self.increment(),
            Instruction::Dec => self.decrement(),
            Instruction::LoopOpen => {
                if self.current_cell() == 0 {
                    self.jump(Direction::Forward)?;
                }
            }
            Instruction::LoopEnd => {
                if self.current_cell() != 0 {
                    self.jump(Direction::Backward)?;
                }
            }
            Instruction::Write => self.write_cell()?,
            Instruction::Read => self.read_cell()?,
        }
        Ok(())
    }

    // Put the cursor on the partner of the bracket under it. Leaving the
    // program during the search becomes a syntax error at the origin bracket.
    fn jump(&mut self, direction: Direction) -> Result<(), RuntimeError> {
        let origin = self.cursor.position();

        let partner = self
            .find_partner(direction)
            .map_err(|_| self.program.unmatched_bracket(origin, self.snippet_radius()))?;

        trace!(from = origin, to = partner.position(), "bracket jump");
        self.cursor = partner;
        Ok(())
    }

    // RUST CONCEPT: Scanning with a copy of the cursor
    // Cursor is Copy, so the scan walks its own copy and the real cursor only
    // moves once a partner has been found.
    fn find_partner(&self, direction: Direction) -> Result<Cursor, BoundsError> {
        let (same, opposite, delta) = match direction {
            Direction::Forward => ('[', ']', 1),
            Direction::Backward => (']', '[', -1),
        };

        let mut scan = self.cursor;
        let mut nesting: usize = 0;

        loop {
            match self.program.get(scan.position()) {
                Some(c) if c == same => nesting += 1,
                Some(c) if c == opposite => nesting -= 1,
                _ => {}
            }

            if nesting == 0 {
                return Ok(scan);
            }

            scan.advance(delta)?;
        }
    }
}

impl core::fmt::Display for Step {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Step::Continue => write!(f, "continue"),
            Step::Halt => write!(f, "halt"),
            Step::Fail(err) => write!(f, "fail: {}", err),
        }
    }
}
