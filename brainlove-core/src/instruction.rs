//! The eight-symbol brainfuck instruction alphabet
//!
//! Both dialects share this alphabet: the transpiler uses it to decide which
//! characters are emitted, and the interpreter dispatches on it.

use crate::compat::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Right,    // >
    Left,     // <
    Inc,      // +
    Dec,      // -
    LoopOpen, // [
    LoopEnd,  // ]
    Write,    // .
    Read,     // ,
}

impl Instruction {
    pub const ALL: [Instruction; 8] = [
        Instruction::Right,
        Instruction::Left,
        Instruction::Inc,
        Instruction::Dec,
        Instruction::LoopOpen,
        Instruction::LoopEnd,
        Instruction::Write,
        Instruction::Read,
    ];

    // RUST CONCEPT: Option as "maybe an instruction"
    // Everything outside the alphabet is a comment, so None is not an error
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Instruction::Right),
            '<' => Some(Instruction::Left),
            '+' => Some(Instruction::Inc),
            '-' => Some(Instruction::Dec),
            '[' => Some(Instruction::LoopOpen),
            ']' => Some(Instruction::LoopEnd),
            '.' => Some(Instruction::Write),
            ',' => Some(Instruction::Read),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::Right => '>',
            Instruction::Left => '<',
            Instruction::Inc => '+',
            Instruction::Dec => '-',
            Instruction::LoopOpen => '[',
            Instruction::LoopEnd => ']',
            Instruction::Write => '.',
            Instruction::Read => ',',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
