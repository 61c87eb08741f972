//! Input trait for the `,` instruction
//!
//! The interpreter asks for one line per `,` and blocks until it arrives.
//! Implementations return an empty string once their input is exhausted.

use crate::compat::{String, ToString, VecDeque};

pub trait Input {
    /// Read one line of text, with or without its line terminator
    fn read_line(&mut self) -> Result<String, ()>;
}

/// Input served from a fixed list of lines, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> Result<String, ()> {
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

#[cfg(feature = "std")]
pub use self::stdin::StdinInput;

#[cfg(feature = "std")]
mod stdin {
    use super::Input;
    use std::io::{self, BufRead};

    /// Blocking line reader over the process's standard input
    pub struct StdinInput;

    impl StdinInput {
        pub fn new() -> Self {
            StdinInput
        }
    }

    impl Default for StdinInput {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Input for StdinInput {
        fn read_line(&mut self) -> Result<String, ()> {
            let mut line = String::new();
            // read_line returns Ok(0) at end of input, leaving `line` empty
            io::stdin().lock().read_line(&mut line).map_err(|_| ())?;
            Ok(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_serves_lines_in_order() {
        let mut input = ScriptedInput::new(["65", "hello"]);

        assert_eq!(input.remaining(), 2);
        assert_eq!(input.read_line().unwrap(), "65");
        assert_eq!(input.read_line().unwrap(), "hello");
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_input_is_empty_when_exhausted() {
        let mut input = ScriptedInput::new(Vec::<&str>::new());
        assert_eq!(input.read_line().unwrap(), "");
        assert_eq!(input.read_line().unwrap(), "");
    }
}
