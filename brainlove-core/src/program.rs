// Program text, the bounds-checked cursor over it, and source positions
// used by syntax errors.
use crate::compat::{fmt, format, String, Vec};
use crate::error::{BoundsError, RuntimeError, SyntaxError, SyntaxErrorKind};

/// Characters shown on each side of an offending position by default.
pub const DEFAULT_SNIPPET_RADIUS: usize = 10;

// RUST CONCEPT: Source position for rich error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,   // 1-based
    pub column: usize, // 1-based
    pub offset: usize, // Character offset from start of program
}

impl SourcePos {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A fixed-width window of program text with a caret under the offending
/// character.
///
/// The window is always `2 * radius + 1` characters wide. Positions past
/// either end of the program, and any whitespace or control character, are
/// rendered as spaces so the caret lines up with the character it marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub window: String,
    pub caret: usize,
}

impl Snippet {
    pub fn new(program: &Program, index: usize, radius: usize) -> Self {
        let mut window = String::with_capacity(2 * radius + 1);
        let center = index as i64;
        let radius_i = radius as i64;

        for i in (center - radius_i)..=(center + radius_i) {
            let ch = if i < 0 {
                ' '
            } else {
                match program.get(i as usize) {
                    Some(c) if c.is_whitespace() || c.is_control() => ' ',
                    Some(c) => c,
                    None => ' ',
                }
            };
            window.push(ch);
        }

        Snippet {
            window,
            caret: radius,
        }
    }

    /// The caret line on its own, e.g. `"          ^"`.
    pub fn marker(&self) -> String {
        let mut marker: String = core::iter::repeat_n(' ', self.caret).collect();
        marker.push('^');
        marker
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.window, self.marker())
    }
}

/// Immutable instruction source, indexed by character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    chars: Vec<char>,
}

impl Program {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.len())
    }

    /// Line and column of the character at `index`.
    ///
    /// The line is one more than the number of newlines up to and including
    /// `index`; the column counts characters from the start of that line up
    /// to and including `index`.
    pub fn position_of(&self, index: usize) -> SourcePos {
        let end = index.min(self.chars.len().saturating_sub(1));
        let upto = &self.chars[..self.chars.len().min(end + 1)];

        let line = upto.iter().filter(|&&c| c == '\n').count() + 1;
        let line_start = self.chars[..end]
            .iter()
            .rposition(|&c| c == '\n')
            .map(|nl| nl + 1)
            .unwrap_or(0);

        SourcePos::new(line, end + 1 - line_start, index)
    }

    /// Build the syntax error for a bracket at `index` that has no partner.
    ///
    /// Returns `RuntimeError::Internal` when `index` does not hold a bracket;
    /// that can only happen through a defect in the engine.
    pub fn unmatched_bracket(&self, index: usize, radius: usize) -> RuntimeError {
        let kind = match self.get(index) {
            Some('[') => SyntaxErrorKind::UnmatchedOpener,
            Some(']') => SyntaxErrorKind::UnmatchedCloser,
            other => {
                return RuntimeError::Internal(format!(
                    "bracket error raised at offset {} which holds {:?}",
                    index, other
                ));
            }
        };

        RuntimeError::Syntax(SyntaxError {
            kind,
            pos: self.position_of(index),
            snippet: Snippet::new(self, index, radius),
        })
    }

    /// Statically verify that every bracket has a partner.
    ///
    /// Reports the first surplus `]`, or failing that the earliest `[` left
    /// open at the end of the program.
    pub fn check_brackets(&self, radius: usize) -> Result<(), RuntimeError> {
        let mut open = Vec::new();

        for (index, &ch) in self.chars.iter().enumerate() {
            match ch {
                '[' => open.push(index),
                ']' => {
                    if open.pop().is_none() {
                        return Err(self.unmatched_bracket(index, radius));
                    }
                }
                _ => {}
            }
        }

        match open.first() {
            Some(&index) => Err(self.unmatched_bracket(index, radius)),
            None => Ok(()),
        }
    }
}

/// A position into a program that refuses to leave `[0, len - 1]`.
///
/// Moves that would leave the program fail with a `BoundsError` and leave
/// the position untouched; the caller decides what the failure means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn move_to(&mut self, target: i64) -> Result<(), BoundsError> {
        if target < 0 {
            return Err(BoundsError::BeforeStart);
        }
        if target as u64 >= self.len as u64 {
            return Err(BoundsError::AfterEnd);
        }
        self.position = target as usize;
        Ok(())
    }

    pub fn advance(&mut self, delta: i64) -> Result<(), BoundsError> {
        self.move_to(self.position as i64 + delta)
    }
}
