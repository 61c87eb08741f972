//! Structured failures raised by the interpreter
//!
//! Errors carry data, not prose: a rendering layer asks for `kind()`,
//! `line()`, `column()` and `snippet()` and formats them however it likes.
//! The `Display` impls are short one-line summaries.

use crate::compat::String;
use crate::program::{Snippet, SourcePos};
use thiserror::Error;

/// A cursor move that would leave the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("cursor position cannot go below zero")]
    BeforeStart,
    #[error("cursor position cannot go past the end of the program")]
    AfterEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    UnmatchedOpener,
    UnmatchedCloser,
}

impl SyntaxErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            SyntaxErrorKind::UnmatchedOpener => {
                "Opening bracket has no corresponding closing bracket"
            }
            SyntaxErrorKind::UnmatchedCloser => {
                "Closing bracket has no corresponding opening bracket"
            }
        }
    }
}

/// A bracket with no partner, located in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} ({pos})", .kind.message())]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub pos: SourcePos,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    // Engine defect, never a property of user input
    #[error("internal interpreter error: {0}")]
    Internal(String),
    #[error("output collaborator failed")]
    Output,
    #[error("input collaborator failed")]
    Input,
}

/// Flat tag over every failure the core can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BeforeStart,
    AfterEnd,
    UnmatchedOpener,
    UnmatchedCloser,
    Internal,
    Output,
    Input,
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::Bounds(BoundsError::BeforeStart) => ErrorKind::BeforeStart,
            RuntimeError::Bounds(BoundsError::AfterEnd) => ErrorKind::AfterEnd,
            RuntimeError::Syntax(e) => match e.kind {
                SyntaxErrorKind::UnmatchedOpener => ErrorKind::UnmatchedOpener,
                SyntaxErrorKind::UnmatchedCloser => ErrorKind::UnmatchedCloser,
            },
            RuntimeError::Internal(_) => ErrorKind::Internal,
            RuntimeError::Output => ErrorKind::Output,
            RuntimeError::Input => ErrorKind::Input,
        }
    }

    pub fn position(&self) -> Option<SourcePos> {
        match self {
            RuntimeError::Syntax(e) => Some(e.pos),
            _ => None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.position().map(|pos| pos.line)
    }

    pub fn column(&self) -> Option<usize> {
        self.position().map(|pos| pos.column)
    }

    pub fn snippet(&self) -> Option<&Snippet> {
        match self {
            RuntimeError::Syntax(e) => Some(&e.snippet),
            _ => None,
        }
    }
}
