//! Output trait for the brainfuck interpreter
//!
//! This module defines the Output trait that allows the interpreter to emit
//! bytes to any destination: a terminal, a UART, or an in-memory buffer.
//!
//! Every `.` instruction writes exactly one byte. The interpreter flushes
//! before blocking on input and when a program completes.

use crate::compat::{Rc, RefCell, String, Vec};

/// Byte sink used by the `.` instruction
///
/// Both methods return Ok(()) on success, Err(()) on failure. A failure
/// ends the current run with `RuntimeError::Output`.
pub trait Output {
    /// Write bytes to the output
    fn write(&mut self, data: &[u8]) -> Result<(), ()>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<(), ()>;
}

// RUST CONCEPT: Shared ownership with interior mutability
// The interpreter owns its output as a Box<dyn Output>, so callers that want
// to read back what was written keep a clone of the same Rc'd buffer.
/// In-memory output whose clones all share one buffer
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.buffer.borrow().clone()
    }

    /// Buffer contents decoded as UTF-8, with invalid sequences replaced
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Output for BufferOutput {
    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        self.buffer.borrow_mut().extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}
