//! Stdout wrapper implementing Output
//!
//! This module provides a simple stdout output implementation for std platforms.

#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use crate::output::Output;

#[cfg(feature = "std")]
pub struct StdoutOutput;

#[cfg(feature = "std")]
impl StdoutOutput {
    pub fn new() -> Self {
        StdoutOutput
    }
}

#[cfg(feature = "std")]
impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Output for StdoutOutput {
    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        io::stdout().write_all(data).map_err(|_| ())
    }

    fn flush(&mut self) -> Result<(), ()> {
        io::stdout().flush().map_err(|_| ())
    }
}
