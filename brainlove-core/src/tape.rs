// Sparse, two-directional byte tape
//
// Only cells that have been written are stored. Every other index reads as
// zero through `get_or_zero`, which is the only read accessor.

use crate::compat::Map;

#[derive(Debug, Clone, Default)]
pub struct Tape {
    cells: Map<i64, u8>,
}

impl Tape {
    pub fn new() -> Self {
        Self { cells: Map::new() }
    }

    pub fn get_or_zero(&self, index: i64) -> u8 {
        self.cells.get(&index).copied().unwrap_or(0)
    }

    pub fn set(&mut self, index: i64, value: u8) {
        self.cells.insert(index, value);
    }

    // RUST CONCEPT: Wrapping arithmetic keeps every cell in [0, 255]
    pub fn increment(&mut self, index: i64) {
        let value = self.get_or_zero(index).wrapping_add(1);
        self.set(index, value);
    }

    pub fn decrement(&mut self, index: i64) {
        let value = self.get_or_zero(index).wrapping_sub(1);
        self.set(index, value);
    }

    /// Number of cells that have been written since the last clear.
    pub fn touched(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_cells_read_zero() {
        let tape = Tape::new();
        assert_eq!(tape.get_or_zero(0), 0);
        assert_eq!(tape.get_or_zero(-1_000_000), 0);
        assert_eq!(tape.get_or_zero(i64::MAX), 0);
        assert_eq!(tape.touched(), 0);
    }

    #[test]
    fn test_increment_wraps_at_255() {
        let mut tape = Tape::new();
        tape.set(3, 255);
        tape.increment(3);
        assert_eq!(tape.get_or_zero(3), 0);
    }

    #[test]
    fn test_decrement_wraps_at_zero() {
        let mut tape = Tape::new();
        tape.decrement(-7);
        assert_eq!(tape.get_or_zero(-7), 255);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut tape = Tape::new();
        tape.set(1, 9);
        tape.set(-1, 9);
        assert_eq!(tape.touched(), 2);

        tape.clear();
        assert_eq!(tape.touched(), 0);
        assert_eq!(tape.get_or_zero(1), 0);
    }
}
