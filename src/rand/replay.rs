//! Fixed-sequence source for deterministic tests.

use super::RandomSource;

/// Replays `values` in order, wrapping around, and counts draws.
pub struct Replay {
    values: Vec<u64>,
    pos: usize,
    pub drawn: usize,
}

impl Replay {
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "replay needs at least one value");
        Replay {
            values,
            pos: 0,
            drawn: 0,
        }
    }
}

impl RandomSource for Replay {
    fn next_u64(&mut self) -> u64 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        self.drawn += 1;
        v
    }
}
