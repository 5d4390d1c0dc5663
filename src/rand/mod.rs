//! Random number generation.
//!
//! The generator is an explicitly owned value threaded through every call
//! that needs randomness. It is seeded once from the clock and the process
//! id and is NOT cryptographically secure.

mod primes;
#[cfg(test)]
mod replay;

use std::time::{SystemTime, UNIX_EPOCH};

use zeroize::Zeroize;

use primes::PRIMES;

#[cfg(test)]
pub use replay::Replay;

/// A source of random draws.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Draw in `[0, bound)` by modulo reduction. `bound` must be non-zero.
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

// =============================================================================
// Seeding
// =============================================================================

const WEYL: u64 = 0x9e3779b97f4a7c15;

/// Wall clock (nanoseconds) times process id.
fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let pid = unsafe { libc::getpid() } as u64;
    nanos.wrapping_mul(pid)
}

// =============================================================================
// RNG
// =============================================================================

pub struct Rand {
    state: u64,
    counter: u64,
}

impl Rand {
    /// Seed from the current time and process id.
    pub fn from_clock() -> Self {
        let seed = clock_seed();
        log::debug!("rng seeded from clock and pid");
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Rand {
            state: seed,
            counter: seed ^ WEYL,
        }
    }
}

impl RandomSource for Rand {
    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        // Weyl counter keeps a zero state from sticking
        self.counter = self.counter.wrapping_add(WEYL);

        let state = self.state;
        let idx = ((state ^ (state >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR counter
        let new_state = state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ self.counter;
        self.state = new_state;

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
        self.counter.zeroize();
    }
}
