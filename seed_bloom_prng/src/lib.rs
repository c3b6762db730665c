// Deterministic seeded random stream.
//
// Implements the classic 31-bit linear congruential generator
// `state = (state * 1103515245 + 12345) mod 2^31` and maps each new state to
// a float in `[min, max)`. Text seeds are folded into a 32-bit integer with a
// base-31 polynomial hash over their characters.
//
// This crate is the single source of randomness for the whole Seed Bloom
// pipeline (`seed_bloom_gen`). Every stage draws from one `BloomRng` owned by
// the generation call, so a fixed seed reproduces the same composition
// bit-for-bit, and compositions generated on different threads never share
// state.
//
// **Critical constraint: determinism.** The state update is integer-only and
// wraps in `u64`, which is exact modulo 2^31. Compositions generated by other
// implementations of the same stream must stay comparable, so do not change
// the constants, the seed fold, or the float mapping.

use serde::{Deserialize, Serialize};

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const STATE_MASK: u64 = 0x7FFF_FFFF;

/// 31-bit LCG, the generator's sole source of randomness.
///
/// The state is the only mutable value in a generation call. Pass it by
/// `&mut` to every stage that draws; never stash it in a static.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomRng {
    state: u32,
}

impl BloomRng {
    /// Create a stream from an integer seed.
    ///
    /// Only the low 31 bits influence the sequence, so negative seeds are
    /// taken in two's complement and wide seeds are truncated.
    pub fn new(seed: i64) -> Self {
        Self {
            state: (seed as u64 & STATE_MASK) as u32,
        }
    }

    /// Create a stream from a text seed, folded with [`hash_text_seed`].
    pub fn from_text(seed: &str) -> Self {
        Self::new(i64::from(hash_text_seed(seed)))
    }

    /// Current raw state. Exposed for snapshot tests.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the stream and return the new 31-bit state.
    pub fn next_state(&mut self) -> u32 {
        let next = (u64::from(self.state))
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        self.state = next as u32;
        self.state
    }

    /// Advance the stream and map the new state onto `[0, 1]`.
    ///
    /// The divisor is `2^31 - 1`, so the top state maps to exactly 1.0.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_state()) / STATE_MASK as f64
    }

    /// Draw a value in `[min, max)`: `min + unit * (max - min)`.
    ///
    /// `min > max` is allowed and simply flips the interval.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// Draw once and return `true` when the unit draw falls below `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.range(0.0, 1.0) < p
    }
}

/// Fold a text seed into 32 bits: `h = h * 31 + code_point`, wrapping.
pub fn hash_text_seed(seed: &str) -> u32 {
    seed.chars()
        .fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(c as u32))
}
