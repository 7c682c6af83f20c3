//! Environment abstraction for randomness.
//!
//! The `Environment` trait decouples the draw logic from the source of
//! entropy. This enables:
//!
//! - Deterministic testing: the harness provides a seeded RNG, so a failing
//!   property test reproduces from its seed.
//!
//! - Production runtime: the terminal front end uses OS entropy without any
//!   change to the draw logic.
//!
//! # Invariants
//!
//! - Determinism: given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Isolation: implementations must not share global state
//! - Termination: sampling never loops unboundedly, even when the entropy
//!   source degenerates to a constant

/// Rejections `random_below` tolerates before it accepts a biased value.
///
/// Each rejection has probability below 1/2 with a working source, so a
/// healthy environment reaches this bound with probability below `2^-64`.
pub const MAX_REJECTIONS: usize = 64;

/// Abstract environment providing randomness.
///
/// Every draw asks the environment for a uniform integer; nothing in the core
/// reaches for a global RNG.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    ///
    /// # Invariants
    ///
    /// - Determinism during simulations: given the same RNG seed, this
    ///   produces the same sequence of bytes
    /// - Unpredictability in production: uses OS entropy
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Generates a uniform integer in `[0, bound)`.
    ///
    /// Values from the biased tail of the `u64` range are rejected and
    /// redrawn, so every result has probability exactly `1 / bound`.
    /// Returns 0 when `bound` is 0.
    ///
    /// After [`MAX_REJECTIONS`] consecutive rejections the last candidate is
    /// reduced anyway, so a broken source (all zeros) yields 0 instead of
    /// hanging.
    fn random_below(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }

        // 2^64 mod bound: the count of low values that would bias `% bound`
        let threshold = bound.wrapping_neg() % bound;
        let mut candidate = self.random_u64();
        for _ in 0..MAX_REJECTIONS {
            if candidate >= threshold {
                return candidate % bound;
            }
            candidate = self.random_u64();
        }

        tracing::warn!(bound, "entropy source keeps hitting the biased tail, accepting bias");
        candidate % bound
    }

    /// Generates a uniform index in `[0, bound)`.
    #[allow(clippy::cast_possible_truncation)]
    fn random_index(&self, bound: usize) -> usize {
        // Result is below `bound`, so it always fits back into usize.
        self.random_below(bound as u64) as usize
    }
}
