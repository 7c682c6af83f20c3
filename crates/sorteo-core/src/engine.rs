//! Draw engine.
//!
//! Tracks which roster positions have been drawn and picks the next one
//! uniformly among those that have not. The engine only ever sees the roster's
//! size; resolving a position to a name is the caller's job.
//!
//! ## States
//!
//! Derived from roster size `n` and drawn count `k`:
//!
//! ```text
//!   Empty ──admit──▶ Ready ──draw (k+1 < n)──▶ Ready
//!                      │
//!                      └──draw (k+1 = n)──▶ Exhausted
//!
//!   reset: any state ──▶ Empty
//! ```

use std::collections::BTreeSet;

use crate::{env::Environment, error::DrawRejection};

/// Retries `Resample` makes before picking directly among undrawn positions.
const MAX_RESAMPLES: usize = 256;

/// How the engine picks among undrawn positions.
///
/// Both strategies give every undrawn position probability `1 / (n - k)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawStrategy {
    /// Sample over the whole roster and retry while the candidate was
    /// already drawn. Expected retries grow as the roster runs out.
    Resample,

    /// Keep an explicit pool of undrawn positions and remove a uniformly
    /// chosen one. Constant time per draw.
    #[default]
    SwapRemove,
}

/// Observable state of the draw engine for a given roster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// No names to draw from.
    Empty,
    /// At least one undrawn position remains.
    Ready,
    /// Every position has been drawn.
    Exhausted,
}

/// Without-replacement draw state machine.
///
/// # Type Parameters
///
/// - `E`: Environment implementation for randomness
#[derive(Debug, Clone)]
pub struct DrawEngine<E: Environment> {
    /// Source of uniform integers.
    env: E,

    /// Sampling strategy.
    strategy: DrawStrategy,

    /// Positions already returned as winners.
    drawn: BTreeSet<usize>,

    /// Undrawn positions (`SwapRemove` only).
    pool: Vec<usize>,

    /// Largest roster size seen since the last reset.
    known: usize,
}

impl<E: Environment> DrawEngine<E> {
    /// Create an engine with the default strategy.
    pub fn new(env: E) -> Self {
        Self::with_strategy(env, DrawStrategy::default())
    }

    /// Create an engine with an explicit strategy.
    pub fn with_strategy(env: E, strategy: DrawStrategy) -> Self {
        Self { env, strategy, drawn: BTreeSet::new(), pool: Vec::new(), known: 0 }
    }

    /// Sampling strategy in use.
    pub fn strategy(&self) -> DrawStrategy {
        self.strategy
    }

    /// Draw the next position from a roster of `roster_size` names.
    ///
    /// On success the position is recorded as drawn before it is returned.
    ///
    /// # Errors
    ///
    /// - `EmptyRoster` if `roster_size` is 0
    /// - `RosterShrank` if the roster lost names since the last reset
    /// - `Exhausted` if every position has been drawn
    pub fn next(&mut self, roster_size: usize) -> Result<usize, DrawRejection> {
        if roster_size == 0 {
            return Err(DrawRejection::EmptyRoster);
        }

        if roster_size < self.known {
            return Err(DrawRejection::RosterShrank { known: self.known, actual: roster_size });
        }

        if self.drawn.len() >= roster_size {
            return Err(DrawRejection::Exhausted);
        }

        self.sync(roster_size);

        let position = match self.strategy {
            DrawStrategy::Resample => self.resample(roster_size),
            DrawStrategy::SwapRemove => {
                let slot = self.env.random_index(self.pool.len());
                self.pool.swap_remove(slot)
            },
        };

        self.drawn.insert(position);
        tracing::debug!(
            position,
            drawn = self.drawn.len(),
            remaining = roster_size - self.drawn.len(),
            "position drawn"
        );

        Ok(position)
    }

    /// Number of positions not yet drawn.
    pub fn remaining(&self, roster_size: usize) -> usize {
        roster_size.saturating_sub(self.drawn.len())
    }

    /// Current phase for a roster of `roster_size` names.
    pub fn phase(&self, roster_size: usize) -> DrawPhase {
        if roster_size == 0 {
            DrawPhase::Empty
        } else if self.drawn.len() >= roster_size {
            DrawPhase::Exhausted
        } else {
            DrawPhase::Ready
        }
    }

    /// Positions drawn since the last reset.
    pub fn drawn(&self) -> &BTreeSet<usize> {
        &self.drawn
    }

    /// Number of positions drawn since the last reset.
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// Whether `position` has been drawn.
    pub fn has_drawn(&self, position: usize) -> bool {
        self.drawn.contains(&position)
    }

    /// Forget every draw.
    pub fn reset(&mut self) {
        self.drawn.clear();
        self.pool.clear();
        self.known = 0;
    }

    /// Account for names admitted since the previous draw.
    fn sync(&mut self, roster_size: usize) {
        if self.strategy == DrawStrategy::SwapRemove {
            self.pool.extend(self.known..roster_size);
        }
        self.known = roster_size;
    }

    /// Reject-and-retry sampling over `[0, roster_size)`.
    ///
    /// After `MAX_RESAMPLES` misses the pick is made uniformly over the
    /// undrawn positions instead, which keeps the distribution uniform and
    /// bounds the work when the entropy source is stuck.
    ///
    /// Caller guarantees at least one undrawn position exists.
    fn resample(&self, roster_size: usize) -> usize {
        for _ in 0..MAX_RESAMPLES {
            let candidate = self.env.random_index(roster_size);
            if !self.drawn.contains(&candidate) {
                return candidate;
            }
            tracing::trace!(candidate, "already drawn, resampling");
        }

        let undrawn: Vec<usize> =
            (0..roster_size).filter(|position| !self.drawn.contains(position)).collect();
        tracing::debug!(undrawn = undrawn.len(), "resample limit reached, picking directly");
        undrawn[self.env.random_index(undrawn.len())]
    }
}
