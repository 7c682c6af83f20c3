//! Fuzz target for the [`Session`] state machine
//!
//! # Strategy
//!
//! - Operation sequences: arbitrary admits, draws and resets
//! - Both sampling strategies, chosen by the input
//! - Every outcome checked against the reference model
//!
//! # Invariants
//!
//! - Drawn positions are a subset of `[0, size)` and never repeat
//! - `remaining` equals size minus drawn count
//! - Outcomes match what the model allows
//! - NEVER panic on any operation sequence

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sorteo_core::{DrawStrategy, Session, SessionConfig};
use sorteo_harness::{ModelSession, Operation, SimEnv, apply, observe};

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    /// Seed for the draw stream.
    seed: u64,
    /// Use reject-and-retry sampling instead of the pool.
    resample: bool,
    /// Operation sequence to process.
    operations: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let strategy = if input.resample { DrawStrategy::Resample } else { DrawStrategy::SwapRemove };
    let config = SessionConfig { strategy, max_roster: None };
    let mut session = Session::with_config(SimEnv::with_seed(input.seed), config);
    let mut model = ModelSession::new();

    for op in &input.operations {
        let outcome = apply(&mut session, op);
        if let Err(divergence) = model.apply(op, &outcome) {
            panic!("model divergence: {divergence:?}");
        }

        let state = observe(&session);
        assert_eq!(state, model.observable_state());
        assert!(state.drawn.iter().all(|&p| p < state.names.len()));
        assert_eq!(session.remaining(), state.names.len() - state.drawn.len());
    }
});
