//! Deterministic test harness for sorteo.
//!
//! Seeded implementation of the `Environment` trait plus a reference model
//! and goodness-of-fit helpers, so draw behavior can be verified
//! reproducibly.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference session. Operations are applied
//! to the real `Session`, and each real outcome is checked against what the
//! model allows before both advance.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod driver;
pub mod model;
pub mod sim_env;
pub mod stats;

pub use driver::{apply, observe};
pub use model::{
    Divergence, ModelSession, NAME_POOL, NameChoice, ObservableState, Operation, Outcome,
};
pub use sim_env::SimEnv;
pub use stats::{chi_square_uniform, critical_value, is_uniform};
