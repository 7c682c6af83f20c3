//! Reference model for model-based testing.
//!
//! The model is a simplified session that captures the admission and draw
//! rules without sampling. It serves as the oracle against which the real
//! `Session` is verified.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Rules, not mechanism: captures WHAT is legal, not HOW it is picked

pub mod operation;
mod session;

pub use operation::{Divergence, NAME_POOL, NameChoice, Operation, Outcome};
pub use session::{ModelSession, ObservableState};
