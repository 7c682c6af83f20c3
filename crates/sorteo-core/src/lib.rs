//! Sorteo Core
//!
//! Roster and draw state machine: admit names, then draw them one at a time,
//! uniformly at random and without repetition, until none are left.
//!
//! # Architecture
//!
//! The core is a pure state machine that:
//! - Validates and stores names ([`Roster`])
//! - Picks undrawn positions uniformly ([`DrawEngine`])
//! - Ties both together per game and reports what to render ([`Session`])
//! - Uses the [`Environment`] trait for randomness (deterministic testing)
//!
//! Rendering, input capture and persistence live outside this crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod roster;
pub mod session;

pub use engine::{DrawEngine, DrawPhase, DrawStrategy};
pub use env::Environment;
pub use error::{DrawRejection, RejectionReason, RosterError, SessionError};
pub use event::{LogLevel, SessionAction, SessionEvent};
pub use roster::Roster;
pub use session::{Session, SessionConfig, Winner};
