//! Operations for model-based testing.
//!
//! Operations represent every user action. They are generated randomly by
//! proptest (or `arbitrary` in fuzzing) and applied to both the model and the
//! real session.

use arbitrary::Arbitrary;
use sorteo_core::{DrawRejection, RejectionReason};

/// Names the generator picks from.
///
/// Mixes valid names, near-duplicates and every rejection class so short
/// operation sequences still hit all admission paths.
pub const NAME_POOL: &[&str] = &[
    "Ana",
    "Beto",
    "Cata",
    "Dani",
    "José",
    "Ñoño",
    "María José",
    "ana",
    "  Ana  ",
    "",
    "   ",
    "John3",
    "Ana-Maria!",
    "Zoë",
];

/// Index into [`NAME_POOL`], wrapped on lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct NameChoice(pub u8);

impl NameChoice {
    /// The raw text this choice stands for.
    pub fn text(self) -> &'static str {
        NAME_POOL[usize::from(self.0) % NAME_POOL.len()]
    }
}

/// Operations that can be applied to a session.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Submit a name.
    Admit {
        /// Which name to submit.
        name: NameChoice,
    },

    /// Request a draw.
    Draw,

    /// Start over.
    Reset,
}

/// What an operation did, as observed from outside.
///
/// Used to compare model and real session behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Name admitted (trimmed form).
    Admitted(String),

    /// Name rejected.
    Rejected(RejectionReason),

    /// Position drawn.
    Drew(usize),

    /// Draw refused.
    Refused(DrawRejection),

    /// Session reset.
    Reset,

    /// Any other session error (limits, contract violations).
    Failed(String),
}

/// Model and real session disagreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// Operation that diverged.
    pub operation: Operation,
    /// What the model allows.
    pub expected: String,
    /// What the real session did.
    pub actual: Outcome,
}
