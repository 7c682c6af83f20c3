//! Rejection and error types.
//!
//! Every failure in the core is an ordinary returned value. User-correctable
//! outcomes (a bad name, nothing left to draw) and caller contract violations
//! (an out-of-range position) share one taxonomy so the adapter can decide
//! what to show.

use thiserror::Error;

/// Why a submitted name was not admitted to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// Name has no non-whitespace content.
    #[error("name is empty")]
    Empty,

    /// Name contains characters other than letters and spaces.
    #[error("name may only contain letters and spaces")]
    InvalidFormat,

    /// Name is already on the roster (exact, case-sensitive match).
    #[error("name is already on the roster")]
    Duplicate,
}

/// Why a draw request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawRejection {
    /// The roster has no names.
    #[error("roster is empty")]
    EmptyRoster,

    /// Every position has already been drawn.
    #[error("every name has already been drawn")]
    Exhausted,

    /// The roster is smaller than positions the engine already tracks.
    ///
    /// Happens when the roster is reset without resetting the engine.
    #[error("roster shrank: engine knows {known} positions, roster has {actual}")]
    RosterShrank {
        /// Positions the engine has already seen.
        known: usize,
        /// Roster size passed to the draw.
        actual: usize,
    },
}

/// Errors from roster lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Position outside `[0, size)`.
    #[error("index {index} out of range for roster of {size}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Roster size at the time of the lookup.
        size: usize,
    },
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Name was rejected by the roster.
    #[error("rejected: {0}")]
    Rejected(#[from] RejectionReason),

    /// Draw was refused by the engine.
    #[error("cannot draw: {0}")]
    Draw(#[from] DrawRejection),

    /// Roster lookup failed.
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),

    /// Roster already holds the configured maximum.
    #[error("roster is full ({limit} names)")]
    RosterFull {
        /// Configured maximum roster size.
        limit: usize,
    },
}

impl SessionError {
    /// Returns true if the user can fix this by changing their input.
    ///
    /// Contract violations (`IndexOutOfRange`, `RosterShrank`) indicate a bug
    /// in the caller, not something to show the user.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Rejected(_)
            | Self::RosterFull { .. }
            | Self::Draw(DrawRejection::EmptyRoster | DrawRejection::Exhausted) => true,

            Self::Draw(DrawRejection::RosterShrank { .. }) | Self::Roster(_) => false,
        }
    }
}
