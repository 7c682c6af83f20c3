//! Session events and actions.
//!
//! Events are what the presentation layer feeds in; actions are what it
//! gets back to render or log. The session never performs I/O itself.

/// Input to [`Session::handle`](crate::Session::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// User submitted a name.
    AdmitName {
        /// Raw text as typed, before trimming.
        raw: String,
    },

    /// User asked for a draw.
    Draw,

    /// User asked to start over.
    Reset,
}

/// Severity for [`SessionAction::Log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug,
    /// Lifecycle milestone.
    Info,
}

/// Output of [`Session::handle`](crate::Session::handle) for the caller to
/// execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// A name joined the roster; re-render the list.
    NameAdmitted {
        /// Trimmed name as stored.
        name: String,
        /// Its position in the roster.
        position: usize,
    },

    /// A winner was drawn; highlight it.
    WinnerDrawn {
        /// Roster position of the winner.
        position: usize,
        /// Winner's name.
        name: String,
        /// Positions still undrawn after this draw.
        remaining: usize,
    },

    /// The last undrawn position was just consumed.
    RosterExhausted {
        /// Roster size at exhaustion.
        total: usize,
    },

    /// Roster and engine were cleared.
    SessionReset,

    /// Diagnostic message for the caller's logger.
    Log {
        /// Severity.
        level: LogLevel,
        /// Message text.
        message: String,
    },
}
