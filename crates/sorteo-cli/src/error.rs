//! Front end error types.

use sorteo_core::SessionError;
use thiserror::Error;

/// Errors that stop the terminal front end.
///
/// User-correctable rejections are rendered as messages and never reach
/// this type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session reported a contract violation.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}
