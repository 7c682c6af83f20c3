//! Sorteo terminal front end.
//!
//! This crate is the presentation adapter around `sorteo-core`:
//! - `SystemEnv` supplies OS randomness to the draw engine
//! - `Console` reads commands, feeds the session, and renders its actions
//! - `Args` maps command-line flags to a `SessionConfig`
//!
//! ## Architecture
//!
//! ```text
//! sorteo-cli
//!   ├─ Args         (clap flags → SessionConfig)
//!   ├─ SystemEnv    (production Environment impl)
//!   └─ Console      (line input → SessionEvent, SessionAction → text)
//!        └─ Session (sorteo-core: Roster + DrawEngine)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod args;
mod console;
mod error;
mod system_env;

pub use args::{Args, StrategyArg};
pub use console::{Command, Console, Flow, rejection_message};
pub use error::CliError;
pub use system_env::SystemEnv;
