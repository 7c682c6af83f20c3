//! Command-line arguments.

use clap::{Parser, ValueEnum};
use sorteo_core::{DrawStrategy, SessionConfig};

/// Draw names from a roster, uniformly and without repetition
#[derive(Parser, Debug)]
#[command(name = "sorteo")]
#[command(about = "Build a roster of names and draw them one at a time")]
#[command(version)]
pub struct Args {
    /// Sampling strategy for draws
    #[arg(long, value_enum, default_value_t = StrategyArg::SwapRemove)]
    pub strategy: StrategyArg,

    /// Maximum number of names on the roster
    #[arg(long)]
    pub max_roster: Option<usize>,

    /// Name to add before the prompt starts (repeatable)
    #[arg(short, long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Command-line spelling of [`DrawStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Retry while the sampled position was already drawn.
    Resample,
    /// Remove from an explicit pool of undrawn positions.
    SwapRemove,
}

impl From<StrategyArg> for DrawStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Resample => Self::Resample,
            StrategyArg::SwapRemove => Self::SwapRemove,
        }
    }
}

impl Args {
    /// Session configuration described by these arguments.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig { strategy: self.strategy.into(), max_roster: self.max_roster }
    }
}
