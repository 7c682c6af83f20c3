//! Sorteo binary.
//!
//! # Usage
//!
//! ```bash
//! # Start with an empty roster
//! sorteo
//!
//! # Pre-load names and use the resampling strategy
//! sorteo --name Ana --name Beto --strategy resample
//! ```

use std::io::{self, IsTerminal};

use clap::Parser;
use sorteo_cli::{Args, Command, Console, SystemEnv};
use sorteo_core::Session;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let config = args.session_config();
    tracing::info!(strategy = ?config.strategy, max_roster = ?config.max_roster, "sorteo starting");

    let session = Session::with_config(SystemEnv::new(), config);
    let stdout = io::stdout().lock();
    let mut console = if io::stdin().is_terminal() {
        Console::interactive(session, stdout)
    } else {
        Console::new(session, stdout)
    };

    for name in args.names {
        console.execute(Command::Admit(name))?;
    }

    console.run(io::stdin().lock())?;

    tracing::info!(
        names = console.session().roster().size(),
        drawn = console.session().engine().drawn_count(),
        "sorteo exiting"
    );

    Ok(())
}
