//! Session state machine.
//!
//! A `Session` is one game: a roster, a draw engine over it, and the most
//! recent winner. It is created once per game and passed by reference to
//! whatever needs it; nothing in the crate holds global state.

use crate::{
    engine::{DrawEngine, DrawPhase, DrawStrategy},
    env::Environment,
    error::SessionError,
    event::{LogLevel, SessionAction, SessionEvent},
    roster::Roster,
};

/// Session configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Sampling strategy for the draw engine.
    pub strategy: DrawStrategy,
    /// Maximum number of names, `None` for unbounded.
    pub max_roster: Option<usize>,
}

/// Result of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    /// Roster position of the winner.
    pub position: usize,
    /// Winner's name.
    pub name: String,
    /// Positions still undrawn after this draw.
    pub remaining: usize,
}

/// Roster plus draw engine plus last winner.
///
/// Pure state machine - returns values and actions, caller handles I/O.
///
/// # Type Parameters
///
/// - `E`: Environment implementation for randomness
#[derive(Debug, Clone)]
pub struct Session<E: Environment> {
    /// Admitted names.
    roster: Roster,

    /// Draw state over the roster.
    engine: DrawEngine<E>,

    /// Position of the most recent winner since the last reset.
    last_winner: Option<usize>,

    /// Limits and strategy.
    config: SessionConfig,
}

impl<E: Environment> Session<E> {
    /// Create a session with default configuration.
    pub fn new(env: E) -> Self {
        Self::with_config(env, SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(env: E, config: SessionConfig) -> Self {
        Self {
            roster: Roster::new(),
            engine: DrawEngine::with_strategy(env, config.strategy),
            last_winner: None,
            config,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read-only view of the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read-only view of the draw engine.
    pub fn engine(&self) -> &DrawEngine<E> {
        &self.engine
    }

    /// Current phase of the game.
    pub fn phase(&self) -> DrawPhase {
        self.engine.phase(self.roster.size())
    }

    /// Names not yet drawn.
    pub fn remaining(&self) -> usize {
        self.engine.remaining(self.roster.size())
    }

    /// Name of the most recent winner, if any draw happened since reset.
    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.and_then(|position| self.roster.name_at(position).ok())
    }

    /// Position of the most recent winner.
    pub fn last_winner_position(&self) -> Option<usize> {
        self.last_winner
    }

    /// Whether a reset should be offered.
    ///
    /// True once at least one draw has happened since the last reset,
    /// exhaustion included.
    pub fn can_reset(&self) -> bool {
        self.engine.drawn_count() > 0
    }

    /// Validate and append a name.
    pub fn admit(&mut self, raw: &str) -> Result<String, SessionError> {
        if let Some(limit) = self.config.max_roster {
            // Rejections for the name itself take precedence over the limit.
            self.roster.validate(raw)?;
            if self.roster.size() >= limit {
                return Err(SessionError::RosterFull { limit });
            }
        }

        Ok(self.roster.admit(raw)?.to_owned())
    }

    /// Draw the next winner.
    pub fn draw(&mut self) -> Result<Winner, SessionError> {
        let size = self.roster.size();
        let position = self.engine.next(size)?;
        let name = self.roster.name_at(position)?.to_owned();

        self.last_winner = Some(position);

        Ok(Winner { position, name, remaining: self.engine.remaining(size) })
    }

    /// Clear roster, engine, and last winner together.
    pub fn reset(&mut self) {
        self.roster.reset();
        self.engine.reset();
        self.last_winner = None;
    }

    /// Process an event and return resulting actions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the event is rejected. State is unchanged
    /// on error.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Vec<SessionAction>, SessionError> {
        match event {
            SessionEvent::AdmitName { raw } => self.handle_admit(&raw),
            SessionEvent::Draw => self.handle_draw(),
            SessionEvent::Reset => Ok(self.handle_reset()),
        }
    }

    fn handle_admit(&mut self, raw: &str) -> Result<Vec<SessionAction>, SessionError> {
        let name = self.admit(raw)?;
        let position = self.roster.size() - 1;

        Ok(vec![
            SessionAction::NameAdmitted { name: name.clone(), position },
            SessionAction::Log {
                level: LogLevel::Debug,
                message: format!("Admitted {name} at position {position}"),
            },
        ])
    }

    fn handle_draw(&mut self) -> Result<Vec<SessionAction>, SessionError> {
        let Winner { position, name, remaining } = self.draw()?;

        let mut actions = vec![
            SessionAction::Log {
                level: LogLevel::Debug,
                message: format!("Drew {name} at position {position}, {remaining} left"),
            },
            SessionAction::WinnerDrawn { position, name, remaining },
        ];

        if remaining == 0 {
            let total = self.roster.size();
            tracing::info!(total, "roster exhausted");
            actions.push(SessionAction::RosterExhausted { total });
        }

        Ok(actions)
    }

    fn handle_reset(&mut self) -> Vec<SessionAction> {
        let had_names = self.roster.size();
        self.reset();

        vec![
            SessionAction::SessionReset,
            SessionAction::Log {
                level: LogLevel::Info,
                message: format!("Session reset, cleared {had_names} names"),
            },
        ]
    }
}
