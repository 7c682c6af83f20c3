//! Terminal presentation adapter.
//!
//! Reads one command per line, turns it into a [`SessionEvent`], executes the
//! returned [`SessionAction`]s by rendering text, and translates rejections
//! into user messages. Everything goes through `BufRead`/`Write` so the
//! console can be driven from buffers in tests.

use std::io::{BufRead, Write};

use sorteo_core::{
    DrawRejection, Environment, LogLevel, RejectionReason, Session, SessionAction, SessionError,
    SessionEvent,
};

use crate::error::CliError;

const HELP: &str = "\
Commands:
  add <name>   add a name (any other line is added as a name too)
  draw         draw a name that has not been drawn yet
  list         show the roster
  status       show how many names are left
  reset        clear the roster and start over
  help         show this message
  quit         leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a name.
    Admit(String),
    /// Draw a name.
    Draw,
    /// Show the roster.
    List,
    /// Show draw progress.
    Status,
    /// Start over.
    Reset,
    /// Show help.
    Help,
    /// Leave the prompt.
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Command words are lowercase and exact; anything else is a name, so a
    /// friend literally called "draw" is added with `add draw`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "draw" => Self::Draw,
            "list" => Self::List,
            "status" => Self::Status,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "add" => Self::Admit(String::new()),
            trimmed => match trimmed.split_once(char::is_whitespace) {
                Some(("add", name)) => Self::Admit(name.to_owned()),
                _ => Self::Admit(line.to_owned()),
            },
        }
    }
}

/// Whether the prompt loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Interactive front end over one [`Session`].
pub struct Console<E: Environment, W: Write> {
    /// The game being played.
    session: Session<E>,
    /// Where rendered text goes.
    out: W,
    /// Whether to print a `> ` prompt before each line.
    prompt: bool,
}

impl<E: Environment, W: Write> Console<E, W> {
    /// Create a console writing to `out`, without prompts.
    pub fn new(session: Session<E>, out: W) -> Self {
        Self { session, out, prompt: false }
    }

    /// Create a console that prompts before each line, for terminals.
    pub fn interactive(session: Session<E>, out: W) -> Self {
        Self { session, out, prompt: true }
    }

    /// The session behind the console.
    pub fn session(&self) -> &Session<E> {
        &self.session
    }

    /// Everything written so far goes here.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Read commands until end of input or `quit`.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily; the replacement
    /// character then fails name admission like any other invalid input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<(), CliError> {
        writeln!(self.out, "Add names, then draw. Type `help` for commands.")?;
        self.write_prompt()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if self.execute(Command::parse(&line))? == Flow::Quit {
                break;
            }
            self.write_prompt()?;
        }

        Ok(())
    }

    /// Execute a single command.
    ///
    /// # Errors
    ///
    /// Returns `CliError` on I/O failure or when the session reports a
    /// contract violation. User rejections are rendered, not returned.
    pub fn execute(&mut self, command: Command) -> Result<Flow, CliError> {
        let event = match command {
            Command::Admit(raw) => SessionEvent::AdmitName { raw },
            Command::Draw => SessionEvent::Draw,
            Command::Reset => SessionEvent::Reset,
            Command::List => {
                self.render_roster()?;
                return Ok(Flow::Continue);
            },
            Command::Status => {
                self.render_status()?;
                return Ok(Flow::Continue);
            },
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            },
            Command::Quit => return Ok(Flow::Quit),
        };

        match self.session.handle(event) {
            Ok(actions) => self.execute_actions(actions)?,
            Err(e) if e.is_user_error() => writeln!(self.out, "{}", rejection_message(&e))?,
            Err(e) => {
                tracing::error!("session contract violation: {}", e);
                return Err(e.into());
            },
        }

        Ok(Flow::Continue)
    }

    fn execute_actions(&mut self, actions: Vec<SessionAction>) -> Result<(), CliError> {
        for action in actions {
            match action {
                SessionAction::NameAdmitted { name, .. } => {
                    writeln!(self.out, "Added {name}.")?;
                    self.render_roster()?;
                },
                SessionAction::WinnerDrawn { name, remaining, .. } => {
                    writeln!(self.out, "Your secret friend is: {name}")?;
                    self.render_roster()?;
                    if remaining > 0 {
                        writeln!(self.out, "{remaining} left to draw.")?;
                    }
                },
                SessionAction::RosterExhausted { total } => {
                    writeln!(self.out, "All {total} names have been drawn.")?;
                },
                SessionAction::SessionReset => {
                    writeln!(self.out, "Game reset. The roster is empty.")?;
                    self.render_status()?;
                },
                SessionAction::Log { level, message } => match level {
                    LogLevel::Debug => tracing::debug!("{}", message),
                    LogLevel::Info => tracing::info!("{}", message),
                },
            }
        }

        Ok(())
    }

    /// Numbered roster; `*` marks drawn names, `>` the latest winner.
    fn render_roster(&mut self) -> Result<(), CliError> {
        let roster = self.session.roster();
        if roster.is_empty() {
            writeln!(self.out, "(no names yet)")?;
            return Ok(());
        }

        let engine = self.session.engine();
        let latest = self.session.last_winner_position();
        for (position, name) in roster.names().enumerate() {
            let marker = if latest == Some(position) {
                '>'
            } else if engine.has_drawn(position) {
                '*'
            } else {
                ' '
            };
            writeln!(self.out, "{marker} {}. {name}", position + 1)?;
        }

        let label = self.draw_label();
        writeln!(self.out, "[{label}]")?;
        Ok(())
    }

    fn render_status(&mut self) -> Result<(), CliError> {
        let total = self.session.roster().size();
        let drawn = self.session.engine().drawn_count();
        let label = self.draw_label();
        writeln!(self.out, "{drawn} of {total} drawn, {} left.", self.session.remaining())?;
        writeln!(self.out, "[{label}]")?;
        if self.session.can_reset() {
            writeln!(self.out, "Type `reset` to start over.")?;
        }
        Ok(())
    }

    /// Text of the draw control for the current state.
    fn draw_label(&self) -> &'static str {
        let drawn = self.session.engine().drawn_count();
        if drawn == 0 {
            "Draw a name"
        } else if self.session.remaining() > 0 {
            "Draw another name"
        } else {
            "Everyone has been drawn"
        }
    }

    fn write_prompt(&mut self) -> Result<(), CliError> {
        if !self.prompt {
            return Ok(());
        }
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }
}

/// User-facing text for a rejection.
pub fn rejection_message(error: &SessionError) -> String {
    match error {
        SessionError::Rejected(RejectionReason::Empty) => "Please enter a name.".to_string(),
        SessionError::Rejected(RejectionReason::InvalidFormat) => {
            "Please enter a valid name. Use only letters and spaces.".to_string()
        },
        SessionError::Rejected(RejectionReason::Duplicate) => {
            "You already added someone with that name, try another.".to_string()
        },
        SessionError::Draw(DrawRejection::EmptyRoster) => "Please add a name first.".to_string(),
        SessionError::Draw(DrawRejection::Exhausted) => {
            "Everyone has already been drawn. Type `reset` to start over.".to_string()
        },
        SessionError::RosterFull { limit } => {
            format!("The roster is full ({limit} names).")
        },
        other => other.to_string(),
    }
}
