//! Model session.
//!
//! Plain vectors and linear scans, no sampling. The model cannot predict
//! which position a draw picks, so it checks that the real pick was one of
//! the legal candidates and then adopts it.

use sorteo_core::{DrawRejection, RejectionReason};

use super::operation::{Divergence, Operation, Outcome};

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Roster in display order.
    pub names: Vec<String>,
    /// Drawn positions, sorted.
    pub drawn: Vec<usize>,
    /// Most recent winner position.
    pub last_winner: Option<usize>,
}

/// Reference model of a session.
#[derive(Debug, Clone, Default)]
pub struct ModelSession {
    /// Admitted names.
    names: Vec<String>,
    /// Drawn positions, in draw order.
    drawn: Vec<usize>,
    /// Most recent winner.
    last_winner: Option<usize>,
}

impl ModelSession {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions a draw may legally return right now.
    pub fn candidates(&self) -> Vec<usize> {
        (0..self.names.len()).filter(|p| !self.drawn.contains(p)).collect()
    }

    /// Number of undrawn positions.
    pub fn remaining(&self) -> usize {
        self.names.len() - self.drawn.len()
    }

    /// Check the real outcome of `op` against the model and advance.
    ///
    /// # Errors
    ///
    /// Returns `Divergence` if the real outcome is not one the model allows.
    /// The model is left unchanged in that case.
    pub fn apply(&mut self, op: &Operation, actual: &Outcome) -> Result<(), Divergence> {
        let diverge = |expected: String| Divergence {
            operation: op.clone(),
            expected,
            actual: actual.clone(),
        };

        match op {
            Operation::Admit { name } => {
                let expected = self.expected_admission(name.text());
                let matches = match (&expected, actual) {
                    (Ok(want), Outcome::Admitted(got)) => want == got,
                    (Err(want), Outcome::Rejected(got)) => want == got,
                    _ => false,
                };
                if !matches {
                    return Err(diverge(format!("{expected:?}")));
                }
                if let Ok(name) = expected {
                    self.names.push(name);
                }
            },
            Operation::Draw => {
                let candidates = self.candidates();
                match actual {
                    Outcome::Refused(DrawRejection::EmptyRoster) if self.names.is_empty() => {},
                    Outcome::Refused(DrawRejection::Exhausted)
                        if !self.names.is_empty() && candidates.is_empty() => {},
                    Outcome::Drew(position) if candidates.contains(position) => {
                        self.drawn.push(*position);
                        self.last_winner = Some(*position);
                    },
                    _ => return Err(diverge(format!("one of {candidates:?}"))),
                }
            },
            Operation::Reset => {
                if *actual != Outcome::Reset {
                    return Err(diverge("Reset".to_string()));
                }
                self.names.clear();
                self.drawn.clear();
                self.last_winner = None;
            },
        }

        Ok(())
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let mut drawn = self.drawn.clone();
        drawn.sort_unstable();
        ObservableState { names: self.names.clone(), drawn, last_winner: self.last_winner }
    }

    /// Admission decision, written directly from the rules.
    fn expected_admission(&self, raw: &str) -> Result<String, RejectionReason> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(RejectionReason::Empty);
        }

        let allowed = |c: char| {
            c.is_ascii_uppercase()
                || c.is_ascii_lowercase()
                || c.is_whitespace()
                || "ÁÉÍÓÚáéíóúÑñ".contains(c)
        };
        if !name.chars().all(allowed) {
            return Err(RejectionReason::InvalidFormat);
        }

        if self.names.iter().any(|n| n == name) {
            return Err(RejectionReason::Duplicate);
        }

        Ok(name.to_string())
    }
}
