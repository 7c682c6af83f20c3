//! Roster of admitted names.
//!
//! Owns the ordered list of names and the admission rules. Insertion order is
//! display order; positions handed out by the draw engine index into it.

use crate::error::{RejectionReason, RosterError};

/// Accented letters accepted in names besides ASCII letters.
const ACCENTED_LETTERS: &str = "ÁÉÍÓÚáéíóúÑñ";

/// Ordered collection of admitted, validated, unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Admitted names, in insertion order.
    entries: Vec<String>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Check a name against the admission rules without admitting it.
    ///
    /// Returns the trimmed name on success. Checks run in order: empty,
    /// format, duplicate.
    pub fn validate<'a>(&self, raw: &'a str) -> Result<&'a str, RejectionReason> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(RejectionReason::Empty);
        }

        if !name.chars().all(is_name_char) {
            return Err(RejectionReason::InvalidFormat);
        }

        if self.contains(name) {
            return Err(RejectionReason::Duplicate);
        }

        Ok(name)
    }

    /// Validate and append a name.
    ///
    /// On success the roster grows by exactly one and the stored (trimmed)
    /// name is returned. On rejection nothing changes.
    pub fn admit(&mut self, raw: &str) -> Result<&str, RejectionReason> {
        let name = self.validate(raw)?.to_owned();
        let position = self.entries.len();
        tracing::debug!(name = %name, position, "name admitted");

        self.entries.push(name);
        Ok(&self.entries[position])
    }

    /// Number of admitted names.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// True when no names are admitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name at a position.
    pub fn name_at(&self, index: usize) -> Result<&str, RosterError> {
        self.entries
            .get(index)
            .map(String::as_str)
            .ok_or(RosterError::IndexOutOfRange { index, size: self.entries.len() })
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    /// Names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Remove every name.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

/// Letters, whitespace, and the accepted accented letters.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || ACCENTED_LETTERS.contains(c)
}
