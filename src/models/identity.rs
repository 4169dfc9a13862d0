//! Record identifiers

use std::fmt;

/// Identifier of a constructed record, unique within one [`IdSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
    /// Numeric value of the identifier
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing record identifiers, starting at 1
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    /// Create a sequence whose first identifier is 1
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next identifier
    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next += 1;
        id
    }

    /// Identifier the next call to [`IdSequence::next_id`] will return
    #[must_use]
    pub fn peek(&self) -> RecordId {
        RecordId(self.next)
    }

    /// Number of identifiers handed out so far
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}
