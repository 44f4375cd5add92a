//! Transaction identifiers
//!
//! Ids are small positive integers handed out sequentially per data file, so
//! they are easy to type and read back from a listing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// The id given to the first transaction in an empty file
    pub const FIRST: TransactionId = TransactionId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` past `u64::MAX`
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Next free id given the ids already in use: `max + 1`, or 1 when empty
    ///
    /// Returns `None` when the largest id in use is `u64::MAX`.
    pub fn next_after<I>(existing: I) -> Option<Self>
    where
        I: IntoIterator<Item = TransactionId>,
    {
        match existing.into_iter().max() {
            Some(max) => max.next(),
            None => Some(Self::FIRST),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_empty() {
        assert_eq!(
            TransactionId::next_after(Vec::<TransactionId>::new()),
            Some(TransactionId::FIRST)
        );
    }

    #[test]
    fn test_next_after_uses_max_not_count() {
        let ids = [3, 1, 7].map(TransactionId::new);
        assert_eq!(TransactionId::next_after(ids), Some(TransactionId::new(8)));
    }

    #[test]
    fn test_next_after_max_id_is_exhausted() {
        let ids = [TransactionId::new(1), TransactionId::new(u64::MAX)];
        assert_eq!(TransactionId::next_after(ids), None);
        assert_eq!(TransactionId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_serialization() {
        let id = TransactionId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
