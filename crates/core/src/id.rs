//! Human-readable item identifiers.
//!
//! An identifier is a three-letter category prefix followed by a decimal
//! sequence number (`PHO0`, `PHO1`, `LAP0`, ...). Caller-supplied identifiers
//! are accepted as-is as long as they are not blank, so the sequence part is
//! not guaranteed to be numeric.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of leading characters that form the category prefix.
pub const PREFIX_LEN: usize = 3;

/// Identifier of a stored item, unique within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Build an identifier from a category prefix and a sequence number.
    pub fn new(prefix: &str, sequence: u64) -> Self {
        Self(format!("{prefix}{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The characters before the sequence part.
    pub fn prefix(&self) -> &str {
        let (prefix, _) = self.split();
        prefix
    }

    /// Numeric suffix after the prefix, if it parses.
    ///
    /// Identifiers shorter than the prefix or with a non-numeric tail yield
    /// `None`; numbering skips those instead of failing.
    pub fn sequence(&self) -> Option<u64> {
        let (_, tail) = self.split();
        tail.parse().ok()
    }

    fn split(&self) -> (&str, &str) {
        match self.0.char_indices().nth(PREFIX_LEN) {
            Some((at, _)) => self.0.split_at(at),
            None => (self.0.as_str(), ""),
        }
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ItemId: identifier cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_concatenates_prefix_and_sequence() {
        let id = ItemId::new("PHO", 12);
        assert_eq!(id.as_str(), "PHO12");
        assert_eq!(id.prefix(), "PHO");
        assert_eq!(id.sequence(), Some(12));
    }

    #[test]
    fn non_numeric_suffix_has_no_sequence() {
        let id: ItemId = "PHOabc".parse().unwrap();
        assert_eq!(id.prefix(), "PHO");
        assert_eq!(id.sequence(), None);
    }

    #[test]
    fn short_identifier_has_no_sequence() {
        let id: ItemId = "PH".parse().unwrap();
        assert_eq!(id.prefix(), "PH");
        assert_eq!(id.sequence(), None);

        let id: ItemId = "PHO".parse().unwrap();
        assert_eq!(id.sequence(), None);
    }

    #[test]
    fn prefix_split_respects_char_boundaries() {
        let id: ItemId = "ĐIỆ7".parse().unwrap();
        assert_eq!(id.prefix(), "ĐIỆ");
        assert_eq!(id.sequence(), Some(7));
    }

    #[test]
    fn blank_identifier_is_rejected() {
        let err = "   ".parse::<ItemId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ItemId::new("LAP", 3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"LAP3\"");
    }
}
