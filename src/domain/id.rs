//! Outcome-token identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome-token identifier - newtype for type safety.
///
/// Polymarket calls these "asset ids" on the market websocket and
/// "CLOB token ids" on the Gamma API; both name the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(String);

impl TokenId {
    /// Create a new `TokenId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the token ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_id_new_and_as_str() {
        let id = TokenId::new("7151");
        assert_eq!(id.as_str(), "7151");
    }

    #[test]
    fn token_id_display() {
        let id = TokenId::from("display-test".to_string());
        assert_eq!(format!("{id}"), "display-test");
    }

    #[test]
    fn token_ids_compare_by_value() {
        assert_eq!(TokenId::from("a"), TokenId::new(String::from("a")));
        assert_ne!(TokenId::from("a"), TokenId::from("b"));
    }
}
