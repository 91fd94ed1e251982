//! Student identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Student number - newtype over the integer primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Create a new `StudentId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_surrounding_whitespace() {
        let id: StudentId = " 42\n".parse().unwrap();
        assert_eq!(id, StudentId::new(42));
    }

    #[test]
    fn parses_ids_beyond_32_bits() {
        let id: StudentId = "3000000000".parse().unwrap();
        assert_eq!(id.value(), 3_000_000_000);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!("abc".parse::<StudentId>().is_err());
        assert!("".parse::<StudentId>().is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&StudentId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
