//! ID types for Fantasy Premier League.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL league IDs.
///
/// Keeps league IDs from being mixed up with entry IDs, gameweeks and the
/// other integers the API hands back.
///
/// # Examples
///
/// ```rust
/// use fpl_h2h::LeagueId;
///
/// let league_id = LeagueId::new(123456);
/// assert_eq!(league_id.as_u32(), 123456);
/// assert_eq!(league_id.to_string(), "123456");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new LeagueId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_from_str() {
        let id: LeagueId = " 4242 ".parse().unwrap();
        assert_eq!(id, LeagueId::new(4242));
    }

    #[test]
    fn test_league_id_from_str_rejects_garbage() {
        let err = "h2h".parse::<LeagueId>().unwrap_err();
        assert!(matches!(err, FplError::InvalidLeagueId(_)));
    }

    #[test]
    fn test_league_id_serializes_as_number() {
        let json = serde_json::to_value(LeagueId::new(17)).unwrap();
        assert_eq!(json, serde_json::json!(17));
    }
}
