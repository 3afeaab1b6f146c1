//! Error types for the FPL head-to-head league client

use crate::LeagueId;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("Unexpected response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("League {league_id} still returned fixtures after {max_pages} pages")]
    Fetch { league_id: LeagueId, max_pages: u32 },

    #[error("Fixture retrieval for league {league_id} was cancelled")]
    Cancelled { league_id: LeagueId },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),
}

impl FplError {
    /// Classify a transport error against the URL it was issued for.
    pub(crate) fn from_reqwest(url: &str, timeout_secs: u64, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FplError::Timeout {
                url: url.to_string(),
                timeout_secs,
            }
        } else {
            FplError::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FplError::Timeout { .. })
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, FplError::Auth { .. })
    }
}
