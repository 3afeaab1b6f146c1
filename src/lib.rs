//! Fantasy Premier League Head-to-Head Client
//!
//! Loads head-to-head league standings from the FPL API and, after logging
//! in, walks the paginated fixture list of a league.
//!
//! ## Features
//!
//! - **League Metadata**: name, creation date, starting gameweek, knockout
//!   rounds, standings and new entries from a single request
//! - **Session Login**: CSRF-aware login that keeps its own cookie jar
//! - **Fixtures**: every H2H match of a league, page by page, in API order,
//!   with a hard page bound and cooperative cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_h2h::{ClientConfig, FplClient, League, LeagueId, Session};
//! use secrecy::SecretString;
//!
//! # async fn example() -> fpl_h2h::Result<()> {
//! let client = FplClient::new(ClientConfig::default())?;
//! let league = League::load(&client, LeagueId::new(31187)).await?;
//! println!("{league}: {} entries", league.standings().len());
//!
//! let password = SecretString::from("hunter2");
//! let session = Session::login(client.config(), "me@example.com", &password).await?;
//! let fixtures = league.get_fixtures(&session).await?;
//! println!("{} fixtures", fixtures.len());
//! session.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at another API host or change the request timeout:
//! ```bash
//! export FPL_API_BASE_URL=http://localhost:8080/drf/
//! export FPL_TIMEOUT_SECS=10
//! ```

pub mod config;
pub mod error;
pub mod fpl;
pub mod ids;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{FplError, Result};
pub use fpl::{
    fixtures::fetch_fixtures,
    http::FplClient,
    league::League,
    session::Session,
    types::{H2HMatch, NewEntry, StandingsEntry},
};
pub use ids::LeagueId;

pub const API_BASE_ENV_VAR: &str = "FPL_API_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "FPL_TIMEOUT_SECS";
