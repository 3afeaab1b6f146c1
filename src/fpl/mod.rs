//! Fantasy Premier League endpoints and models
//!
//! - `http`: endpoint constants, URL builders and the public client
//! - `session`: CSRF-aware login producing an authenticated session
//! - `fixtures`: bounded walk over the paginated H2H matches endpoint
//! - `league`: the H2H league entity
//! - `types`: typed records for the JSON documents

pub mod fixtures;
pub mod http;
pub mod league;
pub mod session;
pub mod types;
