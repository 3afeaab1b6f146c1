use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::ClientConfig,
    error::{FplError, Result},
    LeagueId,
};

/// Base path for the FPL JSON API.
pub const API_BASE_URL: &str = "https://fantasy.premierleague.com/drf/";

/// Site root; an anonymous GET here sets the `csrftoken` cookie.
pub const SITE_URL: &str = "https://fantasy.premierleague.com/";

/// Accounts endpoint that accepts the login form.
pub const LOGIN_URL: &str = "https://users.premierleague.com/accounts/login/";

/// Where the accounts service sends the browser after a login.
pub const LOGIN_REDIRECT_URI: &str = "https://fantasy.premierleague.com/a/login";

/// Application identifier the login form must carry.
pub const LOGIN_APP_ID: &str = "plfpl-web";

/// Name of the cookie holding the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Text only present on pages rendered for a logged-in user.
pub const LOGIN_SUCCESS_MARKER: &str = "Sign Out";

pub fn standings_url(api_base: &str, league_id: LeagueId) -> String {
    format!("{api_base}leagues-h2h-standings/{league_id}")
}

pub fn fixtures_page_url(api_base: &str, league_id: LeagueId, page: u32) -> String {
    format!("{api_base}leagues-entries-and-h2h-matches/league/{league_id}?page={page}")
}

/// GET `url` and decode the body as `T`.
///
/// Non-2xx statuses surface as [`FplError::Network`]; a body that does not
/// match `T` surfaces as [`FplError::Parse`]. Both carry the URL.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    timeout_secs: u64,
) -> Result<T> {
    debug!("GET {url}");

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|e| FplError::from_reqwest(url, timeout_secs, e))?;

    let body = response
        .text()
        .await
        .map_err(|e| FplError::from_reqwest(url, timeout_secs, e))?;

    serde_json::from_str(&body).map_err(|source| FplError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Unauthenticated client for the public endpoints.
#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    config: ClientConfig,
}

impl FplClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = config.build_client(None)?;
        Ok(Self { http, config })
    }

    /// Client configured from `FPL_API_BASE_URL` / `FPL_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        get_json(&self.http, url, self.config.timeout_secs()).await
    }
}
