//! Client configuration: endpoint URLs, timeouts and the pagination bound.

use crate::{
    error::{FplError, Result},
    fpl::http::{API_BASE_URL, LOGIN_URL, SITE_URL},
    API_BASE_ENV_VAR, TIMEOUT_ENV_VAR,
};
use reqwest::cookie::Jar;
use std::{sync::Arc, time::Duration};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default upper bound on fixture pages walked for one league.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

const USER_AGENT: &str = concat!("fpl-h2h/", env!("CARGO_PKG_VERSION"));

/// Settings shared by the public client and authenticated sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base of the JSON API, always ending in `/`.
    pub api_base: String,
    /// Site root that hands out the `csrftoken` cookie.
    pub site_url: String,
    /// Accounts endpoint the login form is posted to.
    pub login_url: String,
    pub timeout: Duration,
    pub max_pages: u32,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE_URL.to_string(),
            site_url: SITE_URL.to_string(),
            login_url: LOGIN_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `FPL_API_BASE_URL` and `FPL_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a caller-supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_base(base.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| FplError::InvalidConfig {
                key: TIMEOUT_ENV_VAR.to_string(),
                value: raw.clone(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.api_base = base;
        self
    }

    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Page bound for fixture retrieval. Zero is raised to one.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Point every endpoint at a single host, e.g. a local mock server.
    ///
    /// The API lives under `{root}/drf/`, the site root is `{root}/` and the
    /// login form goes to `{root}/accounts/login/`.
    pub fn for_host(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self::default()
            .with_api_base(format!("{root}/drf/"))
            .with_site_url(format!("{root}/"))
            .with_login_url(format!("{root}/accounts/login/"))
    }

    /// Build a `reqwest::Client` honouring the timeout and user agent.
    ///
    /// Sessions pass their own jar so no two sessions ever share cookies.
    pub fn build_client(&self, cookie_jar: Option<Arc<Jar>>) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str());

        if let Some(jar) = cookie_jar {
            builder = builder.cookie_provider(jar);
        }

        builder.build().map_err(FplError::Client)
    }

    pub(crate) fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_targets_live_endpoints() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "https://fantasy.premierleague.com/drf/");
        assert_eq!(config.site_url, "https://fantasy.premierleague.com/");
        assert_eq!(
            config.login_url,
            "https://users.premierleague.com/accounts/login/"
        );
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
    }

    #[test]
    fn test_from_lookup_without_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides_base_and_timeout() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (API_BASE_ENV_VAR, "http://localhost:8080/api"),
            (TIMEOUT_ENV_VAR, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:8080/api/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_ignores_blank_base() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[(API_BASE_ENV_VAR, "  ")])).unwrap();
        assert_eq!(config.api_base, API_BASE_URL);
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let err =
            ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV_VAR, "soon")])).unwrap_err();

        match err {
            FplError::InvalidConfig { key, value } => {
                assert_eq!(key, TIMEOUT_ENV_VAR);
                assert_eq!(value, "soon");
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_for_host_layout() {
        let config = ClientConfig::for_host("http://127.0.0.1:4000/");
        assert_eq!(config.api_base, "http://127.0.0.1:4000/drf/");
        assert_eq!(config.site_url, "http://127.0.0.1:4000/");
        assert_eq!(config.login_url, "http://127.0.0.1:4000/accounts/login/");
    }

    #[test]
    fn test_max_pages_never_zero() {
        assert_eq!(ClientConfig::default().with_max_pages(0).max_pages, 1);
        assert_eq!(ClientConfig::default().with_max_pages(3).max_pages, 3);
    }

    #[test]
    fn test_build_client() {
        let config = ClientConfig::default();
        assert!(config.build_client(None).is_ok());
        assert!(config.build_client(Some(Arc::new(Jar::default()))).is_ok());
    }
}
