//! Cookie-based login against the FPL accounts service.
//!
//! A GET to the site root plants a `csrftoken` cookie in the session's jar.
//! The token is echoed back in the login form; the accounts service then
//! sets the session cookies that every authenticated endpoint expects.

use std::{fmt, sync::Arc};

use reqwest::{
    cookie::{CookieStore, Jar},
    Client, Url,
};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::http::{self, CSRF_COOKIE, LOGIN_APP_ID, LOGIN_REDIRECT_URI, LOGIN_SUCCESS_MARKER};
use crate::{
    config::ClientConfig,
    error::{FplError, Result},
};

/// An authenticated FPL session.
///
/// Owns its HTTP client and cookie jar. Dropping the session (or calling
/// [`Session::close`]) releases the connection pool and forgets the cookies.
pub struct Session {
    http: Client,
    jar: Arc<Jar>,
    config: ClientConfig,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_base", &self.config.api_base)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Log in with an email and password.
    ///
    /// Fails with [`FplError::Auth`] when the site hands out no CSRF token
    /// or when the login response does not show a signed-in page.
    pub async fn login(
        config: &ClientConfig,
        email: &str,
        password: &SecretString,
    ) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let http = config.build_client(Some(Arc::clone(&jar)))?;
        let session = Self {
            http,
            jar,
            config: config.clone(),
        };

        let csrf_token = session.fetch_csrf_token().await?;
        session.submit_login(&csrf_token, email, password).await?;

        debug!("login successful");
        Ok(session)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// End the session, releasing its connections and cookies.
    pub fn close(self) {
        debug!("closing session");
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        http::get_json(&self.http, url, self.config.timeout_secs()).await
    }

    async fn fetch_csrf_token(&self) -> Result<String> {
        let site_url = &self.config.site_url;
        debug!("requesting CSRF token from {site_url}");

        self.http
            .get(site_url.as_str())
            .send()
            .await
            .map_err(|e| FplError::from_reqwest(site_url, self.config.timeout_secs(), e))?;

        let url = Url::parse(site_url).map_err(|_| FplError::InvalidConfig {
            key: "site_url".to_string(),
            value: site_url.clone(),
        })?;

        self.jar
            .cookies(&url)
            .and_then(|header| {
                header
                    .to_str()
                    .ok()
                    .and_then(|cookies| cookie_value(cookies, CSRF_COOKIE))
            })
            .ok_or_else(|| FplError::Auth {
                message: format!("no {CSRF_COOKIE} cookie set by {site_url}"),
            })
    }

    async fn submit_login(
        &self,
        csrf_token: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<()> {
        let login_url = &self.config.login_url;
        debug!("logging in at {login_url}");

        let form = [
            ("csrfmiddlewaretoken", csrf_token),
            ("login", email),
            ("password", password.expose_secret()),
            ("app", LOGIN_APP_ID),
            ("redirect_uri", LOGIN_REDIRECT_URI),
        ];

        let body = self
            .http
            .post(login_url.as_str())
            .form(&form)
            .send()
            .await
            .map_err(|e| FplError::from_reqwest(login_url, self.config.timeout_secs(), e))?
            .text()
            .await
            .map_err(|e| FplError::from_reqwest(login_url, self.config.timeout_secs(), e))?;

        if body.contains(LOGIN_SUCCESS_MARKER) {
            Ok(())
        } else {
            Err(FplError::Auth {
                message: "login unsuccessful, check credentials".to_string(),
            })
        }
    }
}

/// Find `name` in a `Cookie` header value such as `a=1; csrftoken=xyz`.
fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_found() {
        assert_eq!(
            cookie_value("sessionid=abc; csrftoken=t0k3n; pl_profile=x", CSRF_COOKIE),
            Some("t0k3n".to_string())
        );
    }

    #[test]
    fn test_cookie_value_missing_or_empty() {
        assert_eq!(cookie_value("sessionid=abc", CSRF_COOKIE), None);
        assert_eq!(cookie_value("csrftoken=", CSRF_COOKIE), None);
        assert_eq!(cookie_value("", CSRF_COOKIE), None);
    }

    #[test]
    fn test_session_debug_hides_client_state() {
        let config = ClientConfig::default();
        let jar = Arc::new(Jar::default());
        let session = Session {
            http: config.build_client(Some(Arc::clone(&jar))).unwrap(),
            jar,
            config,
        };

        let debug_str = format!("{session:?}");
        assert!(debug_str.contains("api_base"));
        assert!(!debug_str.contains("jar"));
    }
}
