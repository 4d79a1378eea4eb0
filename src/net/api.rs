//! REST API helpers for communicating with the backend.
//!
//! Every endpoint goes through [`api`], which resolves the path against the
//! configured base address. Client-side (hydrate) requests use `gloo-net`;
//! on the server the calls return an error since login only happens in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of panics
//! so a failed login degrades to a form message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CurrentUser, LoginRequest};
use crate::config::{self, ConfigError};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Failure to build a backend URL.
#[derive(Debug, thiserror::Error)]
pub enum ApiUrlError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot resolve '{path}' against the API base: {source}")]
    Join {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Build the absolute backend URL for `path`.
///
/// `orders` and `/orders` resolve identically.
///
/// # Errors
///
/// Returns an error if the base address is misconfigured or the joined URL
/// is malformed.
pub fn api(path: &str) -> Result<String, ApiUrlError> {
    let config = config::init()?;
    config
        .resolve(path)
        .map(String::from)
        .map_err(|source| ApiUrlError::Join { path: path.to_owned(), source })
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Pick the message shown for a rejected login.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| login_failed_message(status))
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a display-ready message if the request cannot be sent or the
/// backend rejects the credentials.
pub async fn login(request: &LoginRequest) -> Result<CurrentUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api(LOGIN_ENDPOINT).map_err(|e| e.to_string())?;
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::info!("login rejected for {} ({status})", request.username);
            return Err(login_error_message(status, &body));
        }
        resp.json::<CurrentUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
