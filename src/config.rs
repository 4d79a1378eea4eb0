//! Backend API base-address configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call the frontend makes is resolved against one base address.
//! The address is read once at startup, validated, and then shared
//! process-wide through a `OnceLock`. An invalid address is fatal: both the
//! hydrate entry point and the SSR host refuse to start with it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

use url::Url;

/// Environment variable overriding the backend base address.
pub const API_BASE_ENV: &str = "API_BASE";
/// Local development backend used when no override is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8081";

static API_CONFIG: OnceLock<Result<ApiConfig, ConfigError>> = OnceLock::new();

/// Errors raised while resolving the API configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API_BASE '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API_BASE '{value}' cannot be used as a base address")]
    NotABase { value: String },
}

/// Validated backend address configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base: Url,
}

impl ApiConfig {
    /// Build config from the environment.
    ///
    /// The runtime `API_BASE` wins when set and non-empty. WASM builds have no
    /// runtime environment, so the value baked in at compile time is used next.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen address is not a usable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(std::env::var(API_BASE_ENV).ok().as_deref(), option_env!("API_BASE"))
    }

    /// Pick between the runtime and compile-time overrides; a blank runtime
    /// value defers to the compile-time one.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen address is not a usable URL.
    pub fn from_sources(runtime: Option<&str>, compiled: Option<&str>) -> Result<Self, ConfigError> {
        let runtime = runtime.filter(|v| !v.trim().is_empty());
        Self::from_override(runtime.or(compiled))
    }

    /// Build config from an optional override, falling back to
    /// [`DEFAULT_API_BASE`] when the override is absent or blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen address is not a usable URL.
    pub fn from_override(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_API_BASE);
        let base = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
            value: value.to_owned(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::NotABase { value: value.to_owned() });
        }
        Ok(Self { base })
    }

    /// Resolve `path` against the base address.
    ///
    /// A path without a leading `/` is treated as if it had one, so `orders`
    /// and `/orders` resolve to the same URL.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the joined URL is malformed.
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base.join(&normalize_path(path))
    }
}

/// Prefix `path` with `/` unless it already starts with one.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Install the process-wide API configuration, resolving it from the
/// environment on first call. Later calls return the installed value, or the
/// same error if resolution failed; a bad address is never re-read.
///
/// # Errors
///
/// Returns an error if the configured base address is invalid.
pub fn init() -> Result<&'static ApiConfig, ConfigError> {
    init_in(&API_CONFIG, ApiConfig::from_env)
}

fn init_in<F>(cell: &OnceLock<Result<ApiConfig, ConfigError>>, resolve: F) -> Result<&ApiConfig, ConfigError>
where
    F: FnOnce() -> Result<ApiConfig, ConfigError>,
{
    cell.get_or_init(resolve).as_ref().map_err(Clone::clone)
}
