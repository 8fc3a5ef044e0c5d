//! Backend address resolution.
//!
//! The backend is addressed as a bare `host:port`. Which value is in effect is
//! decided once at startup:
//!
//! - With the `build-time-address` feature, `API_ADDRESS` is read at compile
//!   time via `env!` (a missing variable fails the build) and overrides any
//!   configured value.
//! - Otherwise the configured value is used. It comes from `config.yaml`, the
//!   `API_ADDRESS` / `POKEATLAS_BACKEND__ADDRESS` environment variables, or the
//!   `localhost:8080` default (see [`crate::config`]).

use std::fmt;
use std::str::FromStr;

/// Address used when nothing else is configured.
pub const DEFAULT_API_ADDRESS: &str = "localhost:8080";

/// Environment variable naming the backend address.
pub const API_ADDRESS_VAR: &str = "API_ADDRESS";

#[cfg(feature = "build-time-address")]
const BUILD_TIME_ADDRESS: &str = env!("API_ADDRESS");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("backend address is empty")]
    Empty,

    #[error("backend address '{0}' must be host:port without a scheme or path")]
    NotHostPort(String),
}

/// Where the in-effect address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSource {
    BuildTime,
    Configured,
}

impl fmt::Display for AddressSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildTime => f.write_str("build-time"),
            Self::Configured => f.write_str("configured"),
        }
    }
}

/// A validated backend `host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiAddress(String);

impl ApiAddress {
    /// Validate a raw address.
    ///
    /// # Errors
    /// Returns an error if the value is blank or contains a scheme, a path or
    /// whitespace.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        if trimmed.contains("://")
            || trimmed.contains('/')
            || trimmed.chars().any(char::is_whitespace)
        {
            return Err(AddressError::NotHostPort(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Pick the in-effect address given the configured value.
    ///
    /// # Errors
    /// Returns an error if the selected value is not a valid `host:port`.
    #[cfg(not(feature = "build-time-address"))]
    pub fn resolve(configured: &str) -> Result<(Self, AddressSource), AddressError> {
        Self::parse(configured).map(|a| (a, AddressSource::Configured))
    }

    /// Pick the in-effect address; the compile-time value always wins.
    ///
    /// # Errors
    /// Returns an error if `API_ADDRESS` was not a valid `host:port` at build time.
    #[cfg(feature = "build-time-address")]
    pub fn resolve(_configured: &str) -> Result<(Self, AddressSource), AddressError> {
        Self::parse(BUILD_TIME_ADDRESS).map(|a| (a, AddressSource::BuildTime))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `http://host:port`, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.0)
    }
}

impl Default for ApiAddress {
    fn default() -> Self {
        Self(DEFAULT_API_ADDRESS.to_string())
    }
}

impl FromStr for ApiAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
