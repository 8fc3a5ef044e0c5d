//! What is running and which backend it talks to.
//!
//! Assembled once at startup from the resolved backend settings plus the
//! commit and timestamp the build pipeline stamps in through `GIT_SHA` and
//! `BUILD_TIME`. Logged at startup and served on `/api/v1/info`.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::address::{AddressSource, ApiAddress};

/// Commit and timestamp captured when the binary was compiled.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildStamp<'a> {
    pub git_sha: Option<&'a str>,
    pub build_time: Option<&'a str>,
}

impl BuildStamp<'static> {
    pub const COMPILED: Self = Self {
        git_sha: option_env!("GIT_SHA"),
        build_time: option_env!("BUILD_TIME"),
    };
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Crate version
    pub version: String,
    pub git_sha: Option<String>,
    /// RFC 3339, UTC
    pub built_at: Option<String>,
    pub backend: BackendInfo,
}

/// The single backend every loader in this process sends requests to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendInfo {
    pub address: String,
    /// `build-time` or `configured`
    pub address_source: String,
    pub timeout_ms: u64,
}

impl ServiceInfo {
    #[must_use]
    pub fn new(address: &ApiAddress, source: AddressSource, timeout: Duration) -> Self {
        Self::with_stamp(address, source, timeout, BuildStamp::COMPILED)
    }

    #[must_use]
    pub fn with_stamp(
        address: &ApiAddress,
        source: AddressSource,
        timeout: Duration,
        stamp: BuildStamp<'_>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_sha: stamp
                .git_sha
                .map(str::trim)
                .filter(|sha| !sha.is_empty())
                .map(str::to_string),
            built_at: stamp.build_time.and_then(utc_timestamp),
            backend: BackendInfo {
                address: address.to_string(),
                address_source: source.to_string(),
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            },
        }
    }
}

/// Normalize to RFC 3339 in UTC. A timestamp without an offset is taken as UTC.
fn utc_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|n| n.and_utc()))
        .ok()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}
