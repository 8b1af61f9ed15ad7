// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration and per-call overrides
//!
//! [`ClientConfig`] is assembled once and becomes immutable when the client is
//! constructed; every request reads from it. [`RequestOptions`] narrows or
//! overrides a subset of those settings for a single call without touching
//! the client-level values.

use std::{sync::LazyLock, time::Duration};

use regex::Regex;

use crate::error::ConfigError;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.histori.xyz";

const DEFAULT_VERSION: &str = "v1";
const DEFAULT_NETWORK: &str = "eth-mainnet";
const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_RETRY_DELAY_MS: u64 = 2000;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Keys issued by Histori are `histori_` followed by at least eight
/// alphanumeric characters.
static API_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^histori_[a-zA-Z0-9]{8,}$").expect("pattern is valid"));

/// Client-level configuration, immutable once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key sent as the `x-api-key` header on every request
    pub api_key: String,
    /// Base URL of the API
    pub base_url: String,
    /// API version segment of the path prefix
    pub version: String,
    /// Network segment of the path prefix (e.g. `eth-mainnet`)
    pub network: String,
    /// Emit verbose request/response diagnostics
    pub debug: bool,
    /// Retry automatically when the server answers 429
    pub enable_retry: bool,
    /// Retry budget per call; total attempts are `max_retries + 1`
    pub max_retries: u32,
    /// Wait between a 429 and the next attempt
    pub retry_delay: Duration,
    /// Per-request timeout of the underlying HTTP client
    pub timeout: Duration,
    /// Attribution label appended as `source=<label>` to every request
    pub source: Option<String>,
}

impl ClientConfig {
    /// Configuration with the given API key and default everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            debug: false,
            enable_retry: true,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            source: None,
        }
    }

    /// Check the key shape and base URL before any request is made.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !API_KEY_PATTERN.is_match(&self.api_key) {
            return Err(ConfigError::InvalidApiKey);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "base URL cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("histori_testkey0")
    }
}

/// Overrides for a single call.
///
/// Every field is optional; an unset field falls back to the client-level
/// value. This is a closed set — settings the dispatcher does not recognize
/// are not representable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Override the API version segment
    pub version: Option<String>,
    /// Override the network segment
    pub network: Option<String>,
    /// Override the verbose-diagnostics flag
    pub debug: Option<bool>,
    /// Override whether 429 responses are retried
    pub enable_retry: Option<bool>,
    /// Override the retry budget
    pub max_retries: Option<u32>,
    /// Override the wait between attempts
    pub retry_delay: Option<Duration>,
}

impl RequestOptions {
    /// Options targeting a different network for this call only.
    pub fn on_network(network: impl Into<String>) -> Self {
        Self {
            network: Some(network.into()),
            ..Self::default()
        }
    }
}
