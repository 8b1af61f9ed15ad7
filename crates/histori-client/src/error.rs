// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types
//!
//! The dispatcher is the sole normalization boundary: every failure it sees —
//! an upstream error status, a network-level failure, a body that does not
//! decode — is flattened into one [`ApiError`] shape before it leaves the
//! crate. Services never catch or reinterpret it. Construction-time problems
//! use the separate [`ConfigError`].

use serde::Deserialize;
use thiserror::Error;

/// Error kind reported when the failure carries no upstream kind of its own.
pub const NETWORK_ERROR_KIND: &str = "Network Error";

/// Error kind reported when a 2xx body does not match the expected shape.
pub const DECODE_ERROR_KIND: &str = "Decode Error";

pub(crate) const FALLBACK_ERROR_MESSAGE: &str = "request to the Histori API failed";

/// The single error shape a request can fail with.
///
/// `status` is the upstream HTTP status when a response was received, 500
/// otherwise. `error_kind` is the upstream error classification (e.g.
/// `"Not Found"`) or [`NETWORK_ERROR_KIND`] when none was given. `message`
/// is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error_kind} ({status}): {message}")]
pub struct ApiError {
    /// HTTP status of the failure
    pub status: u16,
    /// Human-readable description
    pub message: String,
    /// Upstream error classification
    pub error_kind: String,
}

impl ApiError {
    /// Whether this failure was a 429 that survived the retry budget.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// A network-level failure that produced no response.
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            error_kind: NETWORK_ERROR_KIND.to_string(),
        }
    }

    /// A 2xx response whose body did not decode as the expected type.
    pub(crate) fn decode(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error_kind: DECODE_ERROR_KIND.to_string(),
        }
    }

    /// A non-2xx response, with whatever the error body offers projected in.
    ///
    /// The API reports errors as `{"message": ..., "error": ...}`. A body
    /// that is not that shape is used verbatim as the message when non-empty.
    pub(crate) fn from_upstream(status: u16, body: &str) -> Self {
        let parsed: Option<UpstreamErrorBody> = serde_json::from_str(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone())
            .or_else(|| {
                let raw = body.trim();
                (!raw.is_empty() && parsed.is_none()).then(|| raw.to_string())
            })
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        let error_kind = parsed
            .and_then(|b| b.error)
            .unwrap_or_else(|| NETWORK_ERROR_KIND.to_string());

        Self {
            status,
            message,
            error_kind,
        }
    }
}

/// Error body shape of the Histori API.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Problems detected while building a client, before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// API key does not look like a Histori key
    #[error("invalid API key: expected the form histori_<at least 8 alphanumerics>")]
    InvalidApiKey,

    /// Base URL is empty or unparseable
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The offending URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Required environment variable missing
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Underlying HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
