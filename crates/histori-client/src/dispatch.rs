// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The request dispatcher
//!
//! Every outbound call funnels through [`Dispatcher::get`]: it resolves the
//! effective per-call policy, performs the authenticated GET, retries on 429
//! within a bounded budget, and normalizes every failure into [`ApiError`]
//! before anything propagates to a service.
//!
//! Attempts within one call are strictly sequential; the backoff sleep is the
//! only suspension point and exposes no cancellation handle — callers that
//! need one wrap the call in `tokio::time::timeout`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, error, warn};
use url::Url;

use crate::{
    config::{ClientConfig, RequestOptions},
    error::{ApiError, ConfigError},
};

const API_KEY_HEADER: &str = "x-api-key";
const USER_AGENT: &str = concat!("histori-rs/", env!("CARGO_PKG_VERSION"));

/// Retry and diagnostics policy resolved once per call from
/// `options ?? config`. The configured values are never mutated.
#[derive(Debug, Clone, Copy)]
struct EffectivePolicy {
    debug: bool,
    enable_retry: bool,
    max_retries: u32,
    retry_delay: Duration,
}

/// The single chokepoint for outbound requests.
#[derive(Debug)]
pub struct Dispatcher {
    client: Client,
    config: ClientConfig,
    base_url: Url,
}

impl Dispatcher {
    /// Validate the configuration and build the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error when the API key or base URL is invalid, or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|error| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: error.to_string(),
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// The immutable client-level configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The `/{version}/{network}` path prefix for one call, honoring
    /// per-call overrides.
    pub fn scope(&self, options: Option<&RequestOptions>) -> String {
        let version = options
            .and_then(|o| o.version.as_deref())
            .unwrap_or(&self.config.version);
        let network = options
            .and_then(|o| o.network.as_deref())
            .unwrap_or(&self.config.network);
        format!("/{version}/{network}")
    }

    fn policy(&self, options: Option<&RequestOptions>) -> EffectivePolicy {
        EffectivePolicy {
            debug: options
                .and_then(|o| o.debug)
                .unwrap_or(self.config.debug),
            enable_retry: options
                .and_then(|o| o.enable_retry)
                .unwrap_or(self.config.enable_retry),
            max_retries: options
                .and_then(|o| o.max_retries)
                .unwrap_or(self.config.max_retries),
            retry_delay: options
                .and_then(|o| o.retry_delay)
                .unwrap_or(self.config.retry_delay),
        }
    }

    fn request_url(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|error| ApiError::transport(format!("invalid request path {path:?}: {error}")))?;

        if let Some(source) = &self.config.source {
            url.query_pairs_mut().append_pair("source", source);
        }

        Ok(url)
    }

    /// Perform one authenticated GET against `base_url + path` and decode the
    /// body as `T`.
    ///
    /// A 429 is retried after the effective `retry_delay` until the retry
    /// budget runs out; total attempts never exceed `max_retries + 1`. Any
    /// other failure raises immediately.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for every failure mode: upstream
    /// error statuses, exhausted retry budgets, network-level failures, and
    /// bodies that do not decode.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<T, ApiError> {
        let policy = self.policy(options);
        let url = self.request_url(path)?;
        let mut retries = policy.max_retries;

        loop {
            let outcome = self
                .client
                .get(url.clone())
                .header(API_KEY_HEADER, &self.config.api_key)
                .send()
                .await;

            let failure = match outcome {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        let body = response
                            .text()
                            .await
                            .map_err(|error| ApiError::transport(error.to_string()))?;

                        if policy.debug {
                            debug!(path, status = status.as_u16(), body = %body, "GET succeeded");
                        }

                        return serde_json::from_str(&body).map_err(|error| {
                            let failure = ApiError::decode(status.as_u16(), error.to_string());
                            if policy.debug {
                                error!(path, %failure, "response body did not decode");
                            }
                            failure
                        });
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS
                        && policy.enable_retry
                        && retries > 0
                    {
                        warn!(
                            path,
                            attempt = policy.max_retries - retries + 1,
                            max_retries = policy.max_retries,
                            delay = ?policy.retry_delay,
                            "rate limited, waiting before retry"
                        );
                        sleep(policy.retry_delay).await;
                        retries -= 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    ApiError::from_upstream(status.as_u16(), &body)
                }
                Err(error) => ApiError::transport(error.to_string()),
            };

            if policy.debug {
                error!(path, ?options, %failure, "GET failed");
            }
            return Err(failure);
        }
    }
}
