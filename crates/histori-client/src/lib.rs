// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Histori blockchain data API
//!
//! This crate wraps the Histori REST API (balances, allowances, tokens, NFTs,
//! chain metadata, transactions, swap prices) behind typed per-resource
//! services sharing one configuration and one request dispatcher.
//!
//! # Architecture
//!
//! - **[`ClientConfig`] / [`RequestOptions`]**: immutable client-level
//!   settings plus scoped per-call overrides
//! - **[`dispatch::Dispatcher`]**: the single chokepoint for outbound GETs —
//!   owns the 429 retry loop and normalizes every failure into [`ApiError`]
//! - **[`services`]**: one stateless service per resource, building paths and
//!   query strings from typed requests
//! - **[`HistoriClient`]**: the facade that wires all of the above together
//!
//! # Example
//!
//! ```no_run
//! use histori_client::{ClientConfig, HistoriClient};
//! use histori_types::GetBalanceRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HistoriClient::new(ClientConfig::new("histori_yourkey1"))?;
//!
//! let request = GetBalanceRequest::new(
//!     "vitalik.eth",
//!     "0xF2ec4a773ef90c58d98ea734c0eBDB538519b988",
//! )
//! .at(20_853_281u64);
//!
//! let balance = client.balance.get_balance(&request, None).await?;
//! println!("raw balance: {balance}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod config;
pub mod dispatch;
pub mod error;
mod query;
pub mod services;

pub use config::{ClientConfig, DEFAULT_BASE_URL, RequestOptions};
pub use error::{ApiError, ConfigError, DECODE_ERROR_KIND, NETWORK_ERROR_KIND};
pub use services::{
    AllowanceService, BalanceService, ChainService, ContractService, NftService, TokenService,
    TokenSupplyService, TransactionService, UniswapService,
};

use crate::dispatch::Dispatcher;

/// Environment variable [`HistoriClient::from_env`] reads the API key from.
pub const API_KEY_ENV: &str = "HISTORI_API_KEY";

/// The entry point: every resource service sharing one configuration and one
/// dispatcher.
#[derive(Debug, Clone)]
pub struct HistoriClient {
    /// Token balance queries
    pub balance: BalanceService,
    /// ERC-20 allowance queries
    pub allowance: AllowanceService,
    /// Token catalog queries
    pub token: TokenService,
    /// Contract standard conformance checks
    pub contract: ContractService,
    /// Block height, gas price, and block detail queries
    pub chain: ChainService,
    /// Transaction detail queries
    pub transaction: TransactionService,
    /// Token total-supply queries
    pub token_supply: TokenSupplyService,
    /// NFT token-URI and ownership queries
    pub nft: NftService,
    /// Uniswap V3 swap price queries
    pub uniswap: UniswapService,
    dispatcher: Arc<Dispatcher>,
}

impl HistoriClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the API key or base URL is invalid, or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let dispatcher = Arc::new(Dispatcher::new(config)?);

        Ok(Self {
            balance: BalanceService::new(Arc::clone(&dispatcher)),
            allowance: AllowanceService::new(Arc::clone(&dispatcher)),
            token: TokenService::new(Arc::clone(&dispatcher)),
            contract: ContractService::new(Arc::clone(&dispatcher)),
            chain: ChainService::new(Arc::clone(&dispatcher)),
            transaction: TransactionService::new(Arc::clone(&dispatcher)),
            token_supply: TokenSupplyService::new(Arc::clone(&dispatcher)),
            nft: NftService::new(Arc::clone(&dispatcher)),
            uniswap: UniswapService::new(Arc::clone(&dispatcher)),
            dispatcher,
        })
    }

    /// Build a client with default settings and the API key from
    /// [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns an error when the variable is unset or the key is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingEnv(API_KEY_ENV))?;
        Self::new(ClientConfig::new(api_key))
    }

    /// The immutable client-level configuration.
    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }
}
