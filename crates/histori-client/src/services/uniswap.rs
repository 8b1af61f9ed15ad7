// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Uniswap V3 swap price queries

use std::sync::Arc;

use histori_types::UniswapPriceResponse;

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError};

/// Access to the `/uniswap` endpoints.
#[derive(Debug, Clone)]
pub struct UniswapService {
    dispatcher: Arc<Dispatcher>,
}

impl UniswapService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the ETH/USD price read from the canonical Uniswap V3 pool.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_eth_usd_response(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<UniswapPriceResponse, ApiError> {
        let path = format!("{}/uniswap/eth-usd-price", self.dispatcher.scope(options));
        self.dispatcher.get(&path, options).await
    }

    /// Just the price as a decimal string.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_eth_usd_price(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<String, ApiError> {
        let response = self.get_eth_usd_response(options).await?;
        Ok(response.price)
    }
}
