// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Chain metadata queries: block height, gas prices, block details

use std::sync::Arc;

use histori_types::{
    BlockHeightResponse, BlockResponse, GasEstimateKind, GasPriceResponse, GetBlockRequest,
};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/chain` endpoints.
#[derive(Debug, Clone)]
pub struct ChainService {
    dispatcher: Arc<Dispatcher>,
}

impl ChainService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the current tip of the chain.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_block_height(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<BlockHeightResponse, ApiError> {
        let path = format!("{}/chain/block-height", self.dispatcher.scope(options));
        self.dispatcher.get(&path, options).await
    }

    /// Fetch the current gas cost breakdown for one transaction shape.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_gas_info(
        &self,
        kind: GasEstimateKind,
        options: Option<&RequestOptions>,
    ) -> Result<GasPriceResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("type", kind.as_str());

        let path = query.append_to(format!("{}/chain/gas-price", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }

    /// Fetch block details by hash, height, or date.
    ///
    /// A block hash wins over a tag when both are set; with neither, the
    /// latest block is returned.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_block(
        &self,
        request: &GetBlockRequest,
        options: Option<&RequestOptions>,
    ) -> Result<BlockResponse, ApiError> {
        let mut query = QueryBuilder::new();
        if let Some(block_hash) = &request.block_hash {
            query.push("block_hash", block_hash);
        } else {
            query.push_tag(request.tag.as_ref());
        }

        let path = query.append_to(format!("{}/chain/block", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }
}
