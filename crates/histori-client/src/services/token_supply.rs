// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Token total-supply queries

use std::sync::Arc;

use histori_types::{GetTokenSupplyRequest, TokenSupplyResponse};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/token-supply` endpoint.
#[derive(Debug, Clone)]
pub struct TokenSupplyService {
    dispatcher: Arc<Dispatcher>,
}

impl TokenSupplyService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the total supply of a token, optionally at a block or date.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_token_supply(
        &self,
        request: &GetTokenSupplyRequest,
        options: Option<&RequestOptions>,
    ) -> Result<TokenSupplyResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("token_address", &request.token_address);
        query.push_tag(request.tag.as_ref());

        let path = query.append_to(format!("{}/token-supply", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }
}
