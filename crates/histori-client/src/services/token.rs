// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Token catalog queries

use std::sync::Arc;

use histori_types::{GetTokenRequest, GetTokensRequest, PaginatedTokensResponse, TokenResponse};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/tokens` endpoints.
#[derive(Debug, Clone)]
pub struct TokenService {
    dispatcher: Arc<Dispatcher>,
}

impl TokenService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List tokens known to the indexer, optionally filtered by standard and
    /// paginated. Unset filters are omitted from the query entirely.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_tokens(
        &self,
        request: &GetTokensRequest,
        options: Option<&RequestOptions>,
    ) -> Result<PaginatedTokensResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push_opt("token_type", request.token_type.map(|t| t.as_str()));
        query.push_opt("page", request.page);
        query.push_opt("limit", request.limit);

        let path = query.append_to(format!("{}/tokens", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }

    /// Fetch one token by its contract address.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_token(
        &self,
        request: &GetTokenRequest,
        options: Option<&RequestOptions>,
    ) -> Result<TokenResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("token_address", &request.token_address);

        let path = query.append_to(format!("{}/tokens/single", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }
}
