// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Token balance queries

use std::sync::Arc;

use histori_types::{BalanceResponse, GetBalanceRequest};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/balance` endpoints.
#[derive(Debug, Clone)]
pub struct BalanceService {
    dispatcher: Arc<Dispatcher>,
}

impl BalanceService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the full balance record for one holder and token.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_balance_response(
        &self,
        request: &GetBalanceRequest,
        options: Option<&RequestOptions>,
    ) -> Result<BalanceResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("holder", &request.holder);
        query.push("token_address", &request.token_address);
        query.push_tag(request.tag.as_ref());

        let path = query.append_to(format!(
            "{}/balance/single",
            self.dispatcher.scope(options)
        ));
        self.dispatcher.get(&path, options).await
    }

    /// The raw balance amount as a decimal string.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_balance(
        &self,
        request: &GetBalanceRequest,
        options: Option<&RequestOptions>,
    ) -> Result<String, ApiError> {
        let response = self.get_balance_response(request, options).await?;
        Ok(response.balance)
    }
}
