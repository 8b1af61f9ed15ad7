// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 allowance queries

use std::sync::Arc;

use histori_types::{AllowanceResponse, GetAllowanceRequest};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/allowance` endpoints.
#[derive(Debug, Clone)]
pub struct AllowanceService {
    dispatcher: Arc<Dispatcher>,
}

impl AllowanceService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the full allowance record for an owner/spender pair.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_allowance_response(
        &self,
        request: &GetAllowanceRequest,
        options: Option<&RequestOptions>,
    ) -> Result<AllowanceResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("owner", &request.owner);
        query.push("spender", &request.spender);
        query.push("token_address", &request.token_address);
        query.push_tag(request.tag.as_ref());

        let path = query.append_to(format!(
            "{}/allowance/single",
            self.dispatcher.scope(options)
        ));
        self.dispatcher.get(&path, options).await
    }

    /// The raw allowance amount as a decimal string.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_allowance(
        &self,
        request: &GetAllowanceRequest,
        options: Option<&RequestOptions>,
    ) -> Result<String, ApiError> {
        let response = self.get_allowance_response(request, options).await?;
        Ok(response.allowance)
    }
}
