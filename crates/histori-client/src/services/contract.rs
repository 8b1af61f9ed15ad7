// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Contract standard conformance checks

use std::sync::Arc;

use histori_types::{ContractTypeResponse, GetContractTypeRequest};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/contract` endpoints.
#[derive(Debug, Clone)]
pub struct ContractService {
    dispatcher: Arc<Dispatcher>,
}

impl ContractService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Check whether a contract implements the given ERC standard.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn check_contract_type(
        &self,
        request: &GetContractTypeRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ContractTypeResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("token_address", &request.token_address);
        query.push("token_type", request.token_type.as_str());

        let path = query.append_to(format!(
            "{}/contract/is-of-type",
            self.dispatcher.scope(options)
        ));
        self.dispatcher.get(&path, options).await
    }

    /// Just the conformance verdict.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn is_contract_of_type(
        &self,
        request: &GetContractTypeRequest,
        options: Option<&RequestOptions>,
    ) -> Result<bool, ApiError> {
        let response = self.check_contract_type(request, options).await?;
        Ok(response.is_of_type)
    }
}
