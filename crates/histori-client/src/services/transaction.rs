// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction detail queries

use std::sync::Arc;

use histori_types::{GetTransactionRequest, TransactionResponse};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/transaction` endpoint.
#[derive(Debug, Clone)]
pub struct TransactionService {
    dispatcher: Arc<Dispatcher>,
}

impl TransactionService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch a transaction with its receipt data and log events.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_transaction(
        &self,
        request: &GetTransactionRequest,
        options: Option<&RequestOptions>,
    ) -> Result<TransactionResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("tx_hash", &request.tx_hash);

        let path = query.append_to(format!("{}/transaction", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }
}
