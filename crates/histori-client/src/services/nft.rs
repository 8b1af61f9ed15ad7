// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT token-URI and ownership queries

use std::{collections::HashMap, sync::Arc};

use histori_types::{GetNftOwnerRequest, GetTokenUriRequest, NftOwnershipResponse, TokenUriResponse};

use crate::{config::RequestOptions, dispatch::Dispatcher, error::ApiError, query::QueryBuilder};

/// Access to the `/nft` endpoints.
#[derive(Debug, Clone)]
pub struct NftService {
    dispatcher: Arc<Dispatcher>,
}

impl NftService {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the token URI and resolved metadata for an ERC-721 or ERC-1155
    /// token.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_token_info(
        &self,
        request: &GetTokenUriRequest,
        options: Option<&RequestOptions>,
    ) -> Result<TokenUriResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("token_address", &request.token_address);
        query.push("token_id", request.token_id);

        let path = query.append_to(format!("{}/nft/token-uri", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }

    /// Just the metadata object resolved from the token URI.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_token_metadata(
        &self,
        request: &GetTokenUriRequest,
        options: Option<&RequestOptions>,
    ) -> Result<HashMap<String, serde_json::Value>, ApiError> {
        let response = self.get_token_info(request, options).await?;
        Ok(response.metadata)
    }

    /// Just the token URI string.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn get_token_uri(
        &self,
        request: &GetTokenUriRequest,
        options: Option<&RequestOptions>,
    ) -> Result<String, ApiError> {
        let response = self.get_token_info(request, options).await?;
        Ok(response.token_uri)
    }

    /// Check whether an address holds a specific NFT, optionally at a block
    /// or date.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn check_owner_of_token(
        &self,
        request: &GetNftOwnerRequest,
        options: Option<&RequestOptions>,
    ) -> Result<NftOwnershipResponse, ApiError> {
        let mut query = QueryBuilder::new();
        query.push("token_address", &request.token_address);
        query.push("owner", &request.owner);
        query.push("token_id", request.token_id);
        query.push_tag(request.tag.as_ref());

        let path = query.append_to(format!("{}/nft/is-owner", self.dispatcher.scope(options)));
        self.dispatcher.get(&path, options).await
    }

    /// Just the ownership verdict.
    ///
    /// # Errors
    ///
    /// Propagates the dispatcher's [`ApiError`] unchanged.
    pub async fn is_owner_of_token(
        &self,
        request: &GetNftOwnerRequest,
        options: Option<&RequestOptions>,
    ) -> Result<bool, ApiError> {
        let response = self.check_owner_of_token(request, options).await?;
        Ok(response.is_owner)
    }
}
