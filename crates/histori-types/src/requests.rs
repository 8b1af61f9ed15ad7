// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed request parameters for every Histori endpoint
//!
//! One struct per operation. Addresses are plain strings because the API
//! resolves ENS names (`vitalik.eth`) as well as hex addresses, so no
//! stronger address type fits here.

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// ERC token standards the API can check or filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// ERC-20 fungible token
    Erc20,
    /// ERC-721 non-fungible token
    Erc721,
    /// ERC-777 advanced fungible token
    Erc777,
    /// ERC-1155 multi-token
    Erc1155,
}

impl TokenType {
    /// Wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Erc20 => "erc20",
            TokenType::Erc721 => "erc721",
            TokenType::Erc777 => "erc777",
            TokenType::Erc1155 => "erc1155",
        }
    }
}

/// Transaction shapes the gas-price endpoint can estimate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasEstimateKind {
    /// A plain native-currency transfer
    NativeTransfer,
    /// An ERC token transfer
    ErcTransfer,
    /// A DEX swap
    Swap,
}

impl GasEstimateKind {
    /// Wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            GasEstimateKind::NativeTransfer => "native_transfer",
            GasEstimateKind::ErcTransfer => "erc_transfer",
            GasEstimateKind::Swap => "swap",
        }
    }
}

/// Parameters for a token balance lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBalanceRequest {
    /// Holder address or ENS name
    pub holder: String,
    /// Token contract address
    pub token_address: String,
    /// Optional point-in-time anchor
    pub tag: Option<Tag>,
}

impl GetBalanceRequest {
    /// Balance of `holder` for `token_address` at the latest block.
    pub fn new(holder: impl Into<String>, token_address: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
            token_address: token_address.into(),
            tag: None,
        }
    }

    /// Anchor the lookup to a block height or date.
    #[must_use]
    pub fn at(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Parameters for an ERC-20 allowance lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAllowanceRequest {
    /// Address that granted the allowance
    pub owner: String,
    /// Address allowed to spend
    pub spender: String,
    /// Token contract address
    pub token_address: String,
    /// Optional point-in-time anchor
    pub tag: Option<Tag>,
}

impl GetAllowanceRequest {
    /// Allowance granted by `owner` to `spender` on `token_address`.
    pub fn new(
        owner: impl Into<String>,
        spender: impl Into<String>,
        token_address: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            spender: spender.into(),
            token_address: token_address.into(),
            tag: None,
        }
    }

    /// Anchor the lookup to a block height or date.
    #[must_use]
    pub fn at(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Parameters for listing tokens known to the indexer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTokensRequest {
    /// Restrict the listing to one token standard
    pub token_type: Option<TokenType>,
    /// Page number, starting at 1
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

/// Parameters for a single-token lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTokenRequest {
    /// Token contract address
    pub token_address: String,
}

impl GetTokenRequest {
    /// Look up the token deployed at `token_address`.
    pub fn new(token_address: impl Into<String>) -> Self {
        Self {
            token_address: token_address.into(),
        }
    }
}

/// Parameters for checking whether a contract implements an ERC standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetContractTypeRequest {
    /// Contract address to probe
    pub token_address: String,
    /// Standard to check against
    pub token_type: TokenType,
}

/// Parameters for a block lookup.
///
/// A `block_hash` takes precedence over `tag` when both are set; with neither,
/// the latest block is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBlockRequest {
    /// Exact block hash
    pub block_hash: Option<String>,
    /// Optional point-in-time anchor
    pub tag: Option<Tag>,
}

/// Parameters for a transaction-details lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTransactionRequest {
    /// Transaction hash
    pub tx_hash: String,
}

impl GetTransactionRequest {
    /// Look up the transaction with the given hash.
    pub fn new(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
        }
    }
}

/// Parameters for a token total-supply lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTokenSupplyRequest {
    /// Token contract address
    pub token_address: String,
    /// Optional point-in-time anchor
    pub tag: Option<Tag>,
}

impl GetTokenSupplyRequest {
    /// Total supply of `token_address` at the latest block.
    pub fn new(token_address: impl Into<String>) -> Self {
        Self {
            token_address: token_address.into(),
            tag: None,
        }
    }

    /// Anchor the lookup to a block height or date.
    #[must_use]
    pub fn at(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Parameters for an NFT token-URI lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTokenUriRequest {
    /// NFT contract address
    pub token_address: String,
    /// Token ID within the collection
    pub token_id: u64,
}

/// Parameters for an NFT ownership check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNftOwnerRequest {
    /// NFT contract address
    pub token_address: String,
    /// Candidate owner address or ENS name
    pub owner: String,
    /// Token ID within the collection
    pub token_id: u64,
    /// Optional point-in-time anchor
    pub tag: Option<Tag>,
}

impl GetNftOwnerRequest {
    /// Check whether `owner` holds `token_id` of `token_address` now.
    pub fn new(
        token_address: impl Into<String>,
        owner: impl Into<String>,
        token_id: u64,
    ) -> Self {
        Self {
            token_address: token_address.into(),
            owner: owner.into(),
            token_id,
            tag: None,
        }
    }

    /// Anchor the check to a block height or date.
    #[must_use]
    pub fn at(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
