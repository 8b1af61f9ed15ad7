// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response payloads for every Histori endpoint
//!
//! These structs mirror the JSON the API returns field for field. Amounts are
//! kept as decimal strings exactly as the server sends them — token balances
//! routinely exceed `u128` and precision must never be lost in transit.
//! Use [`crate::format::pretty_balance`] to render them for display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Balance of one holder for one token at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Network the query ran against (e.g. `eth-mainnet`)
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Token contract address
    pub token_address: String,
    /// Token name
    pub token_name: String,
    /// Token symbol
    pub token_symbol: String,
    /// Token standard (e.g. `erc20`)
    pub token_type: String,
    /// Resolved holder address
    pub holder: String,
    /// Raw balance as a decimal string
    pub balance: String,
    /// Block the balance was read at
    pub checked_at_block: u64,
    /// Timestamp of that block
    pub checked_at_timestamp: String,
}

/// ERC-20 allowance granted by an owner to a spender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceResponse {
    /// Network the query ran against
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Token contract address
    pub token_address: String,
    /// Token name
    pub token_name: String,
    /// Token symbol
    pub token_symbol: String,
    /// Token standard
    pub token_type: String,
    /// Address that granted the allowance
    pub owner: String,
    /// Address allowed to spend
    pub spender: String,
    /// Raw allowance as a decimal string
    pub allowance: String,
    /// Block the allowance was read at
    pub checked_at_block: u64,
    /// Timestamp of that block
    pub checked_at_timestamp: String,
}

/// A token known to the indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Network the token lives on
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Token contract address
    pub token_address: String,
    /// Block the token record was indexed at
    pub block_height: u64,
    /// Token standard
    pub token_type: String,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Decimal places, for fungible tokens
    pub decimals: Option<u8>,
    /// ERC-777 granularity, when applicable
    pub granularity: Option<String>,
}

/// One page of the token listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedTokensResponse {
    /// Network the listing covers
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Page number of this response
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Link to the next page, when there is one
    pub next: Option<String>,
    /// Link to the previous page, when there is one
    pub previous: Option<String>,
    /// Tokens on this page
    pub tokens: Vec<TokenResponse>,
}

/// Result of an ERC standard conformance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTypeResponse {
    /// Network the query ran against
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Contract address that was probed
    pub token_address: String,
    /// Standard that was checked (e.g. `erc721`)
    pub type_checked: String,
    /// Whether the contract implements that standard
    pub is_of_type: bool,
}

/// Current tip of the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHeightResponse {
    /// Network the query ran against
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Latest block height
    pub block_height: u64,
}

/// Gas cost breakdown for one transaction shape.
///
/// Every amount is a decimal string in the denomination its name states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct GasPriceResponse {
    pub network_name: String,
    pub chain_id: u64,
    pub currency: String,
    pub event_type: String,
    pub gas_required: String,
    pub total_cost_dollars: String,
    pub gas_cost_wei: String,
    pub gas_cost_gwei: String,
    pub gas_cost_eth: String,
    pub fee_dollars: String,
    pub fee_wei: String,
    pub fee_gwei: String,
    pub fee_eth: String,
    pub tip_dollars: String,
    pub tip_wei: String,
    pub tip_gwei: String,
    pub tip_eth: String,
}

/// Details of one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockResponse {
    /// Network the block belongs to
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Block hash
    pub block_hash: String,
    /// ISO timestamp the block was signed at
    pub signed_at: String,
    /// Unix timestamp the block was signed at
    pub signed_at_timestamp: i64,
    /// Block height
    pub block_height: u64,
    /// Hash of the parent block
    pub block_parent_hash: String,
    /// Extra data field of the block header
    pub extra_data: String,
    /// Address credited with the block
    pub miner_address: String,
    /// Gas used by the block
    pub gas_used: u64,
    /// Gas limit of the block
    pub gas_limit: u64,
    /// Total gas cost of the block, as a decimal string
    pub block_gas_cost: String,
}

/// A log event emitted during a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Position of the log within the block
    pub log_index: u32,
    /// Raw indexed topics
    pub raw_log_topics: Vec<String>,
    /// Contract that emitted the log
    pub sender_address: String,
    /// Raw unindexed data
    pub raw_log_data: String,
}

/// A single transaction with its receipt data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// ISO timestamp of the containing block
    pub block_signed_at: String,
    /// Height of the containing block
    pub block_height: u64,
    /// Hash of the containing block
    pub block_hash: String,
    /// Transaction hash
    pub tx_hash: String,
    /// Index of the transaction within the block
    pub tx_index: u32,
    /// Whether the transaction succeeded
    pub successful: bool,
    /// Sender address
    #[serde(rename = "from")]
    pub from_address: String,
    /// Recipient address; `None` for contract creation
    #[serde(rename = "to")]
    pub to_address: Option<String>,
    /// Value transferred, in Ether, as a decimal string
    pub value: String,
    /// Gas limit offered by the sender
    pub gas_offered: String,
    /// Gas actually spent
    pub gas_spent: String,
    /// Gas price in gwei
    pub gas_price: String,
    /// Fees paid, in Ether
    pub fees_paid: String,
    /// Calldata of the transaction
    pub input_data: String,
    /// Block-explorer link for the transaction
    pub explorer_url: String,
    /// Log events emitted during execution
    pub log_events: Vec<LogEvent>,
}

/// Envelope for a transaction-details lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// Network the transaction belongs to
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// The transaction itself
    pub transaction: Transaction,
}

/// Total supply of a token at a point in time.
///
/// This endpoint is the one place the API answers in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSupplyResponse {
    /// Token contract address
    pub contract_address: String,
    /// Block the supply was read at
    pub block_number: u64,
    /// Raw total supply as a decimal string
    pub total_supply: String,
}

/// Token URI and resolved metadata for one NFT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUriResponse {
    /// Network the NFT lives on
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Token ID within the collection
    pub token_id: u64,
    /// The token URI pointed to by the contract
    pub token_uri: String,
    /// Metadata fetched from the token URI, shape varies per collection
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Result of an NFT ownership check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftOwnershipResponse {
    /// Network the query ran against
    pub network_name: String,
    /// Numeric chain ID
    pub chain_id: u64,
    /// Whether the candidate address holds the token
    pub is_owner: bool,
    /// The candidate address that was checked
    pub owner: String,
    /// Token ID within the collection
    pub token_id: u64,
    /// Block the ownership was read at
    pub checked_at_block: u64,
    /// Timestamp of that block
    pub checked_at_timestamp: String,
}

/// ETH/USD price read from the canonical Uniswap V3 pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniswapPriceResponse {
    /// Numeric chain ID
    pub chain_id: u64,
    /// Network the pool lives on
    pub network: String,
    /// Block the price was read at
    pub block_height: u64,
    /// ETH price in USD, as a decimal string
    pub price: String,
}
