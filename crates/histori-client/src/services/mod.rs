// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Per-resource services
//!
//! Each service is a stateless transformation: a typed request becomes a path
//! and query string, goes through the shared [`crate::dispatch::Dispatcher`],
//! and the response is optionally projected down to the one field most
//! callers want. Services never handle errors — every [`crate::ApiError`]
//! propagates unchanged.

pub mod allowance;
pub mod balance;
pub mod chain;
pub mod contract;
pub mod nft;
pub mod token;
pub mod token_supply;
pub mod transaction;
pub mod uniswap;

pub use allowance::AllowanceService;
pub use balance::BalanceService;
pub use chain::ChainService;
pub use contract::ContractService;
pub use nft::NftService;
pub use token::TokenService;
pub use token_supply::TokenSupplyService;
pub use transaction::TransactionService;
pub use uniswap::UniswapService;
