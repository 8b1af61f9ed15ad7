// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the resource services
//!
//! These pin down the URL shape every service produces — path prefix, query
//! parameter names and ordering rules, tag encoding — and the field
//! projections layered on top of the raw responses.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use histori_client::{ClientConfig, HistoriClient, RequestOptions};
use histori_types::{
    GasEstimateKind, GetAllowanceRequest, GetBalanceRequest, GetBlockRequest,
    GetContractTypeRequest, GetNftOwnerRequest, GetTokenRequest, GetTokenSupplyRequest,
    GetTokenUriRequest, GetTokensRequest, GetTransactionRequest, Tag, TokenType,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

const TEST_API_KEY: &str = "histori_testkey0";
const DOGE: &str = "0xF2ec4a773ef90c58d98ea734c0eBDB538519b988";

fn test_client(base_url: String) -> HistoriClient {
    let config = ClientConfig {
        base_url,
        retry_delay: Duration::from_millis(5),
        ..ClientConfig::new(TEST_API_KEY)
    };
    HistoriClient::new(config).unwrap()
}

fn balance_body(balance: &str) -> serde_json::Value {
    json!({
        "network_name": "eth-mainnet",
        "chain_id": 1,
        "token_address": DOGE,
        "token_name": "Doge Coin",
        "token_symbol": "DOGE",
        "token_type": "erc20",
        "holder": "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
        "balance": balance,
        "checked_at_block": 20_853_281,
        "checked_at_timestamp": "2024-09-28T18:31:47.000Z"
    })
}

fn allowance_body(allowance: &str) -> serde_json::Value {
    json!({
        "network_name": "eth-mainnet",
        "chain_id": 1,
        "token_address": DOGE,
        "token_name": "Doge Coin",
        "token_symbol": "DOGE",
        "token_type": "erc20",
        "owner": "vitalik.eth",
        "spender": "0x1111111254EEB25477B68fb85Ed929f73A960582",
        "allowance": allowance,
        "checked_at_block": 20_853_281,
        "checked_at_timestamp": "2024-09-28T18:31:47.000Z"
    })
}

/// The worked example: a balance lookup with a numeric tag hits
/// `/v1/eth-mainnet/balance/single` with `block_height`, and the projection
/// returns the `balance` field.
#[tokio::test]
async fn balance_lookup_builds_the_documented_url() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/balance/single"))
        .and(query_param("holder", "vitalik.eth"))
        .and(query_param("token_address", DOGE))
        .and(query_param("block_height", "20853281"))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body("771696194828")))
        .mount(&mock_server)
        .await;

    let request = GetBalanceRequest::new("vitalik.eth", DOGE).at(20_853_281u64);
    let balance = client.balance.get_balance(&request, None).await.unwrap();
    assert_eq!(balance, "771696194828");
}

/// A date tag serializes as `date=<ISO>` and never `block_height`.
#[tokio::test]
async fn date_tag_serializes_as_iso_date() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/balance/single"))
        .and(query_param("date", "2024-05-01T00:00:00.000Z"))
        .and(query_param_is_missing("block_height"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body("1")))
        .mount(&mock_server)
        .await;

    let instant = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let request = GetBalanceRequest::new("vitalik.eth", DOGE).at(instant);
    let response = client
        .balance
        .get_balance_response(&request, None)
        .await
        .unwrap();
    assert_eq!(response.balance, "1");
}

/// An absent tag emits neither `block_height` nor `date`.
#[tokio::test]
async fn absent_tag_emits_no_anchor_parameters() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/balance/single"))
        .and(query_param_is_missing("block_height"))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body("2")))
        .mount(&mock_server)
        .await;

    let request = GetBalanceRequest::new("vitalik.eth", DOGE);
    let response = client
        .balance
        .get_balance_response(&request, None)
        .await
        .unwrap();
    assert_eq!(response.balance, "2");
}

/// Per-call version/network overrides change the path prefix for that call
/// only.
#[tokio::test]
async fn per_call_overrides_rewrite_the_path_prefix() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v2/base-mainnet/balance/single"))
        .respond_with(ResponseTemplate::new(200).set_body_json(balance_body("3")))
        .mount(&mock_server)
        .await;

    let options = RequestOptions {
        version: Some("v2".to_string()),
        network: Some("base-mainnet".to_string()),
        ..RequestOptions::default()
    };
    let request = GetBalanceRequest::new("vitalik.eth", DOGE);
    let response = client
        .balance
        .get_balance_response(&request, Some(&options))
        .await
        .unwrap();
    assert_eq!(response.balance, "3");

    // the client-level defaults still apply afterwards
    assert_eq!(client.config().version, "v1");
    assert_eq!(client.config().network, "eth-mainnet");
}

/// `get_allowance` is a lossless projection of the full response.
#[tokio::test]
async fn allowance_projection_matches_full_response() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/allowance/single"))
        .and(query_param("owner", "vitalik.eth"))
        .and(query_param(
            "spender",
            "0x1111111254EEB25477B68fb85Ed929f73A960582",
        ))
        .and(query_param("token_address", DOGE))
        .respond_with(ResponseTemplate::new(200).set_body_json(allowance_body("500000")))
        .mount(&mock_server)
        .await;

    let request = GetAllowanceRequest::new(
        "vitalik.eth",
        "0x1111111254EEB25477B68fb85Ed929f73A960582",
        DOGE,
    );

    let full = client
        .allowance
        .get_allowance_response(&request, None)
        .await
        .unwrap();
    let projected = client.allowance.get_allowance(&request, None).await.unwrap();

    assert_eq!(projected, full.allowance);
    assert_eq!(projected, "500000");
}

/// The token listing drops unset filters instead of sending empty values.
#[tokio::test]
async fn token_listing_omits_unset_filters() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/tokens"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("token_type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "page": 2,
            "limit": 50,
            "next": "/v1/eth-mainnet/tokens?page=3&limit=50",
            "previous": "/v1/eth-mainnet/tokens?page=1&limit=50",
            "tokens": [{
                "network_name": "eth-mainnet",
                "chain_id": 1,
                "token_address": DOGE,
                "block_height": 20_000_000,
                "token_type": "erc20",
                "name": "Doge Coin",
                "symbol": "DOGE",
                "decimals": 8,
                "granularity": null
            }]
        })))
        .mount(&mock_server)
        .await;

    let request = GetTokensRequest {
        page: Some(2),
        limit: Some(50),
        ..GetTokensRequest::default()
    };
    let listing = client.token.get_tokens(&request, None).await.unwrap();

    assert_eq!(listing.page, 2);
    assert_eq!(listing.tokens.len(), 1);
    assert_eq!(listing.tokens[0].decimals, Some(8));
}

/// A token-type filter is forwarded when set.
#[tokio::test]
async fn token_listing_forwards_the_type_filter() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/tokens"))
        .and(query_param("token_type", "erc721"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "page": 1,
            "limit": 10,
            "next": null,
            "previous": null,
            "tokens": []
        })))
        .mount(&mock_server)
        .await;

    let request = GetTokensRequest {
        token_type: Some(TokenType::Erc721),
        ..GetTokensRequest::default()
    };
    let listing = client.token.get_tokens(&request, None).await.unwrap();
    assert!(listing.tokens.is_empty());
}

/// Single-token lookup goes through `/tokens/single`.
#[tokio::test]
async fn single_token_lookup() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/tokens/single"))
        .and(query_param("token_address", DOGE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "token_address": DOGE,
            "block_height": 20_000_000,
            "token_type": "erc20",
            "name": "Doge Coin",
            "symbol": "DOGE",
            "decimals": 8,
            "granularity": null
        })))
        .mount(&mock_server)
        .await;

    let token = client
        .token
        .get_token(&GetTokenRequest::new(DOGE), None)
        .await
        .unwrap();
    assert_eq!(token.symbol, "DOGE");
}

/// Contract conformance check and its boolean projection.
#[tokio::test]
async fn contract_type_check_and_projection() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/contract/is-of-type"))
        .and(query_param("token_address", DOGE))
        .and(query_param("token_type", "erc721"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "token_address": DOGE,
            "type_checked": "erc721",
            "is_of_type": false
        })))
        .mount(&mock_server)
        .await;

    let request = GetContractTypeRequest {
        token_address: DOGE.to_string(),
        token_type: TokenType::Erc721,
    };

    let response = client
        .contract
        .check_contract_type(&request, None)
        .await
        .unwrap();
    assert!(!response.is_of_type);

    let verdict = client
        .contract
        .is_contract_of_type(&request, None)
        .await
        .unwrap();
    assert!(!verdict);
}

/// Block-height lookup has no query string at all.
#[tokio::test]
async fn block_height_lookup() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/chain/block-height"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "block_height": 21_012_345
        })))
        .mount(&mock_server)
        .await;

    let response = client.chain.get_block_height(None).await.unwrap();
    assert_eq!(response.block_height, 21_012_345);
}

/// Gas estimates send the transaction shape as `type`.
#[tokio::test]
async fn gas_price_lookup_sends_the_estimate_kind() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/chain/gas-price"))
        .and(query_param("type", "native_transfer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "currency": "USD",
            "event_type": "native_transfer",
            "gas_required": "21000",
            "total_cost_dollars": "1.23",
            "gas_cost_wei": "252000000000000",
            "gas_cost_gwei": "252000",
            "gas_cost_eth": "0.000252",
            "fee_dollars": "1.10",
            "fee_wei": "231000000000000",
            "fee_gwei": "231000",
            "fee_eth": "0.000231",
            "tip_dollars": "0.13",
            "tip_wei": "21000000000000",
            "tip_gwei": "21000",
            "tip_eth": "0.000021"
        })))
        .mount(&mock_server)
        .await;

    let response = client
        .chain
        .get_gas_info(GasEstimateKind::NativeTransfer, None)
        .await
        .unwrap();
    assert_eq!(response.gas_required, "21000");
}

/// A block hash wins over a tag when both are present.
#[tokio::test]
async fn block_lookup_prefers_hash_over_tag() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/chain/block"))
        .and(query_param("block_hash", "0xabc123"))
        .and(query_param_is_missing("block_height"))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "block_hash": "0xabc123",
            "signed_at": "2024-09-28T18:31:47.000Z",
            "signed_at_timestamp": 1_727_548_307,
            "block_height": 20_853_281,
            "block_parent_hash": "0xdef456",
            "extra_data": "0x",
            "miner_address": "0x2222222222222222222222222222222222222222",
            "gas_used": 12_000_000,
            "gas_limit": 30_000_000,
            "block_gas_cost": "0"
        })))
        .mount(&mock_server)
        .await;

    let request = GetBlockRequest {
        block_hash: Some("0xabc123".to_string()),
        tag: Some(Tag::BlockHeight(1)),
    };
    let block = client.chain.get_block(&request, None).await.unwrap();
    assert_eq!(block.block_height, 20_853_281);
}

/// Transaction details are fetched by hash and carry their log events.
#[tokio::test]
async fn transaction_lookup() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    let tx_hash = "0x8a2b3c4d5e6f";
    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/transaction"))
        .and(query_param("tx_hash", tx_hash))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "transaction": {
                "block_signed_at": "2024-01-01T00:00:00.000Z",
                "block_height": 19_000_000,
                "block_hash": "0xaaa",
                "tx_hash": tx_hash,
                "tx_index": 12,
                "successful": true,
                "from": "0x1111111111111111111111111111111111111111",
                "to": "0x2222222222222222222222222222222222222222",
                "value": "1.5",
                "gas_offered": "21000",
                "gas_spent": "21000",
                "gas_price": "12",
                "fees_paid": "0.000252",
                "input_data": "0x",
                "explorer_url": "https://etherscan.io/tx/0x8a2b3c4d5e6f",
                "log_events": [{
                    "log_index": 0,
                    "raw_log_topics": ["0xddf252ad"],
                    "sender_address": "0x3333333333333333333333333333333333333333",
                    "raw_log_data": "0x"
                }]
            }
        })))
        .mount(&mock_server)
        .await;

    let response = client
        .transaction
        .get_transaction(&GetTransactionRequest::new(tx_hash), None)
        .await
        .unwrap();

    assert!(response.transaction.successful);
    assert_eq!(response.transaction.log_events.len(), 1);
}

/// Token supply decodes the endpoint's camelCase body and forwards the tag.
#[tokio::test]
async fn token_supply_lookup_with_tag() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/token-supply"))
        .and(query_param("token_address", DOGE))
        .and(query_param("block_height", "20000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contractAddress": DOGE,
            "blockNumber": 20_000_000,
            "totalSupply": "48999156520373530"
        })))
        .mount(&mock_server)
        .await;

    let request = GetTokenSupplyRequest::new(DOGE).at(20_000_000u64);
    let response = client
        .token_supply
        .get_token_supply(&request, None)
        .await
        .unwrap();
    assert_eq!(response.total_supply, "48999156520373530");
}

/// NFT token-URI lookup plus its metadata and URI projections.
#[tokio::test]
async fn nft_token_uri_and_projections() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/nft/token-uri"))
        .and(query_param("token_address", DOGE))
        .and(query_param("token_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "token_id": 42,
            "token_uri": "ipfs://QmYx/42.json",
            "metadata": {"name": "Piece #42", "image": "ipfs://QmYx/42.png"}
        })))
        .mount(&mock_server)
        .await;

    let request = GetTokenUriRequest {
        token_address: DOGE.to_string(),
        token_id: 42,
    };

    let info = client.nft.get_token_info(&request, None).await.unwrap();
    assert_eq!(info.token_uri, "ipfs://QmYx/42.json");

    let uri = client.nft.get_token_uri(&request, None).await.unwrap();
    assert_eq!(uri, info.token_uri);

    let metadata = client.nft.get_token_metadata(&request, None).await.unwrap();
    assert_eq!(metadata["name"], json!("Piece #42"));
}

/// NFT ownership check with a tag, and its boolean projection.
#[tokio::test]
async fn nft_ownership_check_and_projection() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/nft/is-owner"))
        .and(query_param("token_address", DOGE))
        .and(query_param("owner", "vitalik.eth"))
        .and(query_param("token_id", "7"))
        .and(query_param("block_height", "20853281"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "network_name": "eth-mainnet",
            "chain_id": 1,
            "is_owner": true,
            "owner": "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
            "token_id": 7,
            "checked_at_block": 20_853_281,
            "checked_at_timestamp": "2024-09-28T18:31:47.000Z"
        })))
        .mount(&mock_server)
        .await;

    let request = GetNftOwnerRequest::new(DOGE, "vitalik.eth", 7).at(20_853_281u64);

    let response = client
        .nft
        .check_owner_of_token(&request, None)
        .await
        .unwrap();
    assert!(response.is_owner);

    let verdict = client.nft.is_owner_of_token(&request, None).await.unwrap();
    assert!(verdict);
}

/// Uniswap price lookup and its string projection.
#[tokio::test]
async fn uniswap_price_and_projection() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/uniswap/eth-usd-price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chain_id": 1,
            "network": "eth-mainnet",
            "block_height": 21_012_345,
            "price": "2653.17"
        })))
        .mount(&mock_server)
        .await;

    let response = client.uniswap.get_eth_usd_response(None).await.unwrap();
    assert_eq!(response.price, "2653.17");

    let price = client.uniswap.get_eth_usd_price(None).await.unwrap();
    assert_eq!(price, response.price);
}

/// Services pass dispatcher failures through untouched.
#[tokio::test]
async fn services_propagate_normalized_errors_verbatim() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/eth-mainnet/tokens/single"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"message": "token not found", "error": "Not Found"})),
        )
        .mount(&mock_server)
        .await;

    let error = client
        .token
        .get_token(&GetTokenRequest::new(DOGE), None)
        .await
        .unwrap_err();

    assert_eq!(error.status, 404);
    assert_eq!(error.message, "token not found");
    assert_eq!(error.error_kind, "Not Found");
}
