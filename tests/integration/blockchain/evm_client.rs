use std::{collections::HashMap, sync::Arc};

use alloy::primitives::U256;
use serde_json::{json, Value};

use deployed_contract_resolver::{
	models::{
		ChainId, ChainSpec, ContractAddress, EventFilter, FunctionData, TransactionHash,
		WalletAddress,
	},
	services::blockchain::{
		BlockChainError, BlockchainService, BlockchainTransport, EvmBlockchainService,
	},
};

use crate::integration::mocks::{MockChainTransports, MockJsonRpcTransport};

const TX_HASH: &str = "0x5d2b0b1e3b4f9c7a8e6d5c4b3a29180706050403020100ffeeddccbbaa998877";
const SENDER: &str = "0x00000000000000000000000000000000000000a1";
const DEPLOYED: &str = "0x000000000000000000000000000000000000beef";

fn transaction(to: Value, block_number: Value) -> Value {
	json!({
		"hash": TX_HASH,
		"from": SENDER,
		"to": to,
		"input": "0x6080",
		"value": "0xde0b6b3a7640000",
		"blockNumber": block_number
	})
}

fn receipt(status: &str, contract_address: Value, logs: Value) -> Value {
	json!({
		"transactionHash": TX_HASH,
		"status": status,
		"contractAddress": contract_address,
		"logs": logs
	})
}

/// Transport answering each JSON-RPC method with a fixed result
fn transport_with(results: HashMap<&'static str, Value>) -> MockJsonRpcTransport {
	let mut transport = MockJsonRpcTransport::new();
	transport
		.expect_send_raw_request()
		.returning(move |method: &str, _params: Option<Value>| {
			results
				.get(method)
				.map(|result| json!({"jsonrpc": "2.0", "id": 1, "result": result}))
				.ok_or_else(|| {
					BlockChainError::request_error(format!("Unexpected method {}", method), None, None)
				})
		});
	transport
}

fn deployment_results() -> HashMap<&'static str, Value> {
	HashMap::from([
		("eth_getTransactionByHash", transaction(Value::Null, json!("0x10"))),
		(
			"eth_getTransactionReceipt",
			receipt("0x1", json!(DEPLOYED), json!([])),
		),
		("eth_blockNumber", json!("0x15")),
		("eth_getBlockByNumber", json!({"number": "0x10", "timestamp": "0x61cf9980"})),
	])
}

fn service_with(
	transport: MockJsonRpcTransport,
) -> EvmBlockchainService<MockChainTransports> {
	let transport: Arc<dyn BlockchainTransport> = Arc::new(transport);
	let mut provider = MockChainTransports::new();
	provider
		.expect_transport_for()
		.returning(move |_| Ok(transport.clone()));
	EvmBlockchainService::new(provider)
}

#[tokio::test]
async fn test_fetch_contract_deployment() {
	let service = service_with(transport_with(deployment_results()));

	let info = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(info.hash, TransactionHash::new(TX_HASH));
	assert_eq!(info.from, WalletAddress::parse(SENDER).unwrap());
	assert_eq!(info.to, WalletAddress::zero());
	assert_eq!(
		info.deployed_contract_address,
		Some(ContractAddress::parse(DEPLOYED).unwrap())
	);
	assert_eq!(info.data, FunctionData::new("0x6080"));
	assert_eq!(info.value.0, U256::from(1_000_000_000_000_000_000u64));
	assert_eq!(info.block_confirmations, U256::from(5));
	assert_eq!(info.timestamp.to_rfc3339(), "2022-01-01T00:00:00+00:00");
	assert!(info.success);
	assert!(info.events.is_empty());
}

#[tokio::test]
async fn test_fetch_regular_transaction() {
	let mut results = deployment_results();
	results.insert(
		"eth_getTransactionByHash",
		transaction(json!(DEPLOYED), json!("0x10")),
	);
	results.insert(
		"eth_getTransactionReceipt",
		receipt("0x0", Value::Null, json!([])),
	);
	let service = service_with(transport_with(results));

	let info = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(info.to, WalletAddress::parse(DEPLOYED).unwrap());
	assert_eq!(info.deployed_contract_address, None);
	assert!(!info.success);
}

#[tokio::test]
async fn test_unknown_transaction_returns_none() {
	let mut transport = MockJsonRpcTransport::new();
	transport
		.expect_send_raw_request()
		.withf(|method, _| method == "eth_getTransactionByHash")
		.times(1)
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1, "result": null})));
	let service = service_with(transport);

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn test_pending_transaction_returns_none() {
	let mut transport = MockJsonRpcTransport::new();
	transport
		.expect_send_raw_request()
		.withf(|method, _| method == "eth_getTransactionByHash")
		.times(1)
		.returning(|_, _| {
			Ok(json!({"jsonrpc": "2.0", "id": 1, "result": transaction(Value::Null, Value::Null)}))
		});
	let service = service_with(transport);

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn test_missing_receipt_returns_none() {
	let mut results = deployment_results();
	results.insert("eth_getTransactionReceipt", Value::Null);
	let service = service_with(transport_with(results));

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn test_missing_block_returns_none() {
	let mut results = deployment_results();
	results.insert("eth_getBlockByNumber", Value::Null);
	let service = service_with(transport_with(results));

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn test_requested_events_are_extracted() {
	let transfer = EventFilter::new("Transfer(address,address,uint256)");
	let ownership = EventFilter::new("OwnershipTransferred(address,address)");
	let unrelated = EventFilter::new("Approval(address,address,uint256)");
	let logs = json!([
		{
			"address": DEPLOYED,
			"topics": [transfer.topic0().to_string()],
			"data": "0x01"
		},
		{
			"address": DEPLOYED,
			"topics": [unrelated.topic0().to_string()],
			"data": "0x02"
		},
		{
			"address": DEPLOYED,
			"topics": [ownership.topic0().to_string()],
			"data": "0x"
		}
	]);
	let mut results = deployment_results();
	results.insert(
		"eth_getTransactionReceipt",
		receipt("0x1", json!(DEPLOYED), logs),
	);
	let service = service_with(transport_with(results));

	let info = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[transfer.clone(), ownership.clone()],
		)
		.await
		.unwrap()
		.unwrap();

	let signatures: Vec<&str> = info.events.iter().map(|e| e.signature.as_str()).collect();
	assert_eq!(
		signatures,
		vec![transfer.signature.as_str(), ownership.signature.as_str()]
	);
	assert_eq!(info.events[0].data, FunctionData::new("0x01"));
	assert_eq!(
		info.events[0].address,
		ContractAddress::parse(DEPLOYED).unwrap()
	);
}

#[tokio::test]
async fn test_transport_errors_propagate() {
	let mut transport = MockJsonRpcTransport::new();
	transport.expect_send_raw_request().returning(|_, _| {
		Err(BlockChainError::connection_error("connection refused", None, None))
	});
	let service = service_with(transport);

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await;

	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
}

#[tokio::test]
async fn test_response_without_result_is_rejected() {
	let mut transport = MockJsonRpcTransport::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1})));
	let service = service_with(transport);

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(1337), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await;

	match result {
		Err(BlockChainError::RequestError(ctx)) => {
			assert_eq!(ctx.message, "Missing 'result' field")
		}
		other => panic!("unexpected result: {:?}", other),
	}
}

#[tokio::test]
async fn test_chain_spec_is_forwarded_to_provider() {
	let transport: Arc<dyn BlockchainTransport> =
		Arc::new(transport_with(deployment_results()));
	let mut provider = MockChainTransports::new();
	provider
		.expect_transport_for()
		.withf(|chain_spec| {
			chain_spec.chain_id == ChainId(80001)
				&& chain_spec.custom_rpc_url.as_deref() == Some("http://custom:8545")
		})
		.times(1)
		.returning(move |_| Ok(transport.clone()));
	let service = EvmBlockchainService::new(provider);

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(80001), Some("http://custom:8545".to_string())),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await;

	assert!(result.unwrap().is_some());
}

#[tokio::test]
async fn test_unsupported_chain_propagates() {
	let mut provider = MockChainTransports::new();
	provider
		.expect_transport_for()
		.returning(|chain_spec| Err(BlockChainError::unsupported_chain_id(chain_spec.chain_id)));
	let service = EvmBlockchainService::new(provider);

	let result = service
		.fetch_transaction_info(
			&ChainSpec::new(ChainId(999_999), None),
			&TransactionHash::new(TX_HASH),
			&[],
		)
		.await;

	assert!(matches!(result, Err(BlockChainError::UnsupportedChainId(_))));
}
