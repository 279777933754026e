//! Blockchain lookups used by the services.
//!
//! [`BlockchainService`] is the interface the service layer depends on.
//! [`EvmBlockchainService`] implements it for EVM chains on top of raw JSON-RPC
//! calls, selecting the endpoint per request through a [`TransportProvider`].

use std::{collections::HashMap, str::FromStr};

use alloy::primitives::{B256, U256};
use async_trait::async_trait;
use chrono::DateTime;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::{
	models::{
		Balance, BlockchainTransactionInfo, ChainSpec, ContractAddress, EventFilter, EventLog,
		FunctionData, TransactionHash, UtcDateTime, WalletAddress,
	},
	services::blockchain::{
		transports::BlockchainTransport, BlockChainError, TransportProvider,
	},
};

/// Interface for looking up transactions on a blockchain
#[async_trait]
pub trait BlockchainService: Send + Sync {
	/// Fetches a mined transaction together with its receipt data
	///
	/// # Arguments
	/// * `chain_spec` - Chain to query and optional custom RPC endpoint
	/// * `tx_hash` - Hash of the transaction
	/// * `events` - Events to extract from the receipt logs
	///
	/// # Returns
	/// * `Ok(None)` if the transaction is unknown to the node or not mined yet
	async fn fetch_transaction_info(
		&self,
		chain_spec: &ChainSpec,
		tx_hash: &TransactionHash,
		events: &[EventFilter],
	) -> Result<Option<BlockchainTransactionInfo>, BlockChainError>;
}

/// Blockchain service for EVM compatible chains
pub struct EvmBlockchainService<P: TransportProvider> {
	transport_provider: P,
}

impl<P: TransportProvider> EvmBlockchainService<P> {
	pub fn new(transport_provider: P) -> Self {
		Self { transport_provider }
	}
}

#[async_trait]
impl<P: TransportProvider> BlockchainService for EvmBlockchainService<P> {
	#[instrument(skip(self, events), fields(chain_id = %chain_spec.chain_id))]
	async fn fetch_transaction_info(
		&self,
		chain_spec: &ChainSpec,
		tx_hash: &TransactionHash,
		events: &[EventFilter],
	) -> Result<Option<BlockchainTransactionInfo>, BlockChainError> {
		let transport = self.transport_provider.transport_for(chain_spec).await?;
		let transport = transport.as_ref();
		let context = HashMap::from([
			("hash".to_string(), tx_hash.to_string()),
			("chain_id".to_string(), chain_spec.chain_id.to_string()),
		]);

		let transaction = call(
			transport,
			"eth_getTransactionByHash",
			json!([tx_hash.value()]),
			&context,
		)
		.await?;
		if transaction.is_null() {
			debug!("Transaction not found");
			return Ok(None);
		}

		let block_number = match transaction.get("blockNumber").filter(|v| !v.is_null()) {
			Some(value) => parse_u64(value, "blockNumber", &context)?,
			None => {
				debug!("Transaction is pending");
				return Ok(None);
			}
		};

		let receipt = call(
			transport,
			"eth_getTransactionReceipt",
			json!([tx_hash.value()]),
			&context,
		)
		.await?;
		if receipt.is_null() {
			debug!("Transaction receipt not found");
			return Ok(None);
		}

		let latest_block = call(transport, "eth_blockNumber", json!([]), &context).await?;
		let latest_block = parse_u64(&latest_block, "eth_blockNumber", &context)?;

		let block = call(
			transport,
			"eth_getBlockByNumber",
			json!([format!("0x{:x}", block_number), false]),
			&context,
		)
		.await?;
		if block.is_null() {
			debug!("Transaction block not found");
			return Ok(None);
		}
		let timestamp = parse_timestamp(
			block.get("timestamp").unwrap_or(&Value::Null),
			&context,
		)?;

		let from = parse_address::<WalletAddress>(transaction.get("from"), "from", &context)?
			.ok_or_else(|| missing_field("from", &context))?;
		let to = parse_address::<WalletAddress>(transaction.get("to"), "to", &context)?
			.unwrap_or_else(WalletAddress::zero);
		let deployed_contract_address = parse_address::<ContractAddress>(
			receipt.get("contractAddress"),
			"contractAddress",
			&context,
		)?;
		let data = transaction
			.get("input")
			.and_then(Value::as_str)
			.map(|data| FunctionData::new(data))
			.unwrap_or_else(FunctionData::empty);
		let value = match transaction.get("value") {
			Some(value) if !value.is_null() => parse_u256(value, "value", &context)?,
			_ => U256::ZERO,
		};
		let success = receipt.get("status").and_then(Value::as_str) == Some("0x1");
		let events = extract_events(&receipt, events, &context)?;

		Ok(Some(BlockchainTransactionInfo {
			hash: tx_hash.clone(),
			from,
			to,
			deployed_contract_address,
			data,
			value: Balance(value),
			block_confirmations: U256::from(latest_block.saturating_sub(block_number)),
			timestamp,
			success,
			events,
		}))
	}
}

/// Sends a JSON-RPC request and returns its `result` field
async fn call(
	transport: &dyn BlockchainTransport,
	method: &str,
	params: Value,
	context: &HashMap<String, String>,
) -> Result<Value, BlockChainError> {
	let mut response = transport.send_raw_request(method, Some(params)).await?;
	match response.get_mut("result") {
		Some(result) => Ok(result.take()),
		None => {
			let mut metadata = context.clone();
			metadata.insert("method".to_string(), method.to_string());
			Err(BlockChainError::request_error(
				"Missing 'result' field",
				None,
				Some(metadata),
			))
		}
	}
}

fn missing_field(field: &str, context: &HashMap<String, String>) -> BlockChainError {
	let mut metadata = context.clone();
	metadata.insert("field".to_string(), field.to_string());
	BlockChainError::request_error(format!("Missing '{}' field", field), None, Some(metadata))
}

fn invalid_field(
	field: &str,
	value: &Value,
	source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	context: &HashMap<String, String>,
) -> BlockChainError {
	let mut metadata = context.clone();
	metadata.insert("field".to_string(), field.to_string());
	metadata.insert("value".to_string(), value.to_string());
	BlockChainError::request_error(format!("Failed to parse '{}'", field), source, Some(metadata))
}

/// Parses a hex encoded JSON-RPC quantity
fn parse_u256(
	value: &Value,
	field: &str,
	context: &HashMap<String, String>,
) -> Result<U256, BlockChainError> {
	let hex_str = value
		.as_str()
		.ok_or_else(|| invalid_field(field, value, None, context))?;
	U256::from_str_radix(hex_str.trim_start_matches("0x"), 16)
		.map_err(|e| invalid_field(field, value, Some(Box::new(e)), context))
}

fn parse_u64(
	value: &Value,
	field: &str,
	context: &HashMap<String, String>,
) -> Result<u64, BlockChainError> {
	let hex_str = value
		.as_str()
		.ok_or_else(|| invalid_field(field, value, None, context))?;
	u64::from_str_radix(hex_str.trim_start_matches("0x"), 16)
		.map_err(|e| invalid_field(field, value, Some(Box::new(e)), context))
}

fn parse_timestamp(
	value: &Value,
	context: &HashMap<String, String>,
) -> Result<UtcDateTime, BlockChainError> {
	let seconds = parse_u64(value, "timestamp", context)?;
	i64::try_from(seconds)
		.ok()
		.and_then(|seconds| DateTime::from_timestamp(seconds, 0))
		.ok_or_else(|| invalid_field("timestamp", value, None, context))
}

/// Parses an optional address field, `null` and absent fields yield `None`
fn parse_address<A>(
	value: Option<&Value>,
	field: &str,
	context: &HashMap<String, String>,
) -> Result<Option<A>, BlockChainError>
where
	A: FromStr,
	A::Err: std::error::Error + Send + Sync + 'static,
{
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(value) => {
			let raw = value
				.as_str()
				.ok_or_else(|| invalid_field(field, value, None, context))?;
			A::from_str(raw)
				.map(Some)
				.map_err(|e| invalid_field(field, value, Some(Box::new(e)), context))
		}
	}
}

/// Collects the receipt logs whose first topic matches one of the requested events
fn extract_events(
	receipt: &Value,
	filters: &[EventFilter],
	context: &HashMap<String, String>,
) -> Result<Vec<EventLog>, BlockChainError> {
	if filters.is_empty() {
		return Ok(Vec::new());
	}

	let wanted: Vec<(B256, &EventFilter)> = filters
		.iter()
		.map(|filter| (filter.topic0(), filter))
		.collect();
	let logs = match receipt.get("logs").and_then(Value::as_array) {
		Some(logs) => logs,
		None => return Ok(Vec::new()),
	};

	let mut events = Vec::new();
	for log in logs {
		let topics = log
			.get("topics")
			.and_then(Value::as_array)
			.map(|topics| {
				topics
					.iter()
					.map(|topic| {
						topic
							.as_str()
							.and_then(|raw| B256::from_str(raw).ok())
							.ok_or_else(|| invalid_field("topics", topic, None, context))
					})
					.collect::<Result<Vec<_>, _>>()
			})
			.transpose()?
			.unwrap_or_default();

		let Some(topic0) = topics.first() else {
			continue;
		};
		let Some((_, filter)) = wanted.iter().find(|(hash, _)| hash == topic0) else {
			continue;
		};

		let address = parse_address::<ContractAddress>(log.get("address"), "address", context)?
			.ok_or_else(|| missing_field("address", context))?;
		let data = log
			.get("data")
			.and_then(Value::as_str)
			.map(|data| FunctionData::new(data))
			.unwrap_or_else(FunctionData::empty);

		events.push(EventLog {
			signature: filter.signature.clone(),
			address,
			topics,
			data,
		});
	}

	Ok(events)
}
