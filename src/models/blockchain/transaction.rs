//! Transaction info returned by blockchain lookups.

use alloy::primitives::{keccak256, B256, U256};
use serde::{Deserialize, Serialize};

use crate::models::{
	Balance, ContractAddress, FunctionData, TransactionHash, UtcDateTime, WalletAddress,
};

/// Event the caller is interested in, identified by its Solidity signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventFilter {
	/// Signature such as `Transfer(address,address,uint256)`
	pub signature: String,
}

impl EventFilter {
	pub fn new(signature: impl Into<String>) -> Self {
		Self {
			signature: signature.into(),
		}
	}

	/// keccak-256 of the whitespace-free signature
	pub fn topic0(&self) -> B256 {
		let normalized: String = self
			.signature
			.chars()
			.filter(|c| !c.is_whitespace())
			.collect();
		keccak256(normalized.as_bytes())
	}
}

/// Log emitted by a transaction which matched one of the requested event filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
	/// Signature of the matched filter
	pub signature: String,
	/// Contract which emitted the log
	pub address: ContractAddress,
	pub topics: Vec<B256>,
	pub data: FunctionData,
}

/// On-chain state of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainTransactionInfo {
	pub hash: TransactionHash,
	pub from: WalletAddress,
	/// Zero address for contract creation transactions
	pub to: WalletAddress,
	/// Set only for contract creation transactions
	pub deployed_contract_address: Option<ContractAddress>,
	pub data: FunctionData,
	pub value: Balance,
	pub block_confirmations: U256,
	pub timestamp: UtcDateTime,
	pub success: bool,
	#[serde(default)]
	pub events: Vec<EventLog>,
}
