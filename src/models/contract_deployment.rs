//! Contract deployment request model.
//!
//! A deployment request is created before the contract exists on chain. Its
//! `contract_address` stays empty until the deployment transaction referenced by
//! `tx_hash` is confirmed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
	Balance, ChainId, ContractAddress, ContractDeploymentRequestId, FunctionData, ProjectId,
	TransactionHash, UtcDateTime, WalletAddress,
};

/// Persisted metadata of a requested contract deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDeploymentRequest {
	pub id: ContractDeploymentRequestId,
	/// Alias, unique within the owning project
	pub alias: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	/// Identifier of the contract template that was deployed
	pub contract_id: String,
	/// Contract bytecode
	pub contract_data: FunctionData,
	/// Constructor parameters as supplied by the client
	#[serde(default)]
	pub constructor_params: Value,
	#[serde(default)]
	pub contract_tags: Vec<String>,
	#[serde(default)]
	pub contract_implements: Vec<String>,
	#[serde(default)]
	pub initial_eth_amount: Balance,
	pub chain_id: ChainId,
	pub redirect_url: String,
	pub project_id: ProjectId,
	pub created_at: UtcDateTime,
	#[serde(default)]
	pub arbitrary_data: Option<Value>,
	/// Deployed address, empty until the deployment is confirmed
	#[serde(default)]
	pub contract_address: Option<ContractAddress>,
	#[serde(default)]
	pub deployer_address: Option<WalletAddress>,
	/// Hash of the deployment transaction, empty until it is submitted
	#[serde(default)]
	pub tx_hash: Option<TransactionHash>,
	#[serde(default)]
	pub imported: bool,
	#[serde(default)]
	pub proxy: bool,
	#[serde(default)]
	pub implementation_contract_address: Option<ContractAddress>,
}

impl ContractDeploymentRequest {
	/// Returns true once the contract address is known
	pub fn is_deployed(&self) -> bool {
		self.contract_address.is_some()
	}

	/// Returns a copy of the request with the given contract address set
	pub fn with_contract_address(self, contract_address: ContractAddress) -> Self {
		Self {
			contract_address: Some(contract_address),
			..self
		}
	}
}
