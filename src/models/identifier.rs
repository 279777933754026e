//! Deployed contract identifiers.
//!
//! Clients may reference a deployed contract by the id of its deployment request,
//! by its alias within the current project, or directly by its on-chain address.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
	models::{ContractAddress, ContractDeploymentRequestId},
	services::ServiceError,
};

/// Reference to a deployed contract
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DeployedContractIdentifier {
	/// Deployment request id
	Id(ContractDeploymentRequestId),
	/// Alias, scoped to the project passed alongside the identifier
	Alias(String),
	/// Raw contract address
	Address(ContractAddress),
}

impl DeployedContractIdentifier {
	/// Short name of the identifier kind, used for logs and metrics labels
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Id(_) => "id",
			Self::Alias(_) => "alias",
			Self::Address(_) => "address",
		}
	}
}

impl fmt::Display for DeployedContractIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Id(id) => write!(f, "id:{}", id),
			Self::Alias(alias) => write!(f, "alias:{}", alias),
			Self::Address(address) => write!(f, "address:{}", address),
		}
	}
}

/// Identifier fields as they appear in request bodies, exactly one must be set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContractIdentifierRequestBody {
	#[serde(default)]
	pub deployed_contract_id: Option<ContractDeploymentRequestId>,
	#[serde(default)]
	pub deployed_contract_alias: Option<String>,
	#[serde(default)]
	pub contract_address: Option<String>,
}

impl TryFrom<DeployedContractIdentifierRequestBody> for DeployedContractIdentifier {
	type Error = ServiceError;

	fn try_from(body: DeployedContractIdentifierRequestBody) -> Result<Self, Self::Error> {
		match (
			body.deployed_contract_id,
			body.deployed_contract_alias,
			body.contract_address,
		) {
			(Some(id), None, None) => Ok(Self::Id(id)),
			(None, Some(alias), None) => Ok(Self::Alias(alias)),
			(None, None, Some(address)) => ContractAddress::parse(&address)
				.map(Self::Address)
				.map_err(|e| {
					ServiceError::invalid_request_body(
						format!("Invalid contract address: {}", address),
						Some(Box::new(e)),
						Some(HashMap::from([("contract_address".to_string(), address)])),
					)
				}),
			_ => Err(ServiceError::invalid_request_body(
				"Exactly one of the possible contract identifier values must be specified: \
				 [deployed_contract_id, deployed_contract_alias, contract_address]",
				None,
				None,
			)),
		}
	}
}
