//! Project model.
//!
//! A project scopes deployment aliases and carries the chain (and optionally a
//! custom RPC endpoint) that its contracts live on.

use serde::{Deserialize, Serialize};

use crate::models::{BaseUrl, ChainId, ContractAddress, ProjectId, UserId, UtcDateTime};

/// Read-only project context used during resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
	/// Unique identifier of the project
	pub id: ProjectId,
	/// Owner of the project
	pub owner_id: UserId,
	/// Address of the issuer contract associated with the project
	pub issuer_contract_address: ContractAddress,
	/// Base URL for redirect links
	pub base_redirect_url: BaseUrl,
	/// Chain the project operates on
	pub chain_id: ChainId,
	/// RPC endpoint to use instead of the chain default
	#[serde(default)]
	pub custom_rpc_url: Option<String>,
	/// When the project was created
	pub created_at: UtcDateTime,
}
