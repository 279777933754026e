//! Contract deployment request repository implementation.
//!
//! This module provides storage and retrieval of contract deployment requests. The
//! bundled implementation keeps requests in memory and can be seeded from a JSON file
//! containing an array of requests.

#![allow(clippy::result_large_err)]

use std::{collections::HashMap, path::Path, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
	models::{ContractAddress, ContractDeploymentRequest, ContractDeploymentRequestId, ProjectId},
	repositories::error::RepositoryError,
};

/// Interface for contract deployment request repository implementations
///
/// This trait defines the operations the resolver services need, allowing for
/// different storage backends while maintaining a consistent interface.
#[async_trait]
pub trait ContractDeploymentRequestRepositoryTrait: Send + Sync {
	/// Get a deployment request by its id
	///
	/// Returns None if the request doesn't exist.
	async fn get_by_id(
		&self,
		id: ContractDeploymentRequestId,
	) -> Result<Option<ContractDeploymentRequest>, RepositoryError>;

	/// Get a deployment request by its alias within a project
	///
	/// Returns None if the project has no request with the given alias.
	async fn get_by_alias_and_project_id(
		&self,
		alias: &str,
		project_id: ProjectId,
	) -> Result<Option<ContractDeploymentRequest>, RepositoryError>;

	/// Persist the deployed address of a request
	///
	/// Returns false if the request doesn't exist.
	async fn set_contract_address(
		&self,
		id: ContractDeploymentRequestId,
		contract_address: ContractAddress,
	) -> Result<bool, RepositoryError>;

	/// Store a new deployment request
	async fn store(
		&self,
		request: ContractDeploymentRequest,
	) -> Result<ContractDeploymentRequest, RepositoryError>;
}

/// In-memory repository for contract deployment requests
#[derive(Clone, Default)]
pub struct ContractDeploymentRequestRepository {
	requests: Arc<RwLock<HashMap<ContractDeploymentRequestId, ContractDeploymentRequest>>>,
}

impl ContractDeploymentRequestRepository {
	/// Create an empty repository
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a repository holding the given requests
	///
	/// Fails if the requests violate any repository constraint.
	pub fn new_with_requests(
		requests: Vec<ContractDeploymentRequest>,
	) -> Result<Self, RepositoryError> {
		let mut map = HashMap::new();
		for request in requests {
			Self::validate_request(&map, &request)?;
			map.insert(request.id, request);
		}

		Ok(Self {
			requests: Arc::new(RwLock::new(map)),
		})
	}

	/// Create a repository from a JSON file containing an array of requests
	pub async fn load_from_path(path: &Path) -> Result<Self, RepositoryError> {
		let metadata = HashMap::from([("path".to_string(), path.display().to_string())]);

		let content = tokio::fs::read_to_string(path).await.map_err(|e| {
			RepositoryError::load_error(
				"Failed to read contract deployment requests",
				Some(Box::new(e)),
				Some(metadata.clone()),
			)
		})?;
		let requests: Vec<ContractDeploymentRequest> =
			serde_json::from_str(&content).map_err(|e| {
				RepositoryError::load_error(
					"Failed to parse contract deployment requests",
					Some(Box::new(e)),
					Some(metadata.clone()),
				)
			})?;

		debug!(
			count = requests.len(),
			path = %path.display(),
			"Loaded contract deployment requests"
		);
		Self::new_with_requests(requests)
	}

	/// Checks the alias invariants of a request against the already stored ones
	fn validate_request(
		requests: &HashMap<ContractDeploymentRequestId, ContractDeploymentRequest>,
		request: &ContractDeploymentRequest,
	) -> Result<(), RepositoryError> {
		let metadata = HashMap::from([
			("id".to_string(), request.id.to_string()),
			("alias".to_string(), request.alias.clone()),
			("project_id".to_string(), request.project_id.to_string()),
		]);

		if request.alias.trim().is_empty() {
			return Err(RepositoryError::validation_error(
				"Contract deployment request alias must not be empty",
				None,
				Some(metadata),
			));
		}

		if requests.contains_key(&request.id) {
			return Err(RepositoryError::validation_error(
				"Contract deployment request with the same id already exists",
				None,
				Some(metadata),
			));
		}

		let alias_taken = requests
			.values()
			.any(|existing| existing.project_id == request.project_id && existing.alias == request.alias);
		if alias_taken {
			return Err(RepositoryError::validation_error(
				"Alias is already in use within the project",
				None,
				Some(metadata),
			));
		}

		Ok(())
	}
}

#[async_trait]
impl ContractDeploymentRequestRepositoryTrait for ContractDeploymentRequestRepository {
	async fn get_by_id(
		&self,
		id: ContractDeploymentRequestId,
	) -> Result<Option<ContractDeploymentRequest>, RepositoryError> {
		Ok(self.requests.read().await.get(&id).cloned())
	}

	async fn get_by_alias_and_project_id(
		&self,
		alias: &str,
		project_id: ProjectId,
	) -> Result<Option<ContractDeploymentRequest>, RepositoryError> {
		Ok(self
			.requests
			.read()
			.await
			.values()
			.find(|request| request.project_id == project_id && request.alias == alias)
			.cloned())
	}

	async fn set_contract_address(
		&self,
		id: ContractDeploymentRequestId,
		contract_address: ContractAddress,
	) -> Result<bool, RepositoryError> {
		let mut requests = self.requests.write().await;
		match requests.get_mut(&id) {
			Some(request) => {
				request.contract_address = Some(contract_address);
				Ok(true)
			}
			None => Ok(false),
		}
	}

	async fn store(
		&self,
		request: ContractDeploymentRequest,
	) -> Result<ContractDeploymentRequest, RepositoryError> {
		let mut requests = self.requests.write().await;
		Self::validate_request(&requests, &request)?;
		requests.insert(request.id, request.clone());
		Ok(request)
	}
}
