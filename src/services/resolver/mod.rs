//! Deployed contract identifier resolution.
//!
//! Maps a [`DeployedContractIdentifier`] onto the id of the deployment request and
//! the address of the deployed contract. Requests that are not marked as deployed
//! yet are checked against the chain, and a confirmed address is written back to
//! the repository.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::{
	models::{
		ContractAddress, ContractDeploymentRequest, ContractDeploymentRequestId,
		DeployedContractIdentifier, Project,
	},
	repositories::ContractDeploymentRequestRepositoryTrait,
	services::{common::EthCommonServiceTrait, ServiceError},
	utils::metrics::record_resolution,
};

/// Interface for resolving deployed contract identifiers
#[async_trait]
pub trait DeployedContractIdentifierResolverServiceTrait: Send + Sync {
	/// Resolves an identifier into the deployment request id and contract address
	///
	/// # Arguments
	/// * `identifier` - Id, alias or address of the contract
	/// * `project` - Project scoping alias lookups and providing the custom RPC URL
	///
	/// # Returns
	/// * `(None, address)` for address identifiers
	/// * `(Some(id), address)` for id and alias identifiers
	///
	/// # Errors
	/// * `ServiceError::ResourceNotFound` if no deployment request matches
	/// * `ServiceError::ContractNotYetDeployed` if the contract is not on chain yet
	async fn resolve_contract_id_and_address(
		&self,
		identifier: &DeployedContractIdentifier,
		project: &Project,
	) -> Result<(Option<ContractDeploymentRequestId>, ContractAddress), ServiceError>;
}

/// Resolver backed by a deployment request repository and the common service
pub struct DeployedContractIdentifierResolverService<R, C>
where
	R: ContractDeploymentRequestRepositoryTrait,
	C: EthCommonServiceTrait,
{
	repository: R,
	eth_common_service: C,
}

impl<R, C> DeployedContractIdentifierResolverService<R, C>
where
	R: ContractDeploymentRequestRepositoryTrait,
	C: EthCommonServiceTrait,
{
	pub fn new(repository: R, eth_common_service: C) -> Self {
		Self {
			repository,
			eth_common_service,
		}
	}

	async fn resolve(
		&self,
		identifier: &DeployedContractIdentifier,
		project: &Project,
	) -> Result<(Option<ContractDeploymentRequestId>, ContractAddress, &'static str), ServiceError>
	{
		let request = match identifier {
			DeployedContractIdentifier::Id(id) => {
				info!(%id, project_id = %project.id, "Resolving deployed contract by ID");
				self.repository.get_by_id(*id).await?.ok_or_else(|| {
					ServiceError::resource_not_found(
						format!("Deployed contract not found for ID: {}", id),
						None,
						None,
					)
				})?
			}
			DeployedContractIdentifier::Alias(alias) => {
				info!(%alias, project_id = %project.id, "Resolving deployed contract by alias");
				self.repository
					.get_by_alias_and_project_id(alias, project.id)
					.await?
					.ok_or_else(|| {
						ServiceError::resource_not_found(
							format!("Deployed contract not found for alias: {}", alias),
							None,
							None,
						)
					})?
			}
			DeployedContractIdentifier::Address(address) => {
				info!(%address, project_id = %project.id, "Resolving deployed contract by address");
				return Ok((None, *address, "direct"));
			}
		};

		if let Some(address) = request.contract_address {
			return Ok((Some(request.id), address, "stored"));
		}

		let address = self.derive_address(&request, project).await?;
		Ok((Some(request.id), address, "derived"))
	}

	/// Looks the deployment transaction up and persists the deployed address
	async fn derive_address(
		&self,
		request: &ContractDeploymentRequest,
		project: &Project,
	) -> Result<ContractAddress, ServiceError> {
		info!(
			id = %request.id,
			alias = %request.alias,
			"Contract address not stored, checking deployment transaction"
		);

		let address = self
			.eth_common_service
			.fetch_transaction_info(
				request.tx_hash.clone(),
				request.chain_id,
				project.custom_rpc_url.clone(),
				&[],
			)
			.await?
			.and_then(|info| info.deployed_contract_address)
			.ok_or_else(|| ServiceError::contract_not_yet_deployed(request.id, &request.alias))?;

		match self
			.repository
			.set_contract_address(request.id, address)
			.await
		{
			Ok(true) => info!(id = %request.id, %address, "Stored deployed contract address"),
			Ok(false) => warn!(id = %request.id, "Deployment request vanished before address update"),
			Err(e) => warn!(id = %request.id, error = %e, "Failed to store deployed contract address"),
		}

		Ok(address)
	}
}

#[async_trait]
impl<R, C> DeployedContractIdentifierResolverServiceTrait
	for DeployedContractIdentifierResolverService<R, C>
where
	R: ContractDeploymentRequestRepositoryTrait,
	C: EthCommonServiceTrait,
{
	#[instrument(skip(self, identifier, project), fields(identifier = %identifier))]
	async fn resolve_contract_id_and_address(
		&self,
		identifier: &DeployedContractIdentifier,
		project: &Project,
	) -> Result<(Option<ContractDeploymentRequestId>, ContractAddress), ServiceError> {
		match self.resolve(identifier, project).await {
			Ok((id, address, outcome)) => {
				record_resolution(identifier.kind(), outcome);
				Ok((id, address))
			}
			Err(e) => {
				let outcome = match &e {
					ServiceError::ResourceNotFound(_) => "not_found",
					ServiceError::ContractNotYetDeployed(_) => "not_deployed",
					_ => "error",
				};
				record_resolution(identifier.kind(), outcome);
				Err(e)
			}
		}
	}
}
