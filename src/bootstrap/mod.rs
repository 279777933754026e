//! Service wiring for the resolver binary.
//!
//! Builds the resolver with its collaborators from the service configuration and the
//! deployment request records, and loads the project context a resolution runs in.

use std::{error::Error, path::Path};

use tracing::info;

use crate::{
	models::{Project, ServiceConfig},
	repositories::ContractDeploymentRequestRepository,
	services::{
		blockchain::{ChainHandler, EvmBlockchainService},
		common::EthCommonService,
		resolver::DeployedContractIdentifierResolverService,
	},
};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// EVM blockchain service selecting endpoints through the chain handler
pub type BlockchainServiceType = EvmBlockchainService<ChainHandler>;

/// Common service with random ids and the system clock
pub type CommonServiceType = EthCommonService<BlockchainServiceType>;

/// Resolver over the in-memory repository
pub type ResolverServiceType =
	DeployedContractIdentifierResolverService<ContractDeploymentRequestRepository, CommonServiceType>;

/// Initializes the resolver service.
///
/// # Arguments
/// * `config` - Service configuration used for RPC endpoint selection
/// * `records_path` - JSON file containing an array of deployment requests
///
/// # Returns
/// The resolver together with a handle on its repository
///
/// # Errors
/// Returns an error if the records cannot be loaded or are invalid
pub async fn initialize_services(
	config: ServiceConfig,
	records_path: &Path,
) -> Result<(ResolverServiceType, ContractDeploymentRequestRepository)> {
	let repository = ContractDeploymentRequestRepository::load_from_path(records_path).await?;
	let blockchain_service = EvmBlockchainService::new(ChainHandler::new(config));
	let common_service = EthCommonService::with_defaults(blockchain_service);
	let resolver = DeployedContractIdentifierResolverService::new(repository.clone(), common_service);

	info!(records = %records_path.display(), "Initialized resolver service");
	Ok((resolver, repository))
}

/// Loads the project context from a JSON file
pub async fn load_project(path: &Path) -> Result<Project> {
	let content = tokio::fs::read_to_string(path).await?;
	let project: Project = serde_json::from_str(&content)?;
	Ok(project)
}
