//! Utilities shared by the blockchain facing services.
//!
//! [`EthCommonService`] stamps create parameters with a generated id and timestamp,
//! turns missing optional resources into [`ServiceError::ResourceNotFound`] and looks
//! up transactions for deployment requests that may not have been submitted yet.

mod providers;

pub use providers::{
	CurrentUtcDateTimeProvider, RandomUuidProvider, UtcDateTimeProvider, UuidProvider,
};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
	models::{
		BlockchainTransactionInfo, ChainId, ChainSpec, EventFilter, ParamsFactory, Project,
		TransactionHash,
	},
	services::{blockchain::BlockchainService, ServiceError},
};

/// Transaction lookup shared by the services
#[async_trait]
pub trait EthCommonServiceTrait: Send + Sync {
	/// Fetches the transaction with the given hash
	///
	/// Returns `Ok(None)` without querying the chain when no hash is given, since
	/// the transaction has not been submitted yet. Otherwise the lookup is delegated
	/// to the blockchain service for `(chain_id, custom_rpc_url)` with the requested
	/// events passed through.
	async fn fetch_transaction_info(
		&self,
		tx_hash: Option<TransactionHash>,
		chain_id: ChainId,
		custom_rpc_url: Option<String>,
		events: &[EventFilter],
	) -> Result<Option<BlockchainTransactionInfo>, ServiceError>;
}

/// Common service backed by a blockchain service and id/clock providers
pub struct EthCommonService<B, U = RandomUuidProvider, D = CurrentUtcDateTimeProvider>
where
	B: BlockchainService,
	U: UuidProvider,
	D: UtcDateTimeProvider,
{
	blockchain_service: B,
	uuid_provider: U,
	utc_date_time_provider: D,
}

impl<B: BlockchainService> EthCommonService<B> {
	/// Creates a service generating random ids and reading the system clock
	pub fn with_defaults(blockchain_service: B) -> Self {
		Self::new(
			blockchain_service,
			RandomUuidProvider,
			CurrentUtcDateTimeProvider,
		)
	}
}

impl<B, U, D> EthCommonService<B, U, D>
where
	B: BlockchainService,
	U: UuidProvider,
	D: UtcDateTimeProvider,
{
	pub fn new(blockchain_service: B, uuid_provider: U, utc_date_time_provider: D) -> Self {
		Self {
			blockchain_service,
			uuid_provider,
			utc_date_time_provider,
		}
	}

	/// Builds an entity from create parameters
	///
	/// Draws one id and one timestamp from the providers and hands them to the
	/// factory together with the parameters and the project.
	pub fn create_database_params<P, E, F>(&self, factory: &F, params: P, project: &Project) -> E
	where
		F: ParamsFactory<P, E> + ?Sized,
	{
		let id = self.uuid_provider.get_uuid();
		let created_at = self.utc_date_time_provider.get_utc_date_time();
		factory.from_create_params(id, params, project, created_at)
	}

	/// Unwraps an optional resource, failing with `ResourceNotFound(message)` when
	/// it is absent
	pub fn fetch_resource<R>(
		&self,
		resource: Option<R>,
		message: impl Into<String>,
	) -> Result<R, ServiceError> {
		resource.ok_or_else(|| ServiceError::resource_not_found(message, None, None))
	}
}

#[async_trait]
impl<B, U, D> EthCommonServiceTrait for EthCommonService<B, U, D>
where
	B: BlockchainService,
	U: UuidProvider,
	D: UtcDateTimeProvider,
{
	#[instrument(skip(self, custom_rpc_url, events))]
	async fn fetch_transaction_info(
		&self,
		tx_hash: Option<TransactionHash>,
		chain_id: ChainId,
		custom_rpc_url: Option<String>,
		events: &[EventFilter],
	) -> Result<Option<BlockchainTransactionInfo>, ServiceError> {
		let Some(tx_hash) = tx_hash else {
			debug!("No transaction hash, skipping lookup");
			return Ok(None);
		};

		let chain_spec = ChainSpec::new(chain_id, custom_rpc_url);
		let info = self
			.blockchain_service
			.fetch_transaction_info(&chain_spec, &tx_hash, events)
			.await?;
		Ok(info)
	}
}
