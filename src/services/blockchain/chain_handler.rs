//! Chain specification to transport resolution.
//!
//! Maps a [`ChainSpec`] onto the RPC endpoint to query and hands out JSON-RPC
//! transports for it. Transports for known chains are cached by chain id and created
//! lazily on first use; transports for project specific RPC URLs are built per call.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
	models::{Chain, ChainId, ChainSpec, ServiceConfig},
	services::blockchain::{
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
};

/// Hands out transports for chain specifications
#[async_trait]
pub trait TransportProvider: Send + Sync {
	/// Returns a transport connected to the endpoint selected for `chain_spec`
	async fn transport_for(
		&self,
		chain_spec: &ChainSpec,
	) -> Result<Arc<dyn BlockchainTransport>, BlockChainError>;
}

/// Resolves RPC endpoints for chains and caches their transports
pub struct ChainHandler {
	config: ServiceConfig,
	/// Transports of known chains indexed by chain id
	transports: Arc<RwLock<HashMap<ChainId, Arc<dyn BlockchainTransport>>>>,
}

impl ChainHandler {
	pub fn new(config: ServiceConfig) -> Self {
		Self {
			config,
			transports: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// Selects the RPC URL for a chain specification
	///
	/// Precedence: the custom URL of the specification, the configured override of
	/// the chain, the Infura endpoint when an Infura id is configured, the default
	/// endpoint of the chain.
	///
	/// # Returns
	/// * `(url, cacheable)` where `cacheable` is false for custom URLs
	pub fn resolve_rpc_url(&self, chain_spec: &ChainSpec) -> Result<(String, bool), BlockChainError> {
		if let Some(custom_url) = chain_spec
			.custom_rpc_url
			.as_deref()
			.filter(|url| !url.trim().is_empty())
		{
			return Ok((custom_url.to_string(), false));
		}

		if let Some(override_url) = self.config.rpc_url_override(chain_spec.chain_id) {
			return Ok((override_url.to_string(), true));
		}

		let chain = Chain::from_id(chain_spec.chain_id)
			.ok_or_else(|| BlockChainError::unsupported_chain_id(chain_spec.chain_id))?;

		let infura_id = self
			.config
			.infura_id
			.as_deref()
			.filter(|id| !id.trim().is_empty());
		let url = match (chain.infura_prefix(), infura_id) {
			(Some(prefix), Some(infura_id)) => format!("{}{}", prefix, infura_id),
			_ => chain.default_rpc_url().to_string(),
		};

		Ok((url, true))
	}

	fn create_transport(&self, url: &str) -> Result<Arc<dyn BlockchainTransport>, BlockChainError> {
		let transport =
			HttpTransportClient::new(url, self.config.request_timeout(), self.config.max_retries)?;
		Ok(Arc::new(transport))
	}
}

#[async_trait]
impl TransportProvider for ChainHandler {
	async fn transport_for(
		&self,
		chain_spec: &ChainSpec,
	) -> Result<Arc<dyn BlockchainTransport>, BlockChainError> {
		let (url, cacheable) = self.resolve_rpc_url(chain_spec)?;
		if !cacheable {
			debug!(chain_id = %chain_spec.chain_id, "Using custom RPC URL");
			return self.create_transport(&url);
		}

		// Fast path: check if transport exists
		if let Some(transport) = self.transports.read().await.get(&chain_spec.chain_id) {
			return Ok(transport.clone());
		}

		// Slow path: another task may have created it while we waited for the lock
		let mut transports = self.transports.write().await;
		if let Some(transport) = transports.get(&chain_spec.chain_id) {
			return Ok(transport.clone());
		}
		let transport = self.create_transport(&url)?;
		transports.insert(chain_spec.chain_id, transport.clone());
		debug!(chain_id = %chain_spec.chain_id, "Created transport");
		Ok(transport)
	}
}
