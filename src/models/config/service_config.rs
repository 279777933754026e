//! Service configuration.
//!
//! Settings are read from an optional JSON file and then overridden by
//! environment variables:
//!
//! - `INFURA_ID`
//! - `RPC_REQUEST_TIMEOUT_MS`
//! - `RPC_MAX_RETRIES`

use std::{collections::HashMap, fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::models::{
	config::{ConfigError, ConfigLoader},
	ChainId,
};

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_MAX_RETRIES: u32 = 3;

fn default_request_timeout_ms() -> u64 {
	DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_max_retries() -> u32 {
	DEFAULT_MAX_RETRIES
}

/// Per-chain settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProperties {
	/// RPC endpoint used instead of the built-in default for the chain
	#[serde(default)]
	pub rpc_url_override: Option<String>,
}

/// Settings of the blockchain facing services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
	/// Infura project id, appended to the Infura endpoint of supported chains
	#[serde(default)]
	pub infura_id: Option<String>,
	/// Per-chain settings keyed by chain id
	#[serde(default)]
	pub chains: HashMap<ChainId, ChainProperties>,
	/// Timeout of a single JSON-RPC HTTP request
	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u64,
	/// Retries of transient JSON-RPC HTTP failures
	#[serde(default = "default_max_retries")]
	pub max_retries: u32,
}

impl Default for ServiceConfig {
	fn default() -> Self {
		Self {
			infura_id: None,
			chains: HashMap::new(),
			request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
			max_retries: DEFAULT_MAX_RETRIES,
		}
	}
}

impl ServiceConfig {
	/// Loads the configuration from `path` if given, otherwise starts from defaults,
	/// then applies environment overrides and validates the result.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let config = match path {
			Some(path) => Self::load_from_path(path)?,
			None => Self::default(),
		};
		let config = config.with_overrides(|key| std::env::var(key).ok())?;
		config.validate()?;
		Ok(config)
	}

	/// Applies overrides looked up by environment variable name
	pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(infura_id) = lookup("INFURA_ID") {
			self.infura_id = Some(infura_id).filter(|id| !id.trim().is_empty());
		}
		if let Some(timeout) = lookup("RPC_REQUEST_TIMEOUT_MS") {
			self.request_timeout_ms = timeout.trim().parse().map_err(|e| {
				ConfigError::parse_error(
					"Invalid RPC_REQUEST_TIMEOUT_MS value",
					Some(Box::new(e)),
					Some(HashMap::from([("value".to_string(), timeout.clone())])),
				)
			})?;
		}
		if let Some(retries) = lookup("RPC_MAX_RETRIES") {
			self.max_retries = retries.trim().parse().map_err(|e| {
				ConfigError::parse_error(
					"Invalid RPC_MAX_RETRIES value",
					Some(Box::new(e)),
					Some(HashMap::from([("value".to_string(), retries.clone())])),
				)
			})?;
		}
		Ok(self)
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_millis(self.request_timeout_ms)
	}

	/// Configured RPC endpoint override for a chain
	pub fn rpc_url_override(&self, chain_id: ChainId) -> Option<&str> {
		self.chains
			.get(&chain_id)
			.and_then(|properties| properties.rpc_url_override.as_deref())
	}
}

impl ConfigLoader for ServiceConfig {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let metadata = HashMap::from([("path".to_string(), path.display().to_string())]);

		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(
				"Service configuration must be a JSON file",
				None,
				Some(metadata),
			));
		}

		let content = fs::read_to_string(path).map_err(|e| {
			ConfigError::file_error(
				"Failed to read service configuration",
				Some(Box::new(e)),
				Some(metadata.clone()),
			)
		})?;
		let config: ServiceConfig = serde_json::from_str(&content).map_err(|e| {
			ConfigError::parse_error(
				"Failed to parse service configuration",
				Some(Box::new(e)),
				Some(metadata.clone()),
			)
		})?;

		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.request_timeout_ms == 0 {
			return Err(ConfigError::validation_error(
				"request_timeout_ms must be greater than 0",
				None,
				None,
			));
		}

		for (chain_id, properties) in &self.chains {
			if let Some(rpc_url) = &properties.rpc_url_override {
				if let Err(e) = url::Url::parse(rpc_url) {
					return Err(ConfigError::validation_error(
						format!("Invalid RPC URL override for chain {}", chain_id),
						Some(Box::new(e)),
						Some(HashMap::from([
							("chain_id".to_string(), chain_id.to_string()),
							("rpc_url".to_string(), rpc_url.clone()),
						])),
					));
				}
			}
		}

		Ok(())
	}
}
