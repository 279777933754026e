//! Configuration loading and validation.
//!
//! - error: configuration error types
//! - service_config: RPC and chain settings of the resolver services

mod error;
mod service_config;

use std::path::Path;

pub use error::ConfigError;
pub use service_config::{ChainProperties, ServiceConfig};

/// Common interface for configuration types loaded from JSON files
pub trait ConfigLoader: Sized {
	/// Load and validate the configuration stored at `path`
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Validate the configuration
	fn validate(&self) -> Result<(), ConfigError>;

	/// Check if a file is a JSON file based on its extension
	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.eq_ignore_ascii_case("json"))
			.unwrap_or(false)
	}
}
