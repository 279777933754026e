//! Network transport implementations for blockchain clients.
//!
//! Provides the JSON-RPC transport abstraction used by the EVM blockchain service
//! together with its HTTP implementation.

mod http;

pub use http::HttpTransportClient;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::services::blockchain::BlockChainError;

/// Base trait for all blockchain transport clients
#[async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Get the URL requests are sent to
	fn get_current_url(&self) -> String;

	/// Send a raw JSON-RPC request and return the full response object
	async fn send_raw_request(
		&self,
		method: &str,
		params: Option<Value>,
	) -> Result<Value, BlockChainError>;

	/// Build the JSON-RPC request body
	fn customize_request(&self, id: u64, method: &str, params: Option<Value>) -> Value {
		json!({
			"jsonrpc": "2.0",
			"id": id,
			"method": method,
			"params": params.unwrap_or_else(|| json!([]))
		})
	}
}
