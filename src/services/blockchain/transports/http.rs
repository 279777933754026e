//! HTTP JSON-RPC transport.
//!
//! Sends JSON-RPC requests to a single node endpoint. Transient failures (timeouts,
//! connection resets, 5xx and 429 responses) are retried with exponential backoff by
//! the `reqwest-retry` middleware; everything else surfaces as a [`BlockChainError`].

use std::{
	collections::HashMap,
	sync::atomic::{AtomicU64, Ordering},
	time::Duration,
};

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
	services::blockchain::{transports::BlockchainTransport, BlockChainError},
	utils::metrics::record_rpc_request,
};

/// A client sending JSON-RPC requests to an EVM node over HTTP
pub struct HttpTransportClient {
	/// HTTP client with the retry middleware attached
	client: ClientWithMiddleware,
	/// Node endpoint
	url: String,
	/// Id of the next JSON-RPC request
	request_id: AtomicU64,
}

impl HttpTransportClient {
	/// Creates a new transport for `url`
	///
	/// # Arguments
	/// * `url` - Node endpoint, must be an absolute http(s) URL
	/// * `request_timeout` - Timeout of a single HTTP attempt
	/// * `max_retries` - Retries of transient failures
	pub fn new(
		url: &str,
		request_timeout: Duration,
		max_retries: u32,
	) -> Result<Self, BlockChainError> {
		let metadata = HashMap::from([("url".to_string(), url.to_string())]);

		let parsed = url::Url::parse(url).map_err(|e| {
			BlockChainError::connection_error(
				"Invalid RPC URL",
				Some(Box::new(e)),
				Some(metadata.clone()),
			)
		})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(BlockChainError::connection_error(
				"RPC URL must use http or https",
				None,
				Some(metadata),
			));
		}

		let http_client = reqwest::Client::builder()
			.timeout(request_timeout)
			.build()
			.map_err(|e| {
				BlockChainError::internal_error(
					"Failed to build HTTP client",
					Some(Box::new(e)),
					Some(metadata.clone()),
				)
			})?;

		let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);
		let client = ClientBuilder::new(http_client)
			.with(RetryTransientMiddleware::new_with_policy(retry_policy))
			.build();

		Ok(Self {
			client,
			url: url.to_string(),
			request_id: AtomicU64::new(1),
		})
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	fn get_current_url(&self) -> String {
		self.url.clone()
	}

	#[instrument(skip(self, params), fields(url = %self.url))]
	async fn send_raw_request(
		&self,
		method: &str,
		params: Option<Value>,
	) -> Result<Value, BlockChainError> {
		let id = self.request_id.fetch_add(1, Ordering::Relaxed);
		let request_body = self.customize_request(id, method, params);
		let metadata = HashMap::from([
			("url".to_string(), self.url.clone()),
			("method".to_string(), method.to_string()),
		]);

		record_rpc_request(method);
		debug!(id, "Sending JSON-RPC request");

		let response = self
			.client
			.post(self.url.as_str())
			.header("Content-Type", "application/json")
			.json(&request_body)
			.send()
			.await
			.map_err(|e| {
				BlockChainError::connection_error(
					"Failed to send JSON-RPC request",
					Some(Box::new(e)),
					Some(metadata.clone()),
				)
			})?;

		let status = response.status();
		if !status.is_success() {
			let error_body = response.text().await.unwrap_or_default();
			return Err(BlockChainError::request_error(
				format!("HTTP error {}: {}", status, error_body),
				None,
				Some(metadata),
			));
		}

		let json: Value = response.json().await.map_err(|e| {
			BlockChainError::request_error(
				"Failed to parse JSON-RPC response",
				Some(Box::new(e)),
				Some(metadata.clone()),
			)
		})?;

		if let Some(error) = json.get("error").filter(|error| !error.is_null()) {
			let message = error
				.get("message")
				.and_then(Value::as_str)
				.unwrap_or("unknown error");
			let code = error
				.get("code")
				.map(|code| code.to_string())
				.unwrap_or_default();
			let mut metadata = metadata;
			metadata.insert("code".to_string(), code);
			return Err(BlockChainError::request_error(
				format!("JSON-RPC error: {}", message),
				None,
				Some(metadata),
			));
		}

		Ok(json)
	}
}
