//! Blockchain error types and handling.
//!
//! This module provides the error type for blockchain operations, covering
//! network connectivity, JSON-RPC request processing and chain resolution.

use std::collections::HashMap;
use thiserror::Error as ThisError;

use crate::{
	models::ChainId,
	utils::{ErrorContext, TraceableError},
};

/// Represents possible errors that can occur during blockchain operations
#[derive(ThisError, Debug)]
pub enum BlockChainError {
	/// Errors related to network connectivity issues
	#[error("Connection error: {0}")]
	ConnectionError(Box<ErrorContext>),

	/// Errors related to malformed requests or invalid responses
	#[error("Request error: {0}")]
	RequestError(Box<ErrorContext>),

	/// No RPC endpoint is known for the requested chain
	#[error("Unsupported chain: {0}")]
	UnsupportedChainId(Box<ErrorContext>),

	/// Internal errors within the blockchain client
	#[error("Internal error: {0}")]
	InternalError(Box<ErrorContext>),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl BlockChainError {
	/// Creates a new connection error
	pub fn connection_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ConnectionError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}

	/// Creates a new request error
	pub fn request_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::RequestError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}

	/// Creates a new unsupported chain error
	pub fn unsupported_chain_id(chain_id: ChainId) -> Self {
		Self::UnsupportedChainId(Box::new(ErrorContext::new_with_log(
			format!("Unsupported chain ID: {}", chain_id),
			None,
			Some(HashMap::from([(
				"chain_id".to_string(),
				chain_id.to_string(),
			)])),
		)))
	}

	/// Creates a new internal error
	pub fn internal_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InternalError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}
}

impl TraceableError for BlockChainError {
	fn trace_id(&self) -> String {
		match self {
			Self::ConnectionError(ctx) => ctx.trace_id.clone(),
			Self::RequestError(ctx) => ctx.trace_id.clone(),
			Self::UnsupportedChainId(ctx) => ctx.trace_id.clone(),
			Self::InternalError(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => uuid::Uuid::new_v4().to_string(),
		}
	}
}
