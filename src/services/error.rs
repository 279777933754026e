//! Service error types and handling.
//!
//! [`ServiceError`] is the error returned by the resolver and common services. Each
//! variant maps to a stable [`ErrorCode`] an upstream request handler can translate
//! into a response status.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::debug;

use crate::{
	models::ContractDeploymentRequestId,
	repositories::RepositoryError,
	services::blockchain::BlockChainError,
	utils::{ErrorContext, TraceableError},
};

/// Stable error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	ResourceNotFound,
	#[serde(rename = "CONTRACT_NOT_DEPLOYED")]
	ContractNotDeployed,
	InvalidRequestBody,
	InternalError,
}

/// Represents possible errors returned by the services
#[derive(ThisError, Debug)]
pub enum ServiceError {
	/// The referenced resource does not exist
	#[error("Resource not found: {0}")]
	ResourceNotFound(Box<ErrorContext>),

	/// The deployment request exists but its contract is not on chain yet
	#[error("Contract not yet deployed: {0}")]
	ContractNotYetDeployed(Box<ErrorContext>),

	/// The client supplied request body is malformed
	#[error("Invalid request body: {0}")]
	InvalidRequestBody(Box<ErrorContext>),

	#[error(transparent)]
	Repository(#[from] RepositoryError),

	#[error(transparent)]
	Blockchain(#[from] BlockChainError),
}

impl ServiceError {
	/// Creates a new resource not found error
	pub fn resource_not_found(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ResourceNotFound(client_fault_context(msg, source, metadata))
	}

	/// Creates a new contract not yet deployed error for a deployment request
	pub fn contract_not_yet_deployed(id: ContractDeploymentRequestId, alias: &str) -> Self {
		Self::ContractNotYetDeployed(client_fault_context(
			format!(
				"Contract with ID: {} and alias: {} is not yet deployed",
				id, alias
			),
			None,
			Some(HashMap::from([
				("id".to_string(), id.to_string()),
				("alias".to_string(), alias.to_string()),
			])),
		))
	}

	/// Creates a new invalid request body error
	pub fn invalid_request_body(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidRequestBody(client_fault_context(msg, source, metadata))
	}

	/// Returns the error code reported to API clients
	pub fn error_code(&self) -> ErrorCode {
		match self {
			Self::ResourceNotFound(_) => ErrorCode::ResourceNotFound,
			Self::ContractNotYetDeployed(_) => ErrorCode::ContractNotDeployed,
			Self::InvalidRequestBody(_) => ErrorCode::InvalidRequestBody,
			Self::Repository(_) | Self::Blockchain(_) => ErrorCode::InternalError,
		}
	}

	/// Returns the message of the error without the variant prefix
	pub fn message(&self) -> String {
		match self {
			Self::ResourceNotFound(ctx)
			| Self::ContractNotYetDeployed(ctx)
			| Self::InvalidRequestBody(ctx) => ctx.message.clone(),
			Self::Repository(e) => e.to_string(),
			Self::Blockchain(e) => e.to_string(),
		}
	}
}

/// Builds the context of an error caused by the client's request, logged at debug level
fn client_fault_context(
	msg: impl Into<String>,
	source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	metadata: Option<HashMap<String, String>>,
) -> Box<ErrorContext> {
	let context = ErrorContext::new(msg, source, metadata);
	debug!(trace_id = %context.trace_id, "{}", context);
	Box::new(context)
}

impl TraceableError for ServiceError {
	fn trace_id(&self) -> String {
		match self {
			Self::ResourceNotFound(ctx) => ctx.trace_id.clone(),
			Self::ContractNotYetDeployed(ctx) => ctx.trace_id.clone(),
			Self::InvalidRequestBody(ctx) => ctx.trace_id.clone(),
			Self::Repository(e) => e.trace_id(),
			Self::Blockchain(e) => e.trace_id(),
		}
	}
}
