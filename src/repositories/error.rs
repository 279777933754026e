//! Error types for repository operations.
//!
//! This module defines the error types that can occur during repository operations,
//! including validation errors, loading errors, and internal errors. It provides
//! a consistent error handling interface across all repository implementations.

use std::collections::HashMap;
use thiserror::Error as ThisError;

use crate::utils::{ErrorContext, TraceableError};

/// Errors that can occur during repository operations
#[derive(ThisError, Debug)]
pub enum RepositoryError {
	/// Error that occurs when a stored entity violates a repository constraint
	#[error("Validation error: {0}")]
	ValidationError(Box<ErrorContext>),

	/// Error that occurs when loading entities from files
	#[error("Load error: {0}")]
	LoadError(Box<ErrorContext>),

	/// Error that occurs due to internal repository operations
	#[error("Internal error: {0}")]
	InternalError(Box<ErrorContext>),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl RepositoryError {
	/// Create a new validation error
	pub fn validation_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}

	/// Create a new load error
	pub fn load_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::LoadError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}

	/// Create a new internal error
	pub fn internal_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InternalError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}
}

impl TraceableError for RepositoryError {
	fn trace_id(&self) -> String {
		match self {
			Self::ValidationError(ctx) => ctx.trace_id.clone(),
			Self::LoadError(ctx) => ctx.trace_id.clone(),
			Self::InternalError(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => uuid::Uuid::new_v4().to_string(),
		}
	}
}
