//! Configuration error types.
//!
//! This module defines the error types that can occur during configuration
//! loading and validation.

use std::collections::HashMap;
use thiserror::Error as ThisError;

use crate::utils::{ErrorContext, TraceableError};

/// Errors that can occur during configuration operations
#[derive(ThisError, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// Configuration validation failed
	#[error("Validation error: {0}")]
	ValidationError(Box<ErrorContext>),

	/// Failed to parse configuration file
	#[error("Parse error: {0}")]
	ParseError(Box<ErrorContext>),

	/// File system error during configuration loading
	#[error("File error: {0}")]
	FileError(Box<ErrorContext>),

	/// Other errors
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl ConfigError {
	/// Create a new validation error
	pub fn validation_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}

	/// Create a new parse error
	pub fn parse_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}

	/// Create a new file error
	pub fn file_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::FileError(Box::new(ErrorContext::new_with_log(msg, source, metadata)))
	}
}

impl TraceableError for ConfigError {
	fn trace_id(&self) -> String {
		match self {
			Self::ValidationError(ctx) => ctx.trace_id.clone(),
			Self::ParseError(ctx) => ctx.trace_id.clone(),
			Self::FileError(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => uuid::Uuid::new_v4().to_string(),
		}
	}
}
