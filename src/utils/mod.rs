//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - error: Error context type for more structured error handling
//! - logging: Tracing subscriber setup
//! - metrics: Prometheus registry and counters

mod error;
pub mod logging;
pub mod metrics;

pub use error::*;
