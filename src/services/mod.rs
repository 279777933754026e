//! Core services implementing the business logic.
//!
//! This module contains the main service components:
//! - `blockchain`: Blockchain lookups, transports and chain endpoint selection
//! - `common`: Parameter stamping, resource checks and transaction lookup
//! - `resolver`: Deployed contract identifier resolution

pub mod blockchain;
pub mod common;
mod error;
pub mod resolver;

pub use error::{ErrorCode, ServiceError};
