//! Repository implementations for persisted entities.
//!
//! This module contains the repository traits consumed by the services and the
//! bundled in-memory implementations:
//!
//! - Contract deployment request repository

mod contract_deployment;
mod error;

pub use contract_deployment::{
	ContractDeploymentRequestRepository, ContractDeploymentRequestRepositoryTrait,
};
pub use error::RepositoryError;
