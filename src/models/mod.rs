//! Domain models and data structures for deployed contract resolution.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: Chain specifications and transaction info
//! - `config`: Configuration loading and validation
//! - `contract_deployment`: Persisted contract deployment requests
//! - `identifier`: The ways a client can reference a deployed contract
//! - `params`: Conversion of create parameters into entities
//! - `primitives`: Addresses, hashes, ids and other value types
//! - `project`: Project context

mod blockchain;
mod config;
mod contract_deployment;
mod identifier;
mod params;
mod primitives;
mod project;

pub use blockchain::{BlockchainTransactionInfo, Chain, ChainSpec, EventFilter, EventLog};
pub use config::{ChainProperties, ConfigError, ConfigLoader, ServiceConfig};
pub use contract_deployment::ContractDeploymentRequest;
pub use identifier::{DeployedContractIdentifier, DeployedContractIdentifierRequestBody};
pub use params::ParamsFactory;
pub use primitives::{
	AddressParseError, Balance, BaseUrl, ChainId, ContractAddress, ContractDeploymentRequestId,
	FunctionData, ProjectId, TransactionHash, UserId, UtcDateTime, WalletAddress,
};
pub use project::Project;
