//! Blockchain access for the services.
//!
//! - `client`: the [`BlockchainService`] interface and its EVM implementation
//! - `chain_handler`: RPC endpoint selection and transport caching per chain
//! - `transports`: JSON-RPC transports
//! - `error`: blockchain error type

mod chain_handler;
mod client;
mod error;
pub mod transports;

pub use chain_handler::{ChainHandler, TransportProvider};
pub use client::{BlockchainService, EvmBlockchainService};
pub use error::BlockChainError;
pub use transports::{BlockchainTransport, HttpTransportClient};
