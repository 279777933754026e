//! Deployed contract identifier resolution.
//!
//! Resolves references to deployed contracts (by deployment request id, by alias
//! within a project or by raw address) into the deployment request id and the
//! on-chain contract address, looking the deployment transaction up on chain when
//! the address has not been recorded yet.
//!
//! # Architecture
//!
//! - `models`: Domain types and configuration
//! - `repositories`: Deployment request storage
//! - `services`: Resolver, common service and blockchain access
//! - `bootstrap`: Service wiring for the binary
//! - `utils`: Errors, logging and metrics

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
