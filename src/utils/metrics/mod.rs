//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines counters for contract resolutions and blockchain RPC traffic.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Counter Vector for contract resolutions, by identifier kind and outcome
	pub static ref CONTRACT_RESOLUTIONS: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("contract_resolutions_total", "Number of deployed contract identifier resolutions"),
			&["identifier", "outcome"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter Vector for JSON-RPC requests sent to blockchain nodes
	pub static ref BLOCKCHAIN_RPC_REQUESTS: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("blockchain_rpc_requests_total", "Number of JSON-RPC requests sent to blockchain nodes"),
			&["method"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};
}

/// Records the outcome of a single contract resolution.
pub fn record_resolution(identifier: &str, outcome: &str) {
	CONTRACT_RESOLUTIONS
		.with_label_values(&[identifier, outcome])
		.inc();
}

/// Records a JSON-RPC request for the given method.
pub fn record_rpc_request(method: &str) {
	BLOCKCHAIN_RPC_REQUESTS.with_label_values(&[method]).inc();
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}
