//! Blockchain data models.
//!
//! - chain: known chains and the chain specification used to pick an RPC endpoint
//! - transaction: transaction info returned by blockchain lookups

mod chain;
mod transaction;

pub use chain::{Chain, ChainSpec};
pub use transaction::{BlockchainTransactionInfo, EventFilter, EventLog};
