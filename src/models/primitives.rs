//! Primitive value types shared by all models.
//!
//! Identifiers are thin wrappers over [`Uuid`], EVM addresses are stored as
//! [`Address`] and always rendered as lowercase `0x`-prefixed hex.

use std::{fmt, str::FromStr};

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamps are always UTC
pub type UtcDateTime = DateTime<Utc>;

/// Error returned when a string is not a valid 20-byte hex address
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
	#[error("address is empty")]
	Empty,
	#[error("address '{0}' is longer than 20 bytes")]
	TooLong(String),
	#[error("address '{0}' contains non-hex characters")]
	InvalidHex(String),
}

fn parse_address(value: &str) -> Result<Address, AddressParseError> {
	let trimmed = value.trim();
	let raw = trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
		.unwrap_or(trimmed);

	if raw.is_empty() {
		return Err(AddressParseError::Empty);
	}
	if raw.len() > 40 {
		return Err(AddressParseError::TooLong(value.to_string()));
	}
	if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(AddressParseError::InvalidHex(value.to_string()));
	}

	// Short addresses are left padded, "a" becomes 0x00..0a
	let padded = format!("{:0>40}", raw);
	let bytes =
		hex::decode(&padded).map_err(|_| AddressParseError::InvalidHex(value.to_string()))?;
	Ok(Address::from_slice(&bytes))
}

macro_rules! address_type {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(Address);

		impl $name {
			/// Parses a hex address, with or without the `0x` prefix
			pub fn parse(value: &str) -> Result<Self, AddressParseError> {
				parse_address(value).map(Self)
			}

			/// Address with all bytes set to zero
			pub fn zero() -> Self {
				Self(Address::ZERO)
			}

			pub fn as_address(&self) -> &Address {
				&self.0
			}

			/// Lowercase `0x`-prefixed representation
			pub fn raw_value(&self) -> String {
				format!("0x{}", hex::encode(self.0.as_slice()))
			}
		}

		impl From<Address> for $name {
			fn from(address: Address) -> Self {
				Self(address)
			}
		}

		impl FromStr for $name {
			type Err = AddressParseError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::parse(s)
			}
		}

		impl TryFrom<String> for $name {
			type Error = AddressParseError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::parse(&value)
			}
		}

		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.raw_value()
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.raw_value())
			}
		}
	};
}

address_type!(
	/// Address of a smart contract
	ContractAddress
);

address_type!(
	/// Address of an externally owned account
	WalletAddress
);

impl From<ContractAddress> for WalletAddress {
	fn from(value: ContractAddress) -> Self {
		Self(value.0)
	}
}

macro_rules! uuid_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub Uuid);

		impl $name {
			pub fn value(&self) -> Uuid {
				self.0
			}
		}

		impl From<Uuid> for $name {
			fn from(value: Uuid) -> Self {
				Self(value)
			}
		}

		impl FromStr for $name {
			type Err = uuid::Error;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Uuid::parse_str(s).map(Self)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				self.0.fmt(f)
			}
		}
	};
}

uuid_id!(
	/// Identifier of a project
	ProjectId
);
uuid_id!(
	/// Identifier of a project owner
	UserId
);
uuid_id!(
	/// Identifier of a contract deployment request
	ContractDeploymentRequestId
);

/// EVM chain id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
	pub fn value(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Hash of a submitted transaction, kept in lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TransactionHash(String);

impl TransactionHash {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into().trim().to_lowercase())
	}

	pub fn value(&self) -> &str {
		&self.0
	}
}

impl From<String> for TransactionHash {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<TransactionHash> for String {
	fn from(value: TransactionHash) -> Self {
		value.0
	}
}

impl fmt::Display for TransactionHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Hex encoded call data or contract bytecode
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FunctionData(String);

impl FunctionData {
	pub fn new(value: impl Into<String>) -> Self {
		let value = value.into();
		let raw = value.strip_prefix("0x").unwrap_or(&value);
		Self(format!("0x{}", raw.to_lowercase()))
	}

	pub fn empty() -> Self {
		Self("0x".to_string())
	}

	pub fn value(&self) -> &str {
		&self.0
	}
}

impl From<String> for FunctionData {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<FunctionData> for String {
	fn from(value: FunctionData) -> Self {
		value.0
	}
}

/// Amount of native currency, in wei
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub U256);

impl Balance {
	pub const ZERO: Balance = Balance(U256::ZERO);

	pub fn raw_value(&self) -> U256 {
		self.0
	}
}

/// Base URL used to build redirect links for a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseUrl(pub String);
