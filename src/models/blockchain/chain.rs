//! Known EVM chains and chain specifications.

use serde::{Deserialize, Serialize};

use crate::models::ChainId;

/// Identifies which network, and optionally which node, a request is sent to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainSpec {
	pub chain_id: ChainId,
	/// Overrides any configured endpoint for the chain when set
	#[serde(default)]
	pub custom_rpc_url: Option<String>,
}

impl ChainSpec {
	pub fn new(chain_id: ChainId, custom_rpc_url: Option<String>) -> Self {
		Self {
			chain_id,
			custom_rpc_url,
		}
	}
}

/// Chains with a built-in default RPC endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
	EthereumMain,
	GoerliTestnet,
	Optimism,
	Bsc,
	Xdai,
	MaticMain,
	Fantom,
	Moonbeam,
	Moonriver,
	PolygonZkEvmTestnet,
	HardhatTestnet,
	Celo,
	ParaTime,
	CeloAlfajoresTestnet,
	Arbitrum,
	Avax,
	MaticTestnetMumbai,
	Aurora,
}

impl Chain {
	pub const ALL: [Chain; 18] = [
		Chain::EthereumMain,
		Chain::GoerliTestnet,
		Chain::Optimism,
		Chain::Bsc,
		Chain::Xdai,
		Chain::MaticMain,
		Chain::Fantom,
		Chain::Moonbeam,
		Chain::Moonriver,
		Chain::PolygonZkEvmTestnet,
		Chain::HardhatTestnet,
		Chain::Celo,
		Chain::ParaTime,
		Chain::CeloAlfajoresTestnet,
		Chain::Arbitrum,
		Chain::Avax,
		Chain::MaticTestnetMumbai,
		Chain::Aurora,
	];

	pub fn id(&self) -> ChainId {
		ChainId(match self {
			Chain::EthereumMain => 1,
			Chain::GoerliTestnet => 5,
			Chain::Optimism => 10,
			Chain::Bsc => 56,
			Chain::Xdai => 100,
			Chain::MaticMain => 137,
			Chain::Fantom => 250,
			Chain::Moonbeam => 1284,
			Chain::Moonriver => 1285,
			Chain::PolygonZkEvmTestnet => 1402,
			Chain::HardhatTestnet => 31337,
			Chain::Celo => 42220,
			Chain::ParaTime => 42262,
			Chain::CeloAlfajoresTestnet => 44787,
			Chain::Arbitrum => 42161,
			Chain::Avax => 43114,
			Chain::MaticTestnetMumbai => 80001,
			Chain::Aurora => 1313161554,
		})
	}

	/// Public RPC endpoint used when nothing else is configured
	pub fn default_rpc_url(&self) -> &'static str {
		match self {
			Chain::EthereumMain => "https://cloudflare-eth.com/",
			Chain::GoerliTestnet => "https://goerli.prylabs.net/",
			Chain::Optimism => "https://mainnet.optimism.io",
			Chain::Bsc => "https://bsc-dataseed.binance.org/",
			Chain::Xdai => "https://rpc.xdaichain.com/",
			Chain::MaticMain => "https://rpc-mainnet.matic.network/",
			Chain::Fantom => "https://rpc.ftm.tools/",
			Chain::Moonbeam => "https://moonbeam.public.blastapi.io",
			Chain::Moonriver => "https://rpc.moonriver.moonbeam.network/",
			Chain::PolygonZkEvmTestnet => "https://public.zkevm-test.net:2083",
			Chain::HardhatTestnet => "http://hardhat:8545",
			Chain::Celo => "https://forno.celo.org",
			Chain::ParaTime => "https://emerald.oasis.dev",
			Chain::CeloAlfajoresTestnet => "https://alfajores-forno.celo-testnet.org",
			Chain::Arbitrum => "https://arb1.arbitrum.io/rpc",
			Chain::Avax => "https://api.avax.network/ext/bc/C/rpc",
			Chain::MaticTestnetMumbai => "https://rpc-mumbai.matic.today/",
			Chain::Aurora => "https://mainnet.aurora.dev/",
		}
	}

	/// Infura endpoint prefix, the project id is appended to it
	pub fn infura_prefix(&self) -> Option<&'static str> {
		match self {
			Chain::EthereumMain => Some("https://mainnet.infura.io/v3/"),
			Chain::GoerliTestnet => Some("https://goerli.infura.io/v3/"),
			Chain::MaticMain => Some("https://polygon-mainnet.infura.io/v3/"),
			Chain::MaticTestnetMumbai => Some("https://polygon-mumbai.infura.io/v3/"),
			_ => None,
		}
	}

	pub fn from_id(id: ChainId) -> Option<Chain> {
		Self::ALL.into_iter().find(|chain| chain.id() == id)
	}
}
