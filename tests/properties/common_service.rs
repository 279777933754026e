use async_trait::async_trait;
use mockall::mock;
use proptest::{prelude::*, test_runner::Config};
use uuid::Uuid;

use deployed_contract_resolver::{
	models::{
		BlockchainTransactionInfo, ChainId, ChainSpec, EventFilter, Project, TransactionHash,
		UtcDateTime,
	},
	services::{
		blockchain::{BlockChainError, BlockchainService},
		common::{EthCommonService, EthCommonServiceTrait, UtcDateTimeProvider, UuidProvider},
		ServiceError,
	},
};

use crate::properties::strategies::{date_time_strategy, project_strategy, uuid_strategy};

mock! {
	pub BlockchainClient {}

	#[async_trait]
	impl BlockchainService for BlockchainClient {
		async fn fetch_transaction_info(
			&self,
			chain_spec: &ChainSpec,
			tx_hash: &TransactionHash,
			events: &[EventFilter],
		) -> Result<Option<BlockchainTransactionInfo>, BlockChainError>;
	}
}

struct FixedUuid(Uuid);

impl UuidProvider for FixedUuid {
	fn get_uuid(&self) -> Uuid {
		self.0
	}
}

struct FixedClock(UtcDateTime);

impl UtcDateTimeProvider for FixedClock {
	fn get_utc_date_time(&self) -> UtcDateTime {
		self.0
	}
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_create_database_params_applies_factory(
		id in uuid_strategy(),
		now in date_time_strategy(),
		params in any::<(u32, String)>(),
		project in project_strategy(),
	) {
		let mut blockchain = MockBlockchainClient::new();
		blockchain.expect_fetch_transaction_info().never();
		let service = EthCommonService::new(blockchain, FixedUuid(id), FixedClock(now));

		let factory = |id: Uuid, params: (u32, String), project: &Project, created_at: UtcDateTime| {
			(id, params, project.clone(), created_at)
		};
		let expected = factory(id, params.clone(), &project, now);

		prop_assert_eq!(service.create_database_params(&factory, params, &project), expected);
	}

	#[test]
	fn test_fetch_resource_returns_present_values(
		value in proptest::option::of(any::<i64>()),
		message in "[a-zA-Z0-9 :]{1,40}",
	) {
		let service = EthCommonService::with_defaults(MockBlockchainClient::new());

		match (value, service.fetch_resource(value, message.clone())) {
			(Some(expected), Ok(actual)) => prop_assert_eq!(actual, expected),
			(None, Err(ServiceError::ResourceNotFound(ctx))) => prop_assert_eq!(ctx.message.clone(), message),
			(value, result) => prop_assert!(false, "unexpected result {:?} for {:?}", result, value),
		}
	}

	#[test]
	fn test_fetch_transaction_info_without_hash_never_queries(
		chain_id in any::<u64>(),
		custom_rpc_url in proptest::option::of("https?://[a-z]{1,10}"),
		signatures in proptest::collection::vec("[A-Z][a-z]{1,8}\\(address\\)", 0..4),
	) {
		let mut blockchain = MockBlockchainClient::new();
		blockchain.expect_fetch_transaction_info().never();
		let service = EthCommonService::with_defaults(blockchain);
		let events: Vec<EventFilter> = signatures.into_iter().map(|signature| EventFilter::new(signature)).collect();

		let result = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()
			.unwrap()
			.block_on(service.fetch_transaction_info(None, ChainId(chain_id), custom_rpc_url, &events));

		prop_assert!(result.unwrap().is_none());
	}
}
