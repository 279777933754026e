use mockall::predicate::eq;

use deployed_contract_resolver::{
	models::{ContractAddress, ContractDeploymentRequestId, DeployedContractIdentifier, TransactionHash},
	repositories::RepositoryError,
	services::{
		blockchain::BlockChainError,
		resolver::{
			DeployedContractIdentifierResolverService,
			DeployedContractIdentifierResolverServiceTrait,
		},
		ErrorCode, ServiceError,
	},
};
use uuid::Uuid;

use crate::integration::mocks::{
	create_test_project, create_test_request, create_test_transaction_info,
	MockContractDeploymentRequestRepository, MockEthCommonService,
};

#[tokio::test]
async fn test_resolve_by_id_with_stored_address() {
	let project = create_test_project(None);
	let address = ContractAddress::parse("0xcafe").unwrap();
	let request = create_test_request(project.id, "alias", Some(address));

	let mut repository = MockContractDeploymentRequestRepository::new();
	let returned = request.clone();
	repository
		.expect_get_by_id()
		.with(eq(request.id))
		.times(1)
		.returning(move |_| Ok(Some(returned.clone())));
	repository.expect_set_contract_address().never();

	let mut common = MockEthCommonService::new();
	common.expect_fetch_transaction_info().never();

	let service = DeployedContractIdentifierResolverService::new(repository, common);
	let result = service
		.resolve_contract_id_and_address(&DeployedContractIdentifier::Id(request.id), &project)
		.await
		.unwrap();

	assert_eq!(result, (Some(request.id), address));
}

#[tokio::test]
async fn test_resolve_by_alias_with_stored_address() {
	let project = create_test_project(None);
	let address = ContractAddress::parse("0xcafe").unwrap();
	let request = create_test_request(project.id, "my-alias", Some(address));

	let mut repository = MockContractDeploymentRequestRepository::new();
	let returned = request.clone();
	let project_id = project.id;
	repository
		.expect_get_by_alias_and_project_id()
		.withf(move |alias, id| alias == "my-alias" && *id == project_id)
		.times(1)
		.returning(move |_, _| Ok(Some(returned.clone())));

	let mut common = MockEthCommonService::new();
	common.expect_fetch_transaction_info().never();

	let service = DeployedContractIdentifierResolverService::new(repository, common);
	let result = service
		.resolve_contract_id_and_address(
			&DeployedContractIdentifier::Alias("my-alias".to_string()),
			&project,
		)
		.await
		.unwrap();

	assert_eq!(result, (Some(request.id), address));
}

#[tokio::test]
async fn test_resolve_by_address_performs_no_lookups() {
	let project = create_test_project(None);
	let address = ContractAddress::parse("0xcafe").unwrap();

	let mut repository = MockContractDeploymentRequestRepository::new();
	repository.expect_get_by_id().never();
	repository.expect_get_by_alias_and_project_id().never();
	let mut common = MockEthCommonService::new();
	common.expect_fetch_transaction_info().never();

	let service = DeployedContractIdentifierResolverService::new(repository, common);
	let result = service
		.resolve_contract_id_and_address(&DeployedContractIdentifier::Address(address), &project)
		.await
		.unwrap();

	assert_eq!(result, (None, address));
}

#[tokio::test]
async fn test_resolve_derives_address_from_chain() {
	let project = create_test_project(Some("http://localhost:8545"));
	let deployed = ContractAddress::parse("0xbeef").unwrap();
	let request = create_test_request(project.id, "alias", None);

	let mut repository = MockContractDeploymentRequestRepository::new();
	let returned = request.clone();
	repository
		.expect_get_by_id()
		.returning(move |_| Ok(Some(returned.clone())));
	repository
		.expect_set_contract_address()
		.with(eq(request.id), eq(deployed))
		.times(1)
		.returning(|_, _| Ok(true));

	let mut common = MockEthCommonService::new();
	let chain_id = request.chain_id;
	common
		.expect_fetch_transaction_info()
		.withf(move |tx_hash, id, url, events| {
			tx_hash.as_ref() == Some(&TransactionHash::new("0xabc"))
				&& *id == chain_id
				&& url.as_deref() == Some("http://localhost:8545")
				&& events.is_empty()
		})
		.times(1)
		.returning(move |_, _, _, _| Ok(Some(create_test_transaction_info(Some(deployed)))));

	let service = DeployedContractIdentifierResolverService::new(repository, common);
	let result = service
		.resolve_contract_id_and_address(&DeployedContractIdentifier::Id(request.id), &project)
		.await
		.unwrap();

	assert_eq!(result, (Some(request.id), deployed));
}

#[tokio::test]
async fn test_resolve_fails_when_transaction_not_found() {
	let project = create_test_project(None);
	let request = create_test_request(project.id, "alias", None);

	let mut repository = MockContractDeploymentRequestRepository::new();
	let returned = request.clone();
	repository
		.expect_get_by_alias_and_project_id()
		.returning(move |_, _| Ok(Some(returned.clone())));
	repository.expect_set_contract_address().never();

	let mut common = MockEthCommonService::new();
	common
		.expect_fetch_transaction_info()
		.times(1)
		.returning(|_, _, _, _| Ok(None));

	let service = DeployedContractIdentifierResolverService::new(repository, common);
	let error = service
		.resolve_contract_id_and_address(
			&DeployedContractIdentifier::Alias("alias".to_string()),
			&project,
		)
		.await
		.unwrap_err();

	assert_eq!(error.error_code(), ErrorCode::ContractNotDeployed);
	assert_eq!(
		error.message(),
		format!(
			"Contract with ID: {} and alias: alias is not yet deployed",
			request.id
		)
	);
}

#[tokio::test]
async fn test_resolve_fails_when_transaction_has_no_deployed_address() {
	let project = create_test_project(None);
	let request = create_test_request(project.id, "alias", None);

	let mut repository = MockContractDeploymentRequestRepository::new();
	let returned = request.clone();
	repository
		.expect_get_by_id()
		.returning(move |_| Ok(Some(returned.clone())));
	repository.expect_set_contract_address().never();

	let mut common = MockEthCommonService::new();
	common
		.expect_fetch_transaction_info()
		.returning(|_, _, _, _| Ok(Some(create_test_transaction_info(None))));

	let service = DeployedContractIdentifierResolverService::new(repository, common);
	let result = service
		.resolve_contract_id_and_address(&DeployedContractIdentifier::Id(request.id), &project)
		.await;

	assert!(matches!(result, Err(ServiceError::ContractNotYetDeployed(_))));
}

#[tokio::test]
async fn test_resolve_unknown_id_and_alias() {
	let project = create_test_project(None);

	let mut repository = MockContractDeploymentRequestRepository::new();
	repository.expect_get_by_id().returning(|_| Ok(None));
	repository
		.expect_get_by_alias_and_project_id()
		.returning(|_, _| Ok(None));
	let mut common = MockEthCommonService::new();
	common.expect_fetch_transaction_info().never();

	let service = DeployedContractIdentifierResolverService::new(repository, common);

	let id = ContractDeploymentRequestId(Uuid::new_v4());
	let error = service
		.resolve_contract_id_and_address(&DeployedContractIdentifier::Id(id), &project)
		.await
		.unwrap_err();
	assert_eq!(error.error_code(), ErrorCode::ResourceNotFound);
	assert_eq!(
		error.message(),
		format!("Deployed contract not found for ID: {}", id)
	);

	let error = service
		.resolve_contract_id_and_address(
			&DeployedContractIdentifier::Alias("unknown".to_string()),
			&project,
		)
		.await
		.unwrap_err();
	assert_eq!(error.error_code(), ErrorCode::ResourceNotFound);
	assert_eq!(error.message(), "Deployed contract not found for alias: unknown");
}

#[tokio::test]
async fn test_resolve_propagates_collaborator_errors() {
	let project = create_test_project(None);
	let request = create_test_request(project.id, "alias", None);

	let mut repository = MockContractDeploymentRequestRepository::new();
	let returned = request.clone();
	repository
		.expect_get_by_id()
		.with(eq(request.id))
		.returning(move |_| Ok(Some(returned.clone())));
	repository
		.expect_get_by_alias_and_project_id()
		.returning(|_, _| Err(RepositoryError::internal_error("database down", None, None)));

	let mut common = MockEthCommonService::new();
	common.expect_fetch_transaction_info().returning(|_, _, _, _| {
		Err(ServiceError::from(BlockChainError::connection_error(
			"node down",
			None,
			None,
		)))
	});

	let service = DeployedContractIdentifierResolverService::new(repository, common);

	let result = service
		.resolve_contract_id_and_address(&DeployedContractIdentifier::Id(request.id), &project)
		.await;
	assert!(matches!(
		result,
		Err(ServiceError::Blockchain(BlockChainError::ConnectionError(_)))
	));

	let result = service
		.resolve_contract_id_and_address(
			&DeployedContractIdentifier::Alias("alias".to_string()),
			&project,
		)
		.await;
	assert!(matches!(
		result,
		Err(ServiceError::Repository(RepositoryError::InternalError(_)))
	));
}

#[tokio::test]
async fn test_resolve_ignores_write_back_failure() {
	let project = create_test_project(None);
	let deployed = ContractAddress::parse("0xbeef").unwrap();
	let request = create_test_request(project.id, "alias", None);

	let mut repository = MockContractDeploymentRequestRepository::new();
	let returned = request.clone();
	repository
		.expect_get_by_id()
		.returning(move |_| Ok(Some(returned.clone())));
	repository
		.expect_set_contract_address()
		.times(1)
		.returning(|_, _| Err(RepositoryError::internal_error("read only", None, None)));

	let mut common = MockEthCommonService::new();
	common
		.expect_fetch_transaction_info()
		.returning(move |_, _, _, _| Ok(Some(create_test_transaction_info(Some(deployed)))));

	let service = DeployedContractIdentifierResolverService::new(repository, common);
	let result = service
		.resolve_contract_id_and_address(&DeployedContractIdentifier::Id(request.id), &project)
		.await
		.unwrap();

	assert_eq!(result, (Some(request.id), deployed));
}
