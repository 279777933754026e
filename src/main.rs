//! Deployed contract resolver entry point.
//!
//! Loads deployment request records and a project, resolves the contract given on
//! the command line and prints the deployment request id and contract address as
//! JSON.
//!
//! The binary follows these steps:
//! 1. Loads `.env` and sets up logging
//! 2. Loads the service configuration (file and environment)
//! 3. Initializes the resolver over the given records
//! 4. Resolves the identifier within the project and prints the result

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use deployed_contract_resolver::{
	bootstrap::{initialize_services, load_project},
	models::{
		ContractDeploymentRequestId, DeployedContractIdentifier,
		DeployedContractIdentifierRequestBody, ServiceConfig,
	},
	services::resolver::DeployedContractIdentifierResolverServiceTrait,
	utils::{format_error_chain, logging::setup_logging, metrics::gather_metrics},
};
use serde_json::json;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("identifier").required(true).args(["id", "alias", "address"])))]
struct Cli {
	/// JSON file containing an array of contract deployment requests
	#[arg(long)]
	records: PathBuf,

	/// JSON file containing the project the contract belongs to
	#[arg(long)]
	project: PathBuf,

	/// Service configuration file
	#[arg(long)]
	config: Option<PathBuf>,

	/// Deployment request id
	#[arg(long)]
	id: Option<ContractDeploymentRequestId>,

	/// Deployment request alias within the project
	#[arg(long)]
	alias: Option<String>,

	/// Contract address
	#[arg(long)]
	address: Option<String>,

	/// Print Prometheus metrics after the result
	#[arg(long)]
	metrics: bool,
}

impl Cli {
	fn identifier(&self) -> Result<DeployedContractIdentifier> {
		let body = DeployedContractIdentifierRequestBody {
			deployed_contract_id: self.id,
			deployed_contract_alias: self.alias.clone(),
			contract_address: self.address.clone(),
		};
		Ok(DeployedContractIdentifier::try_from(body)?)
	}
}

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();
	setup_logging();

	if let Err(e) = run(Cli::parse()).await {
		error!("{}", format_error_chain(&e));
		std::process::exit(1);
	}
}

async fn run(cli: Cli) -> Result<()> {
	let config = ServiceConfig::load(cli.config.as_deref())
		.context("Failed to load service configuration")?;
	let project = load_project(&cli.project)
		.await
		.map_err(|e| anyhow::anyhow!(e))
		.context("Failed to load project")?;
	let (resolver, _) = initialize_services(config, &cli.records)
		.await
		.map_err(|e| anyhow::anyhow!(e))
		.context("Failed to initialize services")?;

	let identifier = cli.identifier()?;
	info!(%identifier, project_id = %project.id, "Resolving deployed contract");
	let (deployed_contract_id, contract_address) = resolver
		.resolve_contract_id_and_address(&identifier, &project)
		.await?;

	let output = json!({
		"deployed_contract_id": deployed_contract_id,
		"contract_address": contract_address,
	});
	println!("{}", serde_json::to_string_pretty(&output)?);

	if cli.metrics {
		let metrics = gather_metrics().map_err(|e| anyhow::anyhow!(e.to_string()))?;
		println!("{}", String::from_utf8_lossy(&metrics));
	}

	Ok(())
}
