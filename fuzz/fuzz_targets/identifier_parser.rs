#![no_main]

use deployed_contract_resolver::models::{
	ContractAddress, DeployedContractIdentifier, DeployedContractIdentifierRequestBody,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(input) = std::str::from_utf8(data) {
		if let Ok(address) = ContractAddress::parse(input) {
			// Rendering must parse back to the same address
			assert_eq!(ContractAddress::parse(&address.to_string()), Ok(address));
		}

		if let Ok(body) = serde_json::from_str::<DeployedContractIdentifierRequestBody>(input) {
			let _ = DeployedContractIdentifier::try_from(body);
		}
	}
});
