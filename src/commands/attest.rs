use alloy_primitives::{Address, B256};
use anyhow::Result;

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::commands::{resolve_rpc, resolve_signer};
use crate::config::Config;
use crate::contracts::CONTRACTS;
use crate::eas::{Attestor, EasClient};
use crate::rpc::EthRpcClient;
use crate::scanner::{PastedScan, ScanSource, StdinScan};
use crate::workflow::{ScanOutcome, Workflow};

/// Full attestation pipeline: pick the event, acquire a receiver
/// (manual entry or scan), and drive the submission through the
/// browser wallet.
pub async fn run(
	cli: &Cli,
	event_index: usize,
	to: Option<String>,
	scan: Option<String>,
	scan_stdin: bool,
) -> Result<()> {
	let config = Config::load()?;
	let network = cli.network.as_str();
	let contracts = CONTRACTS.for_network(network);

	let catalog = Catalog::load()?;
	let schema_uid: B256 = contracts.schema_uid.parse()?;
	let mut workflow = Workflow::new(catalog, schema_uid)?;

	if !workflow.select_event(event_index) {
		anyhow::bail!("no event #{event_index} in the catalog (run: eas-attest event list)");
	}

	// 1. Acquire the receiver address.
	if let Some(to) = to {
		if !workflow.set_receiver(&to) {
			anyhow::bail!("invalid receiver address: {to}");
		}
	} else {
		let mut source: Box<dyn ScanSource> = match scan {
			Some(raw) => Box::new(PastedScan::new(raw)),
			None if scan_stdin => Box::new(StdinScan),
			None => anyhow::bail!("pass --to <address>, --scan <payload>, or --scan-stdin"),
		};

		workflow.toggle_scanner();
		let raw = source
			.next_scan()
			.await?
			.ok_or_else(|| anyhow::anyhow!("no scan value provided"))?;

		match workflow.on_scan_result(&raw) {
			ScanOutcome::Scanned(_) => {
				println!("Address scanned!");
				println!("The address has been verified; you can make the attestation.");
			}
			ScanOutcome::Extracted(_) => {}
			ScanOutcome::Rejected => {
				anyhow::bail!("scanned value is not a valid address: {raw}");
			}
		}
	}

	println!("Event:    {}", workflow.selected_event().name);
	println!("Receiver: {}", workflow.receiver().to_checksum(None));

	// 2. Acquire the signer. Failure here is reported, not swallowed:
	//    the workflow turns an absent signer into an explicit error.
	let rpc = EthRpcClient::new(&resolve_rpc(cli, &config));
	let eas_contract: Address = contracts.eas.parse()?;

	let client = match resolve_signer(cli, &config) {
		Ok(signer) => Some(EasClient::new(&rpc, eas_contract, contracts.chain_id, signer)),
		Err(e) => {
			println!("Signer unavailable: {e:#}");
			None
		}
	};

	// 3. Submit and confirm.
	let uid = workflow
		.submit(client.as_ref().map(|c| c as &dyn Attestor))
		.await?;

	println!("Attestation confirmed!");
	println!("  UID: {uid}");

	Ok(())
}
