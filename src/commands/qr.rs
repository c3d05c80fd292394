use anyhow::Result;

use crate::cli::Cli;
use crate::commands::resolve_address;
use crate::config::Config;
use crate::contracts::CONTRACTS;
use crate::scanner;

/// Render the EIP-681 receive payload for this account as a terminal
/// QR code, ready for an attester to scan.
pub fn run(cli: &Cli, address_override: Option<&str>) -> Result<()> {
	let config = Config::load()?;
	let chain_id = CONTRACTS.for_network(cli.network.as_str()).chain_id;

	let address = match address_override {
		Some(candidate) => crate::address::parse_address(candidate)
			.ok_or_else(|| anyhow::anyhow!("invalid address: {candidate}"))?,
		None => resolve_address(cli, &config)?,
	};

	let payload = scanner::receive_payload(address, chain_id);
	println!("{}", scanner::render_qr(&payload)?);
	println!();
	println!("Payload: {payload}");

	Ok(())
}
