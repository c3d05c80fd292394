pub mod attest;
pub mod event;
pub mod qr;
pub mod signer;
pub mod tx;

use alloy_primitives::Address;
use anyhow::Result;

use crate::cli::{Cli, SignerArg};
use crate::config::Config;

/// Resolve the RPC URL from CLI flag or config.
pub fn resolve_rpc(cli: &Cli, config: &Config) -> String {
	cli.rpc_url
		.clone()
		.unwrap_or_else(|| config.rpc_url(cli.network.as_str()).to_owned())
}

/// Resolve the attester address from CLI flags + config.
pub fn resolve_address(cli: &Cli, config: &Config) -> Result<Address> {
	let candidate = cli
		.address
		.as_deref()
		.or(config.signer.address.as_deref())
		.ok_or_else(|| {
			anyhow::anyhow!("No address configured. Run: eas-attest signer connect")
		})?;

	crate::address::parse_address(candidate)
		.ok_or_else(|| anyhow::anyhow!("configured address is invalid: {candidate}"))
}

/// Build a signer from CLI flags + config, failing if neither is set.
pub fn resolve_signer(cli: &Cli, config: &Config) -> Result<Box<dyn crate::signer::Signer>> {
	let method: SignerArg = match &cli.signer {
		Some(m) => m.clone(),
		None => match &config.signer.method {
			Some(crate::config::SignerMethod::Browser) => SignerArg::Browser,
			Some(crate::config::SignerMethod::Ledger) => SignerArg::Ledger,
			Some(crate::config::SignerMethod::Passkey) => SignerArg::Passkey,
			Some(crate::config::SignerMethod::Walletconnect) => SignerArg::Walletconnect,
			None => anyhow::bail!(
				"No signer configured. Run: eas-attest signer set --method <method>"
			),
		},
	};

	let address = resolve_address(cli, config)?;
	crate::signer::from_method(&method, address)
}
