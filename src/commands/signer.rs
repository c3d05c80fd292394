use anyhow::Result;

use crate::cli::{Cli, SignerArg, SignerCommand};
use crate::config::{Config, SignerMethod};
use crate::contracts::CONTRACTS;
use crate::signer::browser;

pub async fn run(cli: &Cli, cmd: &SignerCommand) -> Result<()> {
	match cmd {
		SignerCommand::Set { method } => set_method(method),
		SignerCommand::Connect => connect(cli).await,
		SignerCommand::Status => show_status(),
	}
}

fn set_method(method: &SignerArg) -> Result<()> {
	let sm = match method {
		SignerArg::Browser => SignerMethod::Browser,
		SignerArg::Ledger => SignerMethod::Ledger,
		SignerArg::Passkey => SignerMethod::Passkey,
		SignerArg::Walletconnect => SignerMethod::Walletconnect,
	};
	let label = format!("{sm:?}").to_lowercase();

	let mut config = Config::load()?;
	config.signer.method = Some(sm);
	config.save()?;
	println!("Signer method set to: {label}");
	Ok(())
}

async fn connect(cli: &Cli) -> Result<()> {
	let config = Config::load()?;
	let method = config.signer.method.as_ref().ok_or_else(|| {
		anyhow::anyhow!("No signer method set. Run: eas-attest signer set --method <method>")
	})?;

	let chain_id = CONTRACTS.for_network(cli.network.as_str()).chain_id;

	let address = match method {
		SignerMethod::Browser => {
			println!("Opening browser to connect wallet...");
			browser::connect_wallet(chain_id).await?
		}
		other => anyhow::bail!("{other:?} connect is not yet implemented"),
	};

	let checksummed = address.to_checksum(None);
	println!("Connected: {checksummed}");

	let mut config = config;
	config.signer.address = Some(checksummed);
	config.save()?;
	println!("Address saved to config.");

	Ok(())
}

fn show_status() -> Result<()> {
	let config = Config::load()?;

	let method = config
		.signer
		.method
		.as_ref()
		.map(|m| format!("{m:?}").to_lowercase())
		.unwrap_or_else(|| "not set".into());

	let address = config
		.signer
		.address
		.as_deref()
		.unwrap_or("not connected");

	println!("Signer");
	println!("  Method:  {method}");
	println!("  Address: {address}");
	println!("  Network: {}", config.network.default);
	println!("  RPC:     {}", config.rpc_url(&config.network.default));
	Ok(())
}
