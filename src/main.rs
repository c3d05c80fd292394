use anyhow::Result;
use clap::Parser;

use eas_attest_cli::cli::{Cli, Command};
use eas_attest_cli::commands;

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	match &cli.command {
		Command::Signer { command } => commands::signer::run(&cli, command).await,
		Command::Event { command } => commands::event::run(command),
		Command::Attest {
			event,
			to,
			scan,
			scan_stdin,
		} => commands::attest::run(&cli, *event, to.clone(), scan.clone(), *scan_stdin).await,
		Command::Qr { address } => commands::qr::run(&cli, address.as_deref()),
		Command::Tx { command } => commands::tx::run(&cli, command).await,
	}
}
