use anyhow::Result;
use serde_json::Value;

use crate::cli::{Cli, TxCommand};
use crate::commands::resolve_rpc;
use crate::config::Config;
use crate::rpc::{parse_quantity, EthRpcClient};

pub async fn run(cli: &Cli, cmd: &TxCommand) -> Result<()> {
	let config = Config::load()?;
	let rpc = EthRpcClient::new(&resolve_rpc(cli, &config));

	match cmd {
		TxCommand::Status { tx_hash } => {
			let Some(tx) = rpc.get_transaction(tx_hash).await? else {
				println!("Transaction not found: {tx_hash}");
				return Ok(());
			};

			println!("Transaction: {tx_hash}");

			match tx.get("blockNumber") {
				Some(Value::String(_)) => {
					let block = parse_quantity(&tx["blockNumber"])?;
					println!("Status:      confirmed in block {block}");

					let hash = tx_hash.parse()?;
					if let Some(receipt) = rpc.get_transaction_receipt(hash).await? {
						let status = receipt
							.get("status")
							.and_then(Value::as_str)
							.unwrap_or("unknown");
						let outcome = match status {
							"0x1" => "success",
							"0x0" => "reverted",
							other => other,
						};
						println!("Outcome:     {outcome}");
					}
				}
				_ => println!("Status:      pending"),
			}

			Ok(())
		}
	}
}
