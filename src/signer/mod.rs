pub mod browser;

use alloy_primitives::{Address, Bytes, B256, U256};
use anyhow::Result;
use serde::Serialize;

use crate::cli::SignerArg;

/// An unsigned transaction handed to the external signer. The wallet
/// fills in gas and nonce, signs, and broadcasts it.
#[derive(Debug, Clone, Serialize)]
pub struct TxRequest {
	pub from: Address,
	pub to: Address,
	pub data: Bytes,
	pub value: U256,
	pub chain_id: u64,
}

/// A signer that can authorize transactions without holding private
/// keys locally. Every implementation delegates to an external wallet
/// (browser, Ledger, passkey, WalletConnect).
#[async_trait::async_trait]
pub trait Signer: Send + Sync {
	/// The account address this signer controls.
	fn address(&self) -> Address;

	/// Present an unsigned transaction to the external wallet for
	/// approval; the wallet broadcasts it and reports the tx hash.
	async fn send_transaction(&self, tx: &TxRequest) -> Result<B256>;
}

/// Build a signer from the method chosen on the CLI or in config.
pub fn from_method(method: &SignerArg, address: Address) -> Result<Box<dyn Signer>> {
	match method {
		SignerArg::Browser => Ok(Box::new(browser::BrowserSigner::new(address))),
		other => anyhow::bail!("{other:?} signer is not yet implemented"),
	}
}
