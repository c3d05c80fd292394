use alloy_primitives::{Address, B256};
use anyhow::{anyhow, Result};
use serde_json::{json, Value};

/// Thin Ethereum JSON-RPC client.
///
/// Only the handful of calls this CLI needs are wrapped; everything
/// goes over plain JSON-RPC via reqwest.
pub struct EthRpcClient {
	url: String,
	http: reqwest::Client,
}

impl EthRpcClient {
	pub fn new(url: &str) -> Self {
		Self {
			url: url.to_owned(),
			http: reqwest::Client::new(),
		}
	}

	/// Run a single JSON-RPC call and unwrap its `result` field.
	pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
		let body = json!({
			"id": 1,
			"jsonrpc": "2.0",
			"method": method,
			"params": params
		});

		let resp: Value = self.http.post(&self.url).json(&body).send().await?.json().await?;

		if let Some(err) = resp.get("error") {
			if !err.is_null() {
				return Err(anyhow!("{method} RPC error: {err}"));
			}
		}

		resp.get("result")
			.cloned()
			.ok_or_else(|| anyhow!("{method} RPC response has no result"))
	}

	// -- Standard RPC helpers --

	pub async fn chain_id(&self) -> Result<u64> {
		let result = self.call("eth_chainId", json!([])).await?;
		parse_quantity(&result)
	}

	/// Deployed bytecode at an address ("0x" when nothing is deployed).
	pub async fn get_code(&self, address: Address) -> Result<String> {
		let result = self
			.call("eth_getCode", json!([address, "latest"]))
			.await?;
		result
			.as_str()
			.map(str::to_owned)
			.ok_or_else(|| anyhow!("eth_getCode returned a non-string result"))
	}

	pub async fn get_transaction(&self, tx_hash: &str) -> Result<Option<Value>> {
		let hash: B256 = tx_hash
			.parse()
			.map_err(|e| anyhow!("invalid transaction hash: {e}"))?;
		let result = self
			.call("eth_getTransactionByHash", json!([hash]))
			.await?;
		Ok(non_null(result))
	}

	pub async fn get_transaction_receipt(&self, tx_hash: B256) -> Result<Option<Value>> {
		let result = self
			.call("eth_getTransactionReceipt", json!([tx_hash]))
			.await?;
		Ok(non_null(result))
	}

	/// Poll for a transaction receipt until it lands or the deadline
	/// passes. A pending transaction must never block forever.
	pub async fn wait_for_receipt(&self, tx_hash: B256, timeout_secs: i64) -> Result<Value> {
		let deadline = chrono::Utc::now() + chrono::Duration::seconds(timeout_secs);

		loop {
			if let Some(receipt) = self.get_transaction_receipt(tx_hash).await? {
				return Ok(receipt);
			}
			if chrono::Utc::now() >= deadline {
				return Err(anyhow!(
					"timed out after {timeout_secs}s waiting for receipt of {tx_hash}"
				));
			}
			tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
		}
	}
}

// -- Private helpers --

fn non_null(value: Value) -> Option<Value> {
	if value.is_null() {
		None
	} else {
		Some(value)
	}
}

/// Parse a JSON-RPC quantity ("0x..." hex string) into a u64.
pub fn parse_quantity(value: &Value) -> Result<u64> {
	let s = value
		.as_str()
		.ok_or_else(|| anyhow!("expected a quantity string, got {value}"))?;
	let digits = s.strip_prefix("0x").unwrap_or(s);
	u64::from_str_radix(digits, 16).map_err(|e| anyhow!("invalid quantity {s}: {e}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quantities_parse_from_hex() {
		assert_eq!(parse_quantity(&json!("0x1")).unwrap(), 1);
		assert_eq!(parse_quantity(&json!("0x827f0")).unwrap(), 534512);
		assert_eq!(parse_quantity(&json!("0x82750")).unwrap(), 534352);
	}

	#[test]
	fn quantities_reject_non_strings() {
		assert!(parse_quantity(&json!(42)).is_err());
		assert!(parse_quantity(&json!("0xzz")).is_err());
		assert!(parse_quantity(&json!(null)).is_err());
	}

	#[test]
	fn null_results_map_to_none() {
		assert!(non_null(json!(null)).is_none());
		assert!(non_null(json!({"status": "0x1"})).is_some());
	}
}
