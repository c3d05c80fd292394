use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::{sol, SolCall, SolEvent, SolValue};
use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::catalog::Event;
use crate::rpc::EthRpcClient;
use crate::signer::{Signer, TxRequest};

sol! {
	/// Inner payload of an EAS v1 attestation request.
	#[derive(Debug, PartialEq)]
	struct AttestationRequestData {
		address recipient;
		uint64 expirationTime;
		bool revocable;
		bytes32 refUID;
		bytes data;
		uint256 value;
	}

	/// Full EAS v1 attestation request: schema UID plus payload.
	#[derive(Debug, PartialEq)]
	struct AttestationRequest {
		bytes32 schema;
		AttestationRequestData data;
	}

	event Attested(
		address indexed recipient,
		address indexed attester,
		bytes32 uid,
		bytes32 indexed schemaUID
	);

	function attest(AttestationRequest request) external payable returns (bytes32);
}

/// How long to poll for the attestation receipt before giving up.
const CONFIRMATION_TIMEOUT_SECS: i64 = 180;

// -- Schema encoding --

/// ABI-encode the five schema fields of an event:
/// `uint256 id, string name, string location, string startDate, string endDate`.
pub fn encode_event_data(event: &Event) -> Vec<u8> {
	(
		U256::from(event.id),
		event.name.clone(),
		event.location.clone(),
		event.start_date.clone(),
		event.end_date.clone(),
	)
		.abi_encode_params()
}

/// Compose a fresh attestation request for one event and recipient.
/// Expiration is always zero (never expires) and the schema is revocable.
pub fn build_request(schema_uid: B256, recipient: Address, event: &Event) -> AttestationRequest {
	AttestationRequest {
		schema: schema_uid,
		data: AttestationRequestData {
			recipient,
			expirationTime: 0,
			revocable: true,
			refUID: B256::ZERO,
			data: encode_event_data(event).into(),
			value: U256::ZERO,
		},
	}
}

// -- Submission --

/// Anything that can submit an attestation request and wait out its
/// confirmation, yielding the new attestation UID.
#[async_trait::async_trait]
pub trait Attestor: Send + Sync {
	async fn attest(&self, request: AttestationRequest) -> Result<B256>;
}

/// Submits attestations through an external wallet signer and the EAS
/// contract, confirming them against the chain's JSON-RPC endpoint.
pub struct EasClient<'a> {
	rpc: &'a EthRpcClient,
	contract: Address,
	chain_id: u64,
	signer: Box<dyn Signer>,
}

impl<'a> EasClient<'a> {
	pub fn new(
		rpc: &'a EthRpcClient,
		contract: Address,
		chain_id: u64,
		signer: Box<dyn Signer>,
	) -> Self {
		Self {
			rpc,
			contract,
			chain_id,
			signer,
		}
	}
}

#[async_trait::async_trait]
impl Attestor for EasClient<'_> {
	async fn attest(&self, request: AttestationRequest) -> Result<B256> {
		let calldata = attestCall { request }.abi_encode();
		let tx = TxRequest {
			from: self.signer.address(),
			to: self.contract,
			data: calldata.into(),
			value: U256::ZERO,
			chain_id: self.chain_id,
		};

		println!("Waiting for wallet approval...");
		let tx_hash = self.signer.send_transaction(&tx).await?;
		println!("Submitted: {tx_hash}");

		println!("Waiting for confirmation...");
		let receipt = self
			.rpc
			.wait_for_receipt(tx_hash, CONFIRMATION_TIMEOUT_SECS)
			.await?;

		let status = receipt.get("status").and_then(Value::as_str).unwrap_or("0x0");
		if status != "0x1" {
			anyhow::bail!("transaction {tx_hash} reverted");
		}

		attested_uid_from_receipt(&receipt, self.contract)
			.ok_or_else(|| anyhow!("no Attested event in receipt for {tx_hash}"))
	}
}

/// Pull the attestation UID out of a transaction receipt: it is the
/// non-indexed data word of the EAS contract's `Attested` log.
pub fn attested_uid_from_receipt(receipt: &Value, eas: Address) -> Option<B256> {
	let logs = receipt.get("logs")?.as_array()?;

	for log in logs {
		let Some(source) = log.get("address").and_then(Value::as_str) else {
			continue;
		};
		let Ok(source) = source.parse::<Address>() else {
			continue;
		};
		if source != eas {
			continue;
		}

		let Some(topic0) = log.pointer("/topics/0").and_then(Value::as_str) else {
			continue;
		};
		let Ok(topic0) = topic0.parse::<B256>() else {
			continue;
		};
		if topic0 != Attested::SIGNATURE_HASH {
			continue;
		}

		let data = log.get("data").and_then(Value::as_str).unwrap_or("");
		let raw = hex::decode(data.strip_prefix("0x").unwrap_or(data)).ok()?;
		if raw.len() >= 32 {
			return Some(B256::from_slice(&raw[..32]));
		}
	}

	None
}
