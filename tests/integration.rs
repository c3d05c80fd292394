//! Integration tests that hit the public Scroll RPC.
//!
//! These are marked `#[ignore]` by default because they require network
//! access. Run them explicitly with:
//!
//!   cargo test --test integration -- --ignored

use eas_attest_cli::contracts::CONTRACTS;
use eas_attest_cli::rpc::EthRpcClient;

const SCROLL_RPC: &str = "https://rpc.scroll.io";

#[tokio::test]
#[ignore]
async fn chain_id_matches_the_registry() {
	let rpc = EthRpcClient::new(SCROLL_RPC);
	let chain_id = rpc.chain_id().await.expect("failed to fetch chain id");
	assert_eq!(chain_id, CONTRACTS.for_network("scroll").chain_id);
}

#[tokio::test]
#[ignore]
async fn eas_contract_is_deployed() {
	let rpc = EthRpcClient::new(SCROLL_RPC);
	let contracts = CONTRACTS.for_network("scroll");

	let code = rpc
		.get_code(contracts.eas.parse().expect("registry address is valid"))
		.await
		.expect("eth_getCode failed");

	assert!(
		code.len() > 2,
		"EAS contract {} should have deployed bytecode",
		contracts.eas
	);
}

#[tokio::test]
#[ignore]
async fn unknown_transaction_lookup_returns_none() {
	let rpc = EthRpcClient::new(SCROLL_RPC);

	let result = rpc
		.get_transaction("0x1111111111111111111111111111111111111111111111111111111111111111")
		.await
		.expect("RPC call failed");

	assert!(result.is_none(), "made-up tx hash should not exist");
}
