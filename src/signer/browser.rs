use std::collections::HashMap;

use alloy_primitives::{Address, B256};
use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use super::{Signer, TxRequest};

/// Signs transactions by opening the user's browser to a local page
/// that talks to the injected wallet (MetaMask etc.) and posts the
/// result back to a temporary localhost callback server.
pub struct BrowserSigner {
	address: Address,
}

impl BrowserSigner {
	pub fn new(address: Address) -> Self {
		Self { address }
	}
}

#[async_trait::async_trait]
impl Signer for BrowserSigner {
	fn address(&self) -> Address {
		self.address
	}

	async fn send_transaction(&self, tx: &TxRequest) -> Result<B256> {
		let token = hex::encode(rand::random::<[u8; 16]>());
		let tx_json = serde_json::to_string(&serde_json::json!({
			"from": tx.from,
			"to": tx.to,
			"data": tx.data,
			"value": tx.value,
		}))?;

		let page = SEND_PAGE
			.replace("{{token}}", &token)
			.replace("{{chain_id_hex}}", &format!("0x{:x}", tx.chain_id))
			.replace("{{tx}}", &tx_json);

		let value = serve_one_result(page, token).await?;
		value
			.parse()
			.map_err(|e| anyhow!("wallet returned an invalid tx hash ({value}): {e}"))
	}
}

/// Ask the browser wallet for its active account and return it.
pub async fn connect_wallet(chain_id: u64) -> Result<Address> {
	let token = hex::encode(rand::random::<[u8; 16]>());
	let page = CONNECT_PAGE
		.replace("{{token}}", &token)
		.replace("{{chain_id_hex}}", &format!("0x{chain_id:x}"));

	let value = serve_one_result(page, token).await?;
	crate::address::parse_address(&value)
		.ok_or_else(|| anyhow!("wallet returned an invalid address: {value}"))
}

// -- Localhost callback server --

/// Serve `page` on an ephemeral localhost port, open it in the
/// browser, and wait for exactly one `/result` callback carrying the
/// matching one-shot token.
async fn serve_one_result(page: String, token: String) -> Result<String> {
	let listener = TcpListener::bind("127.0.0.1:0").await?;
	let url = format!("http://{}/", listener.local_addr()?);

	println!("Opening {url} in your browser...");
	if opener::open_browser(&url).is_err() {
		println!("Could not launch a browser; open the URL manually.");
	}

	loop {
		let (mut stream, _) = listener.accept().await?;
		let path = read_request_path(&mut stream).await?;

		if let Some(query) = path.strip_prefix("/result?") {
			let params = parse_query(query);
			if params.get("token").map(String::as_str) != Some(token.as_str()) {
				respond(&mut stream, "403 Forbidden", "text/plain", "bad token").await?;
				continue;
			}

			let value = params.get("value").cloned().unwrap_or_default();
			respond(
				&mut stream,
				"200 OK",
				"text/plain",
				"Done. You can close this tab.",
			)
			.await?;

			if value.is_empty() {
				anyhow::bail!("the wallet request was rejected in the browser");
			}
			return Ok(value);
		}

		respond(&mut stream, "200 OK", "text/html", &page).await?;
	}
}

/// Read the request line and drain the headers, returning the path.
async fn read_request_path(stream: &mut TcpStream) -> Result<String> {
	let mut reader = BufReader::new(stream);

	let mut request_line = String::new();
	reader.read_line(&mut request_line).await?;
	let path = request_line
		.split_whitespace()
		.nth(1)
		.unwrap_or("/")
		.to_owned();

	loop {
		let mut line = String::new();
		if reader.read_line(&mut line).await? == 0 || line == "\r\n" || line == "\n" {
			break;
		}
	}

	Ok(path)
}

async fn respond(
	stream: &mut TcpStream,
	status: &str,
	content_type: &str,
	body: &str,
) -> Result<()> {
	let response = format!(
		"HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
		body.len()
	);
	stream.write_all(response.as_bytes()).await?;
	Ok(())
}

/// Values are hex strings, so no percent-decoding is needed here.
fn parse_query(query: &str) -> HashMap<String, String> {
	query
		.split('&')
		.filter_map(|pair| {
			let (k, v) = pair.split_once('=')?;
			Some((k.to_owned(), v.to_owned()))
		})
		.collect()
}

// -- Wallet pages --

const CONNECT_PAGE: &str = r#"<!doctype html>
<html>
<body>
<h3>eas-attest: connect wallet</h3>
<p id="status">Waiting for the wallet...</p>
<script>
(async () => {
	const status = document.getElementById("status");
	if (!window.ethereum) {
		status.textContent = "No injected wallet found.";
		await fetch("/result?token={{token}}&value=");
		return;
	}
	try {
		const accounts = await window.ethereum.request({ method: "eth_requestAccounts" });
		await window.ethereum.request({
			method: "wallet_switchEthereumChain",
			params: [{ chainId: "{{chain_id_hex}}" }],
		});
		await fetch(`/result?token={{token}}&value=${accounts[0]}`);
		status.textContent = `Connected: ${accounts[0]}. You can close this tab.`;
	} catch (err) {
		await fetch("/result?token={{token}}&value=");
		status.textContent = `Rejected: ${err.message}`;
	}
})();
</script>
</body>
</html>
"#;

const SEND_PAGE: &str = r#"<!doctype html>
<html>
<body>
<h3>eas-attest: approve transaction</h3>
<p id="status">Waiting for the wallet...</p>
<script>
(async () => {
	const status = document.getElementById("status");
	if (!window.ethereum) {
		status.textContent = "No injected wallet found.";
		await fetch("/result?token={{token}}&value=");
		return;
	}
	try {
		await window.ethereum.request({
			method: "wallet_switchEthereumChain",
			params: [{ chainId: "{{chain_id_hex}}" }],
		});
		const tx = {{tx}};
		const hash = await window.ethereum.request({
			method: "eth_sendTransaction",
			params: [tx],
		});
		await fetch(`/result?token={{token}}&value=${hash}`);
		status.textContent = `Submitted: ${hash}. You can close this tab.`;
	} catch (err) {
		await fetch("/result?token={{token}}&value=");
		status.textContent = `Rejected: ${err.message}`;
	}
})();
</script>
</body>
</html>
"#;
