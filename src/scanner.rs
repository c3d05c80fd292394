use alloy_primitives::Address;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One-shot source of scanned QR strings. Each activation yields at
/// most one raw value; the decoding mechanism behind it is opaque.
#[async_trait::async_trait]
pub trait ScanSource: Send {
	async fn next_scan(&mut self) -> Result<Option<String>>;
}

/// A scan value already in hand (pasted on the command line).
pub struct PastedScan {
	value: Option<String>,
}

impl PastedScan {
	pub fn new(value: String) -> Self {
		Self { value: Some(value) }
	}
}

#[async_trait::async_trait]
impl ScanSource for PastedScan {
	async fn next_scan(&mut self) -> Result<Option<String>> {
		Ok(self.value.take())
	}
}

/// Reads one scanned value from stdin, for wedge scanners that type
/// the decoded payload followed by a newline.
pub struct StdinScan;

#[async_trait::async_trait]
impl ScanSource for StdinScan {
	async fn next_scan(&mut self) -> Result<Option<String>> {
		println!("Scan a QR code (or paste its payload) and press enter:");

		let mut line = String::new();
		let mut reader = BufReader::new(tokio::io::stdin());
		if reader.read_line(&mut line).await? == 0 {
			return Ok(None);
		}

		let trimmed = line.trim();
		if trimmed.is_empty() {
			Ok(None)
		} else {
			Ok(Some(trimmed.to_owned()))
		}
	}
}

// -- Receive-side QR --

/// EIP-681-style payload other attesters scan to pick up this address:
/// `ethereum:ADDRESS@CHAIN_ID`.
pub fn receive_payload(address: Address, chain_id: u64) -> String {
	format!("ethereum:{}@{chain_id}", address.to_checksum(None))
}

/// Render a payload as a terminal QR code.
pub fn render_qr(data: &str) -> Result<String> {
	let code = qrcode::QrCode::new(data)?;
	Ok(code
		.render::<char>()
		.quiet_zone(false)
		.module_dimensions(2, 1)
		.build())
}
