use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub network: NetworkConfig,
	pub signer: SignerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub default: String,
	pub scroll_rpc: String,
	pub scroll_sepolia_rpc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignerConfig {
	pub method: Option<SignerMethod>,
	pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignerMethod {
	Browser,
	Ledger,
	Passkey,
	Walletconnect,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			network: NetworkConfig {
				default: "scroll".into(),
				scroll_rpc: "https://rpc.scroll.io".into(),
				scroll_sepolia_rpc: "https://sepolia-rpc.scroll.io".into(),
			},
			signer: SignerConfig {
				method: None,
				address: None,
			},
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.eas-attest/).
	pub fn dir() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".eas-attest")
	}

	/// Path to the config file.
	pub fn path() -> PathBuf {
		Self::dir().join("config.toml")
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path();
		if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Persist the current config to disk, creating the directory if needed.
	pub fn save(&self) -> anyhow::Result<()> {
		let path = Self::path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Return the RPC URL for the given network name.
	pub fn rpc_url(&self, network: &str) -> &str {
		match network {
			"scroll-sepolia" => &self.network.scroll_sepolia_rpc,
			_ => &self.network.scroll_rpc,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_sensible() {
		let c = Config::default();
		assert_eq!(c.network.default, "scroll");
		assert_eq!(c.network.scroll_rpc, "https://rpc.scroll.io");
		assert_eq!(c.network.scroll_sepolia_rpc, "https://sepolia-rpc.scroll.io");
		assert!(c.signer.method.is_none());
		assert!(c.signer.address.is_none());
	}

	#[test]
	fn toml_roundtrip() {
		let mut c = Config::default();
		c.signer.method = Some(SignerMethod::Browser);
		c.signer.address = Some("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".into());

		let serialized = toml::to_string_pretty(&c).unwrap();
		let parsed: Config = toml::from_str(&serialized).unwrap();

		assert_eq!(parsed.signer.method, Some(SignerMethod::Browser));
		assert_eq!(
			parsed.signer.address.as_deref(),
			Some("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045")
		);
	}

	#[test]
	fn rpc_url_selection() {
		let c = Config::default();
		assert_eq!(c.rpc_url("scroll"), "https://rpc.scroll.io");
		assert_eq!(c.rpc_url("scroll-sepolia"), "https://sepolia-rpc.scroll.io");
		// Unknown network falls back to mainnet.
		assert_eq!(c.rpc_url("devnet"), "https://rpc.scroll.io");
	}
}
