/// EAS deployment data for one network.
pub struct NetworkContracts {
	/// Numeric chain ID presented to the wallet.
	pub chain_id: u64,
	/// EAS v1 contract address (0x-prefixed, 42 chars).
	pub eas: &'static str,
	/// UID of the registered event-attendance schema
	/// (`uint256 id, string name, string location, string startDate, string endDate`).
	pub schema_uid: &'static str,
}

/// All known EAS deployments, keyed by network.
pub struct Contracts {
	mainnet: NetworkContracts,
	testnet: NetworkContracts,
}

impl Contracts {
	pub fn for_network(&self, network: &str) -> &NetworkContracts {
		match network {
			"scroll-sepolia" => &self.testnet,
			_ => &self.mainnet,
		}
	}
}

/// Global registry of deployed contract addresses.
pub static CONTRACTS: Contracts = Contracts {
	mainnet: NetworkContracts {
		chain_id: 534352,
		eas: "0xC47300428b6AD2c7D03BB76D05A176058b47E6B0",
		schema_uid: "0xd465df4ee00a2176cff40e5e23226afc3acdd7871f3fa7a4b1c2c28ade7a30cf",
	},
	testnet: NetworkContracts {
		chain_id: 534351,
		eas: "0xaEF4103A04090071165F78D45D83A0C0782c2B2a",
		schema_uid: "0xd465df4ee00a2176cff40e5e23226afc3acdd7871f3fa7a4b1c2c28ade7a30cf",
	},
};
