use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
	name = "eas-attest",
	about = "Keyless CLI for issuing EAS event-attendance attestations on Scroll.",
	version
)]
pub struct Cli {
	/// Network to connect to.
	#[arg(long, default_value = "scroll", global = true)]
	pub network: Network,

	/// Override RPC endpoint URL.
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	/// Override signing method.
	#[arg(long, global = true)]
	pub signer: Option<SignerArg>,

	/// Override the attester account address.
	#[arg(long, global = true)]
	pub address: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Network {
	Scroll,
	ScrollSepolia,
}

impl Network {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Scroll => "scroll",
			Self::ScrollSepolia => "scroll-sepolia",
		}
	}
}

#[derive(Debug, Clone, ValueEnum)]
pub enum SignerArg {
	Browser,
	Ledger,
	Passkey,
	Walletconnect,
}

#[derive(Subcommand)]
pub enum Command {
	/// Manage external signer configuration.
	Signer {
		#[command(subcommand)]
		command: SignerCommand,
	},

	/// Browse the event catalog.
	Event {
		#[command(subcommand)]
		command: EventCommand,
	},

	/// Issue an attendance attestation to a receiver address.
	Attest {
		/// Catalog index of the event to attest.
		event: usize,

		/// Receiver address (manual entry).
		#[arg(long, conflicts_with_all = ["scan", "scan_stdin"])]
		to: Option<String>,

		/// Raw scanned QR payload (bare address or prefix:ADDRESS@suffix).
		#[arg(long, conflicts_with = "scan_stdin")]
		scan: Option<String>,

		/// Read one scanned QR payload from stdin.
		#[arg(long)]
		scan_stdin: bool,
	},

	/// Display your receive QR code for other attesters to scan.
	Qr {
		/// Address to encode; defaults to the connected signer address.
		#[arg(long)]
		address: Option<String>,
	},

	/// Check transaction status on-chain.
	Tx {
		#[command(subcommand)]
		command: TxCommand,
	},
}

// -- Signer subcommands --

#[derive(Subcommand)]
pub enum SignerCommand {
	/// Set the default signing method.
	Set {
		/// Signing method to use.
		#[arg(long)]
		method: SignerArg,
	},

	/// Authenticate with an external wallet and store the address.
	Connect,

	/// Show current signer configuration.
	Status,
}

// -- Event subcommands --

#[derive(Subcommand)]
pub enum EventCommand {
	/// List the events in the catalog.
	List,

	/// Show details of one catalog event.
	Show {
		/// Catalog index of the event.
		index: usize,
	},
}

// -- Tx subcommands --

#[derive(Subcommand)]
pub enum TxCommand {
	/// Check confirmation status of a transaction.
	Status {
		/// Transaction hash (0x-prefixed).
		tx_hash: String,
	},
}
