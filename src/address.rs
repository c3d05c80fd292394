use alloy_primitives::Address;

// -- Address validation --

/// Parse a candidate string as an Ethereum account address.
///
/// Accepts the 0x-prefixed 40-hex-character form. All-lowercase and
/// all-uppercase hex are accepted as-is; mixed-case hex must carry a
/// valid EIP-55 checksum.
pub fn parse_address(candidate: &str) -> Option<Address> {
	let hex_part = candidate.strip_prefix("0x")?;
	if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
		return None;
	}

	let addr: Address = candidate.parse().ok()?;

	let any_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
	let any_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
	if any_lower && any_upper && addr.to_checksum(None) != format!("0x{hex_part}") {
		return None;
	}

	Some(addr)
}

/// True iff the candidate is a well-formed account address.
pub fn is_address(candidate: &str) -> bool {
	parse_address(candidate).is_some()
}

// -- Scan payload extraction --

/// Extract the address slice from an EIP-681-style scan payload of the
/// form `prefix:ADDRESS@suffix` (e.g. `ethereum:0xabc...@534352`).
///
/// Returns the substring strictly between the first `:` and the last
/// `@`, or `None` when either delimiter is missing or misordered. The
/// caller must re-validate the result before acting on it.
pub fn extract_from_scan_payload(candidate: &str) -> Option<&str> {
	let colon = candidate.find(':')?;
	let at = candidate.rfind('@')?;
	if at <= colon {
		return None;
	}
	Some(&candidate[colon + 1..at])
}

/// Resolve a raw scanned string into an address.
///
/// Tries the bare-address form first, then payload extraction. The
/// returned flag is true when the string was a bare address (the
/// original flow only surfaces a notification in that case).
pub fn resolve_scanned(raw: &str) -> Option<(Address, bool)> {
	if let Some(addr) = parse_address(raw) {
		return Some((addr, true));
	}
	let inner = extract_from_scan_payload(raw)?;
	parse_address(inner).map(|addr| (addr, false))
}
