use alloy_primitives::{Address, B256};
use thiserror::Error;

use crate::address;
use crate::catalog::{Catalog, Event};
use crate::eas::{self, AttestationRequest, Attestor};

/// How the attestation submission can fail. Every variant is
/// user-recoverable: local state is left untouched so the action can
/// simply be retried.
#[derive(Debug, Error)]
pub enum SubmitError {
	#[error("no receiver selected (scan a QR code or pass --to)")]
	NoReceiver,

	#[error("no signer available (run: eas-attest signer connect)")]
	NoSigner,

	#[error("attestation submission failed: {0}")]
	Submission(#[source] anyhow::Error),
}

/// Result of feeding one scanned string into the workflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanOutcome {
	/// The raw value was a valid bare address; the caller should
	/// surface a success notification.
	Scanned(Address),
	/// A valid address was extracted from a `prefix:ADDRESS@suffix`
	/// payload; accepted quietly.
	Extracted(Address),
	/// Nothing usable; the receiver is unchanged.
	Rejected,
}

/// The attestation workflow: selected event, receiver address, and
/// scanner visibility, mutated only through named transitions.
///
/// The all-zero address is the "no receiver selected" sentinel, and
/// the first catalog event is selected initially.
pub struct Workflow {
	catalog: Catalog,
	schema_uid: B256,
	selected: usize,
	receiver: Address,
	scanner_open: bool,
}

impl Workflow {
	pub fn new(catalog: Catalog, schema_uid: B256) -> anyhow::Result<Self> {
		if catalog.is_empty() {
			anyhow::bail!("cannot start the workflow with an empty event catalog");
		}
		Ok(Self {
			catalog,
			schema_uid,
			selected: 0,
			receiver: Address::ZERO,
			scanner_open: false,
		})
	}

	// -- State accessors --

	pub fn selected_event(&self) -> &Event {
		&self.catalog.events[self.selected]
	}

	pub fn receiver(&self) -> Address {
		self.receiver
	}

	pub fn has_receiver(&self) -> bool {
		self.receiver != Address::ZERO
	}

	pub fn scanner_open(&self) -> bool {
		self.scanner_open
	}

	// -- Transitions --

	/// Flip the scanner visibility. No guard condition.
	pub fn toggle_scanner(&mut self) {
		self.scanner_open = !self.scanner_open;
	}

	/// Feed one scanned string through the address resolver. Whatever
	/// the validation outcome, closing the scanner is the terminal
	/// action of this transition.
	pub fn on_scan_result(&mut self, raw: &str) -> ScanOutcome {
		let outcome = match address::resolve_scanned(raw) {
			Some((addr, true)) => {
				self.receiver = addr;
				ScanOutcome::Scanned(addr)
			}
			Some((addr, false)) => {
				self.receiver = addr;
				ScanOutcome::Extracted(addr)
			}
			None => ScanOutcome::Rejected,
		};
		self.scanner_open = false;
		outcome
	}

	/// Manually entered receiver address; validated before it is
	/// applied. Returns false (state unchanged) on invalid input.
	pub fn set_receiver(&mut self, candidate: &str) -> bool {
		match address::parse_address(candidate) {
			Some(addr) => {
				self.receiver = addr;
				true
			}
			None => false,
		}
	}

	/// Bounds-checked event selection. Out-of-range indices are a
	/// no-op returning false.
	pub fn select_event(&mut self, index: usize) -> bool {
		if self.catalog.get(index).is_some() {
			self.selected = index;
			true
		} else {
			false
		}
	}

	/// Compose a fresh attestation request for the current state.
	/// Guarded: fails while the receiver is still the sentinel.
	pub fn attestation_request(&self) -> Result<AttestationRequest, SubmitError> {
		if !self.has_receiver() {
			return Err(SubmitError::NoReceiver);
		}
		Ok(eas::build_request(
			self.schema_uid,
			self.receiver,
			self.selected_event(),
		))
	}

	/// Submit the attestation through the collaborator, returning the
	/// confirmation UID. An absent attestor (not connected, wallet
	/// rejected) and a failed submission are both surfaced explicitly;
	/// the collaborator is never consulted while no receiver is set.
	pub async fn submit(&self, attestor: Option<&dyn Attestor>) -> Result<B256, SubmitError> {
		let request = self.attestation_request()?;
		let attestor = attestor.ok_or(SubmitError::NoSigner)?;
		attestor.attest(request).await.map_err(SubmitError::Submission)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::U256;
	use alloy_sol_types::SolValue;
	use std::sync::Mutex;

	const RECEIVER: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";

	fn catalog() -> Catalog {
		serde_json::from_str(
			r#"{
				"events": [
					{
						"id": 1,
						"name": "Meetup",
						"location": "Casa Sol",
						"startDate": "2024-01-01",
						"endDate": "2024-01-02"
					},
					{
						"id": 2,
						"name": "Workshop",
						"location": "Campus",
						"startDate": "2024-02-01",
						"endDate": "2024-02-01"
					}
				]
			}"#,
		)
		.unwrap()
	}

	fn workflow() -> Workflow {
		Workflow::new(catalog(), B256::repeat_byte(0xd4)).unwrap()
	}

	/// Records whether (and with what) it was called; never submits.
	struct MockAttestor {
		seen: Mutex<Option<AttestationRequest>>,
		uid: B256,
	}

	impl MockAttestor {
		fn new() -> Self {
			Self {
				seen: Mutex::new(None),
				uid: B256::repeat_byte(0xab),
			}
		}

		fn called(&self) -> bool {
			self.seen.lock().unwrap().is_some()
		}
	}

	#[async_trait::async_trait]
	impl Attestor for MockAttestor {
		async fn attest(&self, request: AttestationRequest) -> anyhow::Result<B256> {
			*self.seen.lock().unwrap() = Some(request);
			Ok(self.uid)
		}
	}

	#[test]
	fn initial_state_is_first_event_sentinel_receiver_scanner_closed() {
		let w = workflow();
		assert_eq!(w.selected_event().id, 1);
		assert_eq!(w.receiver(), Address::ZERO);
		assert!(!w.has_receiver());
		assert!(!w.scanner_open());
	}

	#[test]
	fn empty_catalog_is_rejected() {
		let empty: Catalog = serde_json::from_str(r#"{"events": []}"#).unwrap();
		assert!(Workflow::new(empty, B256::ZERO).is_err());
	}

	#[test]
	fn toggle_scanner_is_idempotent_under_double_application() {
		let mut w = workflow();
		w.toggle_scanner();
		assert!(w.scanner_open());
		w.toggle_scanner();
		assert!(!w.scanner_open());
	}

	#[test]
	fn scanning_a_valid_address_sets_receiver_and_closes_scanner() {
		let mut w = workflow();
		w.toggle_scanner();

		let outcome = w.on_scan_result(RECEIVER);
		assert!(matches!(outcome, ScanOutcome::Scanned(_)));
		assert_eq!(w.receiver(), RECEIVER.parse::<Address>().unwrap());
		assert!(!w.scanner_open());
	}

	#[test]
	fn scanning_a_payload_extracts_the_embedded_address() {
		let mut w = workflow();
		w.toggle_scanner();

		let payload = format!("matrix:{RECEIVER}@home");
		let outcome = w.on_scan_result(&payload);
		assert!(matches!(outcome, ScanOutcome::Extracted(_)));
		assert_eq!(w.receiver(), RECEIVER.parse::<Address>().unwrap());
		assert!(!w.scanner_open());
	}

	#[test]
	fn scanning_garbage_leaves_receiver_but_still_closes_scanner() {
		let mut w = workflow();
		w.toggle_scanner();

		assert_eq!(w.on_scan_result("not-an-address"), ScanOutcome::Rejected);
		assert_eq!(w.receiver(), Address::ZERO);
		assert!(!w.scanner_open());

		// A previously accepted receiver survives a bad scan.
		w.set_receiver(RECEIVER);
		w.toggle_scanner();
		assert_eq!(w.on_scan_result("prefix:junk@suffix"), ScanOutcome::Rejected);
		assert_eq!(w.receiver(), RECEIVER.parse::<Address>().unwrap());
		assert!(!w.scanner_open());
	}

	#[test]
	fn manual_receiver_entry_is_validated() {
		let mut w = workflow();
		assert!(!w.set_receiver("0x1234"));
		assert!(!w.has_receiver());
		assert!(w.set_receiver(RECEIVER));
		assert!(w.has_receiver());
	}

	#[test]
	fn event_selection_is_bounds_checked() {
		let mut w = workflow();
		assert!(w.select_event(1));
		assert_eq!(w.selected_event().id, 2);

		// Out of range: no-op, selection unchanged.
		assert!(!w.select_event(2));
		assert_eq!(w.selected_event().id, 2);
	}

	#[tokio::test]
	async fn submit_without_receiver_never_consults_the_attestor() {
		let w = workflow();
		let mock = MockAttestor::new();

		let result = w.submit(Some(&mock)).await;
		assert!(matches!(result, Err(SubmitError::NoReceiver)));
		assert!(!mock.called());
	}

	#[tokio::test]
	async fn submit_without_signer_is_surfaced() {
		let mut w = workflow();
		w.set_receiver(RECEIVER);

		let result = w.submit(None).await;
		assert!(matches!(result, Err(SubmitError::NoSigner)));
	}

	#[tokio::test]
	async fn submission_failure_is_caught_and_state_survives() {
		struct FailingAttestor;

		#[async_trait::async_trait]
		impl Attestor for FailingAttestor {
			async fn attest(&self, _request: AttestationRequest) -> anyhow::Result<B256> {
				anyhow::bail!("user denied transaction signature")
			}
		}

		let mut w = workflow();
		w.set_receiver(RECEIVER);

		let result = w.submit(Some(&FailingAttestor)).await;
		assert!(matches!(result, Err(SubmitError::Submission(_))));

		// Local state is unchanged so the user may retry.
		assert_eq!(w.receiver(), RECEIVER.parse::<Address>().unwrap());
		assert_eq!(w.selected_event().id, 1);
	}

	#[tokio::test]
	async fn end_to_end_scan_select_submit() {
		let mut w = workflow();

		w.toggle_scanner();
		let payload = format!("matrix:{RECEIVER}@home");
		assert!(matches!(w.on_scan_result(&payload), ScanOutcome::Extracted(_)));

		assert!(w.select_event(0));

		let mock = MockAttestor::new();
		let uid = w.submit(Some(&mock)).await.unwrap();
		assert_eq!(uid, B256::repeat_byte(0xab));

		let request = mock.seen.lock().unwrap().take().unwrap();
		assert_eq!(request.schema, B256::repeat_byte(0xd4));
		assert_eq!(request.data.recipient, RECEIVER.parse::<Address>().unwrap());
		assert_eq!(request.data.expirationTime, 0);
		assert!(request.data.revocable);

		let (id, name, location, start, end) =
			<(U256, String, String, String, String)>::abi_decode_params(&request.data.data, true)
				.unwrap();
		assert_eq!(id, U256::from(1));
		assert_eq!(name, "Meetup");
		assert_eq!(location, "Casa Sol");
		assert_eq!(start, "2024-01-01");
		assert_eq!(end, "2024-01-02");
	}

	#[tokio::test]
	async fn end_to_end_bad_scan_keeps_submit_disabled() {
		let mut w = workflow();

		w.toggle_scanner();
		assert_eq!(w.on_scan_result("not-an-address"), ScanOutcome::Rejected);
		assert_eq!(w.receiver(), Address::ZERO);

		let mock = MockAttestor::new();
		assert!(matches!(
			w.submit(Some(&mock)).await,
			Err(SubmitError::NoReceiver)
		));
		assert!(!mock.called());
	}
}
