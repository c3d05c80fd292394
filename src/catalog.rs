use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A predefined event that can be attested. Field names stay camelCase
/// on disk to remain compatible with the original catalog JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	pub id: u64,
	pub name: String,
	pub location: String,
	pub start_date: String,
	pub end_date: String,
}

/// Ordered, read-only list of events, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
	pub events: Vec<Event>,
}

/// Catalog shipped with the binary, used when no events.json exists.
const DEFAULT_CATALOG: &str = include_str!("../data/events.json");

impl Catalog {
	/// Path to the user-provided catalog file.
	pub fn path() -> PathBuf {
		Config::dir().join("events.json")
	}

	/// Load the catalog from disk, falling back to the built-in list.
	/// An empty catalog is an error: the workflow needs a first event.
	pub fn load() -> Result<Self> {
		let path = Self::path();
		let catalog: Self = if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			serde_json::from_str(&content)?
		} else {
			serde_json::from_str(DEFAULT_CATALOG)
				.expect("built-in catalog is valid JSON")
		};

		if catalog.events.is_empty() {
			anyhow::bail!("event catalog is empty: {}", path.display());
		}
		Ok(catalog)
	}

	/// Bounds-checked event lookup.
	pub fn get(&self, index: usize) -> Option<&Event> {
		self.events.get(index)
	}

	pub fn len(&self) -> usize {
		self.events.len()
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn built_in_catalog_parses_and_is_non_empty() {
		let catalog: Catalog = serde_json::from_str(DEFAULT_CATALOG).unwrap();
		assert!(!catalog.is_empty());
	}

	#[test]
	fn events_use_camel_case_on_disk() {
		let json = r#"{
			"events": [
				{
					"id": 1,
					"name": "Meetup",
					"location": "Casa Sol",
					"startDate": "2024-01-01",
					"endDate": "2024-01-02"
				}
			]
		}"#;
		let catalog: Catalog = serde_json::from_str(json).unwrap();
		let event = catalog.get(0).unwrap();
		assert_eq!(event.id, 1);
		assert_eq!(event.start_date, "2024-01-01");
		assert_eq!(event.end_date, "2024-01-02");
	}

	#[test]
	fn lookup_is_bounds_checked() {
		let catalog: Catalog = serde_json::from_str(DEFAULT_CATALOG).unwrap();
		assert!(catalog.get(0).is_some());
		assert!(catalog.get(catalog.len()).is_none());
	}
}
