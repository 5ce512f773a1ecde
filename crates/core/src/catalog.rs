//! Immutable snapshot of the areas and cuisines a user can pick from.
//!
//! The shell owns the catalog for the lifetime of a session; widgets only
//! borrow the slice they filter over.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CatalogError;

/// Ordered, duplicate-free lists of selectable areas and cuisines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
	areas: Vec<String>,
	cuisines: Vec<String>,
}

/// Metadata document shape. Missing lists decode as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
	areas: Vec<String>,
	cuisines: Vec<String>,
}

impl OptionCatalog {
	/// Build a catalog, trimming entries, dropping blanks and keeping only the
	/// first occurrence of each value. Source order is otherwise preserved.
	pub fn new<A, C, S, T>(areas: A, cuisines: C) -> Self
	where
		A: IntoIterator<Item = S>,
		C: IntoIterator<Item = T>,
		S: Into<String>,
		T: Into<String>,
	{
		Self {
			areas: normalize(areas.into_iter().map(Into::into)),
			cuisines: normalize(cuisines.into_iter().map(Into::into)),
		}
	}

	/// A catalog with nothing to select. Widgets render empty lists.
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Decode a `{ "areas": [...], "cuisines": [...] }` metadata document.
	pub fn from_json(text: &str) -> Result<Self, CatalogError> {
		let document: CatalogDocument = serde_json::from_str(text)?;
		Ok(Self::new(document.areas, document.cuisines))
	}

	pub fn areas(&self) -> &[String] {
		&self.areas
	}

	pub fn cuisines(&self) -> &[String] {
		&self.cuisines
	}

	/// Returns `true` when neither list has any entries.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.areas.is_empty() && self.cuisines.is_empty()
	}

	pub fn contains_area(&self, value: &str) -> bool {
		self.areas.iter().any(|area| area == value)
	}

	pub fn contains_cuisine(&self, value: &str) -> bool {
		self.cuisines.iter().any(|cuisine| cuisine == value)
	}
}

fn normalize(values: impl Iterator<Item = String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut out = Vec::new();
	for value in values {
		let trimmed = value.trim();
		if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
			continue;
		}
		out.push(trimmed.to_string());
	}
	out
}
