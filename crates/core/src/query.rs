//! Reduction of widget state into the sparse outbound query.
//!
//! A key is only emitted when its filter deviates from the default, so the
//! service can apply its own defaults for everything left out.
//!
//! The cuisine filter carries only the *first* committed cuisine. The
//! service accepts a single cuisine; further selections are shown to the
//! user but do not narrow the query.

use std::num::IntErrorKind;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::multi::MultiSelect;
use crate::range::DualRange;
use crate::single::SingleSelect;

pub const MAX_RESULTS_FLOOR: u8 = 1;
pub const MAX_RESULTS_CEILING: u8 = 10;

/// Sparse query handed to the submitter. Absent keys mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryObject {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cuisine: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_min: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_max: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_rating: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_results: Option<u8>,
}

impl QueryObject {
	/// Emitted keys with their rendered values, in wire order.
	pub fn entries(&self) -> Vec<(&'static str, String)> {
		let mut entries = Vec::new();
		if let Some(location) = &self.location {
			entries.push(("location", location.clone()));
		}
		if let Some(cuisine) = &self.cuisine {
			entries.push(("cuisine", cuisine.clone()));
		}
		if let Some(price_min) = self.price_min {
			entries.push(("price_min", price_min.to_string()));
		}
		if let Some(price_max) = self.price_max {
			entries.push(("price_max", price_max.to_string()));
		}
		if let Some(min_rating) = self.min_rating {
			entries.push(("min_rating", min_rating.to_string()));
		}
		if let Some(max_results) = self.max_results {
			entries.push(("max_results", max_results.to_string()));
		}
		entries
	}

	/// No key is emitted at all.
	#[must_use]
	pub fn is_unconstrained(&self) -> bool {
		self == &Self::default()
	}
}

/// What to do with rating or result-count text that is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedInput {
	/// Treat the field as unconstrained and omit its key.
	#[default]
	Omit,
	/// Refuse to build the query.
	Reject,
}

impl MalformedInput {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Omit => "omit",
			Self::Reject => "reject",
		}
	}
}

impl FromStr for MalformedInput {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"omit" => Ok(Self::Omit),
			"reject" => Ok(Self::Reject),
			other => Err(format!(
				"unknown malformed-input policy '{other}' (expected omit or reject)"
			)),
		}
	}
}

/// Outcome of reading one optional scalar field.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scalar<T> {
	Blank,
	Value(T),
	Malformed,
}

impl<T> Scalar<T> {
	fn resolve(
		self,
		field: &'static str,
		raw: &str,
		policy: MalformedInput,
	) -> Result<Option<T>, QueryError> {
		match self {
			Self::Blank => Ok(None),
			Self::Value(value) => Ok(Some(value)),
			Self::Malformed => match policy {
				MalformedInput::Omit => {
					debug!("ignoring malformed {field}: {raw:?}");
					Ok(None)
				}
				MalformedInput::Reject => Err(QueryError::Malformed {
					field,
					raw: raw.trim().to_string(),
				}),
			},
		}
	}
}

/// Numeric prefix of `text`, the way lenient number readers see it:
/// `"5abc"` reads as `5` and `"4.5 stars"` as `4.5`. `None` when the text
/// does not start with a digit after an optional sign.
fn leading_number(text: &str, fractional: bool) -> Option<&str> {
	let bytes = text.as_bytes();
	let digits_from = |start: usize| {
		let mut end = start;
		while bytes.get(end).is_some_and(u8::is_ascii_digit) {
			end += 1;
		}
		end
	};

	let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	let mut end = digits_from(sign);
	let mut digits = end - sign;
	if fractional && bytes.get(end) == Some(&b'.') {
		let fraction_end = digits_from(end + 1);
		digits += fraction_end - end - 1;
		if digits > 0 {
			end = fraction_end;
		}
	}
	if digits == 0 {
		return None;
	}

	if fractional && matches!(bytes.get(end), Some(b'e' | b'E')) {
		let mut exponent = end + 1;
		if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
			exponent += 1;
		}
		let exponent_end = digits_from(exponent);
		if exponent_end > exponent {
			end = exponent_end;
		}
	}
	Some(&text[..end])
}

/// Reads the leading decimal number. Non-finite values are malformed.
fn parse_rating(raw: &str) -> Scalar<f64> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Scalar::Blank;
	}
	match leading_number(trimmed, true).map(str::parse::<f64>) {
		Some(Ok(value)) if value.is_finite() => Scalar::Value(value),
		_ => Scalar::Malformed,
	}
}

/// Reads the leading integer, so `3.7` counts as `3`. Any integer, including
/// one too large to represent, clamps into
/// `[MAX_RESULTS_FLOOR, MAX_RESULTS_CEILING]`.
fn parse_max_results(raw: &str) -> Scalar<u8> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Scalar::Blank;
	}
	let Some(number) = leading_number(trimmed, false) else {
		return Scalar::Malformed;
	};
	let floor = i64::from(MAX_RESULTS_FLOOR);
	let ceiling = i64::from(MAX_RESULTS_CEILING);
	let value = match number.parse::<i64>() {
		Ok(value) => value.clamp(floor, ceiling),
		Err(err) => match err.kind() {
			IntErrorKind::PosOverflow => ceiling,
			IntErrorKind::NegOverflow => floor,
			_ => return Scalar::Malformed,
		},
	};
	match u8::try_from(value) {
		Ok(value) => Scalar::Value(value),
		Err(_) => Scalar::Malformed,
	}
}

/// Keys derived from the three widgets. These never fail.
fn widget_keys(area: &SingleSelect, cuisines: &MultiSelect, price: &DualRange) -> QueryObject {
	let bounds = price.bounds();
	QueryObject {
		location: area.committed_value().map(str::to_string),
		cuisine: cuisines.first().map(str::to_string),
		price_min: (price.min() > bounds.low()).then_some(price.min()),
		price_max: (price.max() < bounds.high()).then_some(price.max()),
		min_rating: None,
		max_results: None,
	}
}

/// Builds queries under a fixed [`MalformedInput`] policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestAssembler {
	policy: MalformedInput,
}

impl RequestAssembler {
	#[must_use]
	pub fn new(policy: MalformedInput) -> Self {
		Self { policy }
	}

	#[must_use]
	pub fn policy(&self) -> MalformedInput {
		self.policy
	}

	/// Combine the committed widget state and the two scalar texts.
	///
	/// Only fails under [`MalformedInput::Reject`].
	pub fn assemble(
		&self,
		area: &SingleSelect,
		cuisines: &MultiSelect,
		price: &DualRange,
		min_rating: &str,
		max_results: &str,
	) -> Result<QueryObject, QueryError> {
		let mut query = widget_keys(area, cuisines, price);
		query.min_rating = parse_rating(min_rating).resolve("min_rating", min_rating, self.policy)?;
		query.max_results =
			parse_max_results(max_results).resolve("max_results", max_results, self.policy)?;
		Ok(query)
	}
}

/// Build the query, omitting any scalar field whose text is not a number.
pub fn build_query(
	area: &SingleSelect,
	cuisines: &MultiSelect,
	price: &DualRange,
	min_rating: &str,
	max_results: &str,
) -> QueryObject {
	let mut query = widget_keys(area, cuisines, price);
	if let Scalar::Value(rating) = parse_rating(min_rating) {
		query.min_rating = Some(rating);
	}
	if let Scalar::Value(count) = parse_max_results(max_results) {
		query.max_results = Some(count);
	}
	query
}

#[cfg(test)]
mod tests;
