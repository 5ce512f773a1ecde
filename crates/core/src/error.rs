use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing a [`RangeBounds`](crate::RangeBounds).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
	/// The lower bound is not strictly below the upper bound.
	#[error("range bounds must satisfy low < high (got {low}..{high})")]
	EmptyBounds { low: i64, high: i64 },
}

/// Errors raised by the [`RequestAssembler`](crate::RequestAssembler) when it
/// runs with [`MalformedInput::Reject`](crate::MalformedInput::Reject).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
	/// A scalar field held text that does not parse as a number.
	#[error("{field} must be a number (got '{raw}')")]
	Malformed { field: &'static str, raw: String },
}

/// Errors raised while reading or decoding an option catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog file could not be read.
	#[error("failed to read catalog {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The catalog document is not valid metadata JSON.
	#[error("failed to decode catalog: {0}")]
	Decode(#[from] serde_json::Error),
}
