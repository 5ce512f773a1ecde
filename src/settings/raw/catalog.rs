use std::path::PathBuf;

use serde::Deserialize;

use super::super::resolved::CatalogSource;
use crate::cli::CliArgs;

/// Where the option catalog comes from, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
	pub(super) areas: Option<Vec<String>>,
	pub(super) cuisines: Option<Vec<String>>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.path = Some(path);
		}
	}

	/// A file path wins over inline lists.
	pub(super) fn resolve(self) -> CatalogSource {
		match self.path {
			Some(path) => CatalogSource::File(path),
			None => CatalogSource::Inline {
				areas: self.areas.unwrap_or_default(),
				cuisines: self.cuisines.unwrap_or_default(),
			},
		}
	}
}
