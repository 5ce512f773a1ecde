use std::path::PathBuf;

use prefpanel::logging::DEFAULT_LEVEL;
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(self) -> (String, Option<PathBuf>) {
		let level = self
			.level
			.map(|level| level.trim().to_ascii_lowercase())
			.unwrap_or_else(|| DEFAULT_LEVEL.to_string());
		(level, self.file)
	}
}
