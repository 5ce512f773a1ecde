use prefpanel_core::MalformedInput;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Submit-time policy for scalar text fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct QuerySection {
	pub(super) malformed: Option<String>,
}

impl QuerySection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(policy) = cli.malformed {
			self.malformed = Some(policy.as_str().to_string());
		}
	}

	pub(super) fn resolve(self) -> String {
		self.malformed
			.unwrap_or_else(|| MalformedInput::default().as_str().to_string())
	}
}
