use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_TITLE: &str = "Restaurant preferences";
pub(super) const DEFAULT_THEME: &str = "slate";

/// Panel heading and theme.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	/// Blank titles fall back to the default heading.
	pub(super) fn resolve(self) -> (String, String) {
		let title = self
			.title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty())
			.unwrap_or_else(|| DEFAULT_TITLE.to_string());
		let theme = self.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		(title, theme)
	}
}
