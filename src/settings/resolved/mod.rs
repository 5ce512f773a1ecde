use std::path::PathBuf;

use anyhow::{Result, anyhow};
use prefpanel_core::{MalformedInput, RangeBounds};
use prefpanel_tui::{PanelConfig, PanelLabels, style};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the panel's areas and cuisines are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
	File(PathBuf),
	Inline {
		areas: Vec<String>,
		cuisines: Vec<String>,
	},
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) catalog: CatalogSource,
	pub(crate) price_low: i64,
	pub(crate) price_high: i64,
	pub(crate) price_step: i64,
	pub(crate) currency: String,
	pub(crate) malformed: String,
	pub(crate) title: String,
	pub(crate) theme: String,
	pub(crate) log_level: String,
	/// `None` means `<data dir>/prefpanel.log`.
	pub(crate) log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}

	/// Convert into the panel's own configuration. Only fails for values
	/// that [`validate`](Self::validate) would have rejected.
	pub(crate) fn panel_config(&self) -> Result<PanelConfig> {
		let price_bounds = RangeBounds::new(self.price_low, self.price_high)?;
		let malformed: MalformedInput = self.malformed.parse().map_err(|err: String| anyhow!(err))?;
		let theme = style::by_name(&self.theme)
			.ok_or_else(|| anyhow!("unknown theme '{}'", self.theme))?;

		Ok(PanelConfig {
			title: self.title.clone(),
			currency: self.currency.clone(),
			price_bounds,
			price_step: self.price_step,
			malformed,
			theme,
			labels: PanelLabels::default(),
		})
	}
}

#[cfg(test)]
pub(super) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		catalog: CatalogSource::Inline {
			areas: vec!["BTM".into()],
			cuisines: vec!["Thai".into(), "Chinese".into()],
		},
		price_low: 100,
		price_high: 5000,
		price_step: 100,
		currency: "₹".into(),
		malformed: "omit".into(),
		title: "Restaurant preferences".into(),
		theme: "slate".into(),
		log_level: "warn".into(),
		log_file: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn panel_config_carries_resolved_values() {
		let config = ResolvedConfig {
			price_low: 0,
			price_high: 2000,
			price_step: 250,
			malformed: "reject".into(),
			theme: "Solarized-Dark".into(),
			..sample()
		};
		let panel = config.panel_config().expect("valid config");

		assert_eq!(panel.price_bounds, RangeBounds::new(0, 2000).expect("bounds"));
		assert_eq!(panel.price_step, 250);
		assert_eq!(panel.malformed, MalformedInput::Reject);
		assert_eq!(panel.theme, style::by_name("solarized").expect("theme"));
	}
}
