use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod logging;
mod price;
mod query;
mod ui;

use catalog::CatalogSection;
use logging::LoggingSection;
use price::PriceSection;
use query::QuerySection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	price: PriceSection,
	query: QuerySection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.price.apply_cli_overrides(cli);
		self.query.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Fill defaults and validate, remembering where each checked value came
	/// from so errors can point at it.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			price_low: detect_source(
				cli.price_low.is_some(),
				self.price.low.is_some(),
				"PREFPANEL__PRICE__LOW",
				"--price-low",
				"price.low",
			),
			price_high: detect_source(
				cli.price_high.is_some(),
				self.price.high.is_some(),
				"PREFPANEL__PRICE__HIGH",
				"--price-high",
				"price.high",
			),
			price_step: detect_source(
				false,
				self.price.step.is_some(),
				"PREFPANEL__PRICE__STEP",
				"",
				"price.step",
			),
			malformed: detect_source(
				cli.malformed.is_some(),
				self.query.malformed.is_some(),
				"PREFPANEL__QUERY__MALFORMED",
				"--malformed",
				"query.malformed",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"PREFPANEL__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				false,
				self.logging.level.is_some(),
				"PREFPANEL__LOGGING__LEVEL",
				"",
				"logging.level",
			),
		};

		let price = self.price.resolve();
		let (title, theme) = self.ui.resolve();
		let (log_level, log_file) = self.logging.resolve();

		let config = ResolvedConfig {
			catalog: self.catalog.resolve(),
			price_low: price.low,
			price_high: price.high,
			price_step: price.step,
			currency: price.currency,
			malformed: self.query.resolve(),
			title,
			theme,
			log_level,
			log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
