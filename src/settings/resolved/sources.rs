use std::fmt;

/// Layer a configuration value was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the values validation can reject. `None` means the default was
/// used.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) price_low: Option<SettingSource>,
	pub(crate) price_high: Option<SettingSource>,
	pub(crate) price_step: Option<SettingSource>,
	pub(crate) malformed: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_price_low(&self) -> SettingSource {
		or_key(&self.price_low, "price.low")
	}

	pub(crate) fn source_for_price_high(&self) -> SettingSource {
		or_key(&self.price_high, "price.high")
	}

	pub(crate) fn source_for_price_step(&self) -> SettingSource {
		or_key(&self.price_step, "price.step")
	}

	pub(crate) fn source_for_malformed(&self) -> SettingSource {
		or_key(&self.malformed, "query.malformed")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.log_level, "logging.level")
	}
}
