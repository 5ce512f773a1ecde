use prefpanel::logging;
use prefpanel_core::MalformedInput;
use prefpanel_tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.price_low >= config.price_high {
		// Blame whichever bound was set explicitly, preferring the lower one.
		return Err(if sources.price_low.is_some() || sources.price_high.is_none() {
			ConfigError::invalid(
				"price.low",
				config.price_low.to_string(),
				sources.source_for_price_low(),
				format!("must be below price.high ({})", config.price_high),
			)
		} else {
			ConfigError::invalid(
				"price.high",
				config.price_high.to_string(),
				sources.source_for_price_high(),
				format!("must be above price.low ({})", config.price_low),
			)
		});
	}

	if config.price_step <= 0 {
		return Err(ConfigError::invalid(
			"price.step",
			config.price_step.to_string(),
			sources.source_for_price_step(),
			"must be greater than zero",
		));
	}

	if let Err(reason) = config.malformed.parse::<MalformedInput>() {
		return Err(ConfigError::invalid(
			"query.malformed",
			config.malformed.clone(),
			sources.source_for_malformed(),
			reason,
		));
	}

	if style::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (available: {})", style::names().join(", ")),
		));
	}

	if !logging::is_known_level(&config.log_level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			format!("unknown level (expected one of {})", logging::LEVELS.join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::{SettingSource, sample};
	use super::*;

	#[test]
	fn sample_config_is_valid() {
		assert!(validate(&sample(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_an_empty_price_range() {
		let config = ResolvedConfig {
			price_high: 50,
			..sample()
		};
		let sources = ConfigSources {
			price_high: Some(SettingSource::Environment("PREFPANEL__PRICE__HIGH")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).expect_err("low >= high");
		assert_eq!(err.key, "price.high");
		assert_eq!(
			err.to_string(),
			"invalid value for price.high from environment variable `PREFPANEL__PRICE__HIGH`: \
			 must be above price.low (100) (value: 50)"
		);
	}

	#[test]
	fn explicit_low_bound_takes_the_blame() {
		let config = ResolvedConfig {
			price_low: 5000,
			..sample()
		};
		let sources = ConfigSources {
			price_low: Some(SettingSource::CliFlag("--price-low")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).expect_err("low == high");
		assert_eq!(err.key, "price.low");
		assert_eq!(err.origin, SettingSource::CliFlag("--price-low"));
	}

	#[test]
	fn validation_rejects_non_positive_step() {
		for step in [0, -100] {
			let config = ResolvedConfig {
				price_step: step,
				..sample()
			};
			let err = validate(&config, &ConfigSources::default()).expect_err("step");
			assert_eq!(err.key, "price.step");
			assert!(err.to_string().contains("configuration key `price.step`"));
		}
	}

	#[test]
	fn validation_rejects_unknown_policy() {
		let config = ResolvedConfig {
			malformed: "strict".into(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).expect_err("policy");
		assert_eq!(err.key, "query.malformed");
		assert!(err.reason.contains("expected omit or reject"));
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let config = ResolvedConfig {
			log_level: "loud".into(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).expect_err("level");
		assert_eq!(err.key, "logging.level");
	}
}
