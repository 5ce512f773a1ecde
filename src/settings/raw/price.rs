use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_LOW: i64 = 100;
pub(super) const DEFAULT_HIGH: i64 = 5000;
pub(super) const DEFAULT_STEP: i64 = 100;
pub(super) const DEFAULT_CURRENCY: &str = "₹";

/// Price slider configuration prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PriceSection {
	pub(super) low: Option<i64>,
	pub(super) high: Option<i64>,
	pub(super) step: Option<i64>,
	pub(super) currency: Option<String>,
}

pub(super) struct PriceResolution {
	pub(super) low: i64,
	pub(super) high: i64,
	pub(super) step: i64,
	pub(super) currency: String,
}

impl PriceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(low) = cli.price_low {
			self.low = Some(low);
		}
		if let Some(high) = cli.price_high {
			self.high = Some(high);
		}
	}

	pub(super) fn resolve(self) -> PriceResolution {
		PriceResolution {
			low: self.low.unwrap_or(DEFAULT_LOW),
			high: self.high.unwrap_or(DEFAULT_HIGH),
			step: self.step.unwrap_or(DEFAULT_STEP),
			currency: self
				.currency
				.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
		}
	}
}
