use prefpanel_core::{MalformedInput, RangeBounds};

use crate::style::Theme;

/// Captions rendered next to each field.
#[derive(Debug, Clone)]
pub struct PanelLabels {
	pub area: String,
	pub area_placeholder: String,
	pub cuisines: String,
	pub cuisines_placeholder: String,
	pub price: String,
	pub min_rating: String,
	pub max_results: String,
	pub submit: String,
}

impl Default for PanelLabels {
	fn default() -> Self {
		Self {
			area: "Area".to_string(),
			area_placeholder: "Search areas".to_string(),
			cuisines: "Cuisines".to_string(),
			cuisines_placeholder: "Search cuisines".to_string(),
			price: "Price for two".to_string(),
			min_rating: "Min rating".to_string(),
			max_results: "Max results".to_string(),
			submit: "Find restaurants".to_string(),
		}
	}
}

/// Everything the panel needs besides the catalog.
#[derive(Debug, Clone)]
pub struct PanelConfig {
	/// Heading of the panel.
	pub title: String,
	/// Prefix for the price labels.
	pub currency: String,
	/// Outer interval of the price handles.
	pub price_bounds: RangeBounds,
	/// Distance a price handle moves per key press.
	pub price_step: i64,
	/// How unparsable rating or result-count text is treated on submit.
	pub malformed: MalformedInput,
	pub theme: Theme,
	pub labels: PanelLabels,
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			title: "Restaurant preferences".to_string(),
			currency: "₹".to_string(),
			price_bounds: RangeBounds::default(),
			price_step: 100,
			malformed: MalformedInput::default(),
			theme: Theme::default(),
			labels: PanelLabels::default(),
		}
	}
}
