//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the panel. Other visual knobs can
//! be layered beside them in [`StyleConfig`].

/// Theme definitions, built-in themes and lookup by name.
pub mod theme;

pub use theme::{Theme, ThemeDescriptor, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
