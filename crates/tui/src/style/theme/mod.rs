mod builtins;
mod registry;
mod types;

pub use builtins::default_theme;
pub use registry::{by_name, descriptors, names};
pub use types::{Theme, ThemeDescriptor};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeDescriptor> {
	descriptors()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
