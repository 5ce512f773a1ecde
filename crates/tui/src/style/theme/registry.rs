use super::builtins::BUILT_IN_THEMES;
use super::types::{Theme, ThemeDescriptor};

/// Look up a theme by name or alias, ignoring case and `-`/`_`/space.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN_THEMES
		.iter()
		.find(|entry| {
			normalize_name(entry.name) == wanted
				|| entry
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|entry| entry.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = BUILT_IN_THEMES
		.iter()
		.map(|entry| entry.name.to_string())
		.collect();
	names.sort_unstable();
	names
}

#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	BUILT_IN_THEMES
		.iter()
		.map(|entry| ThemeDescriptor {
			name: entry.name.to_string(),
			aliases: entry.aliases.iter().map(|alias| alias.to_string()).collect(),
			theme: entry.theme,
		})
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other.to_ascii_lowercase(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::theme::builtins::{LIGHT, SLATE, SOLARIZED};

	#[test]
	fn lookup_ignores_case_and_separators() {
		assert_eq!(by_name("Light"), Some(LIGHT));
		assert_eq!(by_name(" SOLARIZED_dark "), Some(SOLARIZED));
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn names_are_sorted_and_canonical() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
		assert_eq!(descriptors().len(), 3);
	}
}
