use ratatui::style::{Color, Modifier, Style};

use super::types::Theme;

pub(super) struct BuiltinTheme {
	pub(super) name: &'static str,
	pub(super) aliases: &'static [&'static str],
	pub(super) theme: Theme,
}

pub(super) const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(148, 163, 184)),
	focus: Style::new().fg(Color::Rgb(56, 189, 248)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	row_highlight: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(56, 189, 248)),
	selected: Style::new()
		.fg(Color::Rgb(74, 222, 128))
		.add_modifier(Modifier::BOLD),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(148, 163, 184)),
	track: Style::new().fg(Color::Rgb(71, 85, 105)),
	fill: Style::new().fg(Color::Rgb(56, 189, 248)),
	handle: Style::new().fg(Color::Rgb(226, 232, 240)),
	button: Style::new()
		.fg(Color::Rgb(56, 189, 248))
		.bg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	hint: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub(super) const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(71, 85, 105)),
	focus: Style::new().fg(Color::Rgb(0, 102, 153)),
	border: Style::new().fg(Color::Rgb(160, 160, 160)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	row_highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.bg(Color::Rgb(200, 200, 200)),
	selected: Style::new()
		.fg(Color::Rgb(0, 128, 0))
		.add_modifier(Modifier::BOLD),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	track: Style::new().fg(Color::Rgb(160, 160, 160)),
	fill: Style::new().fg(Color::Rgb(0, 102, 153)),
	handle: Style::new().fg(Color::Rgb(15, 23, 42)),
	button: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(190, 30, 45)),
	hint: Style::new().fg(Color::Rgb(120, 120, 120)),
};

pub(super) const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(147, 161, 161)),
	focus: Style::new().fg(Color::Rgb(38, 139, 210)),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	empty: Style::new().fg(Color::Rgb(101, 123, 131)),
	row_highlight: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(181, 137, 0)),
	selected: Style::new()
		.fg(Color::Rgb(133, 153, 0))
		.add_modifier(Modifier::BOLD),
	chip: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(147, 161, 161)),
	track: Style::new().fg(Color::Rgb(88, 110, 117)),
	fill: Style::new().fg(Color::Rgb(42, 161, 152)),
	handle: Style::new().fg(Color::Rgb(238, 232, 213)),
	button: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.bg(Color::Rgb(7, 54, 66))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
	hint: Style::new().fg(Color::Rgb(101, 123, 131)),
};

pub(super) const BUILT_IN_THEMES: &[BuiltinTheme] = &[
	BuiltinTheme {
		name: "slate",
		aliases: &["dark", "default"],
		theme: SLATE,
	},
	BuiltinTheme {
		name: "light",
		aliases: &[],
		theme: LIGHT,
	},
	BuiltinTheme {
		name: "solarized",
		aliases: &["solarized-dark"],
		theme: SOLARIZED,
	},
];

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}
