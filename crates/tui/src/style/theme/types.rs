use ratatui::style::{Color, Style};

/// Styles for every element of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Panel title and catalog statistics.
	pub header: Style,
	/// Field captions.
	pub label: Style,
	/// Border of the focused field.
	pub focus: Style,
	/// Border of unfocused fields.
	pub border: Style,
	/// Placeholders and the empty-list message.
	pub empty: Style,
	/// Highlighted dropdown row.
	pub row_highlight: Style,
	/// Marker of committed options.
	pub selected: Style,
	/// Cuisine tokens.
	pub chip: Style,
	/// Unselected part of the price track.
	pub track: Style,
	/// Selected part of the price track.
	pub fill: Style,
	/// Price handles.
	pub handle: Style,
	/// Submit button.
	pub button: Style,
	/// Status line errors.
	pub error: Style,
	/// Key hints.
	pub hint: Style,
}

impl Theme {
	/// Style of the handle that currently has focus.
	#[must_use]
	pub fn active_handle_style(&self) -> Style {
		self.handle
			.bg(self.focus.fg.unwrap_or(Color::Reset))
			.fg(self.row_highlight.fg.unwrap_or(Color::Reset))
	}

	/// Submit button while focused.
	#[must_use]
	pub fn button_focus_style(&self) -> Style {
		Style::new()
			.fg(self.button.bg.unwrap_or(Color::Reset))
			.bg(self.button.fg.unwrap_or(Color::Reset))
	}
}

/// A registered theme and the alternate names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
}
