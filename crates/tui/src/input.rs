//! Single-line text input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// One-line editable field. Only editing and caret keys reach the text area;
/// everything else is left to the caller.
#[derive(Debug, Clone)]
pub struct FieldInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	focused: bool,
}

impl<'a> FieldInput<'a> {
	#[must_use]
	pub fn new(placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		let textarea = build_textarea(String::new(), &placeholder, false);
		Self {
			textarea,
			placeholder,
			focused: false,
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the content and move the caret to the end. Unchanged text keeps
	/// the caret where it is.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		self.textarea = build_textarea(text.to_string(), &self.placeholder, self.focused);
	}

	/// Feed a key press. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char(_)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
			KeyCode::Backspace
			| KeyCode::Delete
			| KeyCode::Left
			| KeyCode::Right
			| KeyCode::Home
			| KeyCode::End => {}
			_ => return false,
		}
		self.textarea.input(key)
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.textarea.set_cursor_style(cursor_style(focused));
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn set_placeholder_style(&mut self, style: Style) {
		self.textarea.set_placeholder_style(style);
	}

	#[must_use]
	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn build_textarea<'a>(text: String, placeholder: &str, focused: bool) -> TextArea<'a> {
	let mut textarea = TextArea::new(vec![text]);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_cursor_style(cursor_style(focused));
	textarea.set_placeholder_text(placeholder);
	textarea.move_cursor(CursorMove::End);
	textarea
}

fn cursor_style(focused: bool) -> Style {
	if focused {
		Style::default().add_modifier(Modifier::REVERSED)
	} else {
		Style::default()
	}
}
