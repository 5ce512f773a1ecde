use crate::filter::filter_options;
use crate::navigation::Cursor;

/// Typed query text, the options it currently matches and the keyboard
/// highlight over those options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
	raw_input: String,
	visible: Vec<String>,
	cursor: Cursor,
}

impl ListQuery {
	/// Text currently typed in the input.
	pub fn raw_input(&self) -> &str {
		&self.raw_input
	}

	/// Options matching [`raw_input`](Self::raw_input), in catalog order.
	pub fn visible_options(&self) -> &[String] {
		&self.visible
	}

	/// Index into [`visible_options`](Self::visible_options) of the
	/// highlighted entry.
	#[must_use]
	pub fn highlight_index(&self) -> Option<usize> {
		self.cursor.index()
	}

	/// The highlighted option, if any.
	pub fn highlighted(&self) -> Option<&str> {
		self.cursor.commit(&self.visible)
	}

	pub(crate) fn set_input(&mut self, text: impl Into<String>, catalog: &[String]) {
		self.raw_input = text.into();
		self.refresh(catalog);
	}

	/// Swap the typed text without refiltering. Used when a commit closes the
	/// list; the next [`refresh`](Self::refresh) catches the options up.
	pub(crate) fn replace_text(&mut self, text: impl Into<String>) {
		self.raw_input = text.into();
		self.cursor.reset();
	}

	/// Recompute the visible options and drop the highlight so it cannot point
	/// at an option that is no longer listed.
	pub(crate) fn refresh(&mut self, catalog: &[String]) {
		self.visible = filter_options(catalog, &self.raw_input);
		self.cursor.reset();
	}

	pub(crate) fn advance(&mut self) {
		self.cursor.advance(self.visible.len());
	}

	pub(crate) fn retreat(&mut self) {
		self.cursor.retreat(self.visible.len());
	}
}
