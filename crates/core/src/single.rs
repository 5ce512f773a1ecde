//! Searchable single-select dropdown (the area picker).

use log::debug;

use crate::list::ListQuery;

/// State of a dropdown that commits at most one value.
///
/// Typed text is cosmetic until [`commit`](Self::commit): closing the
/// dropdown keeps whatever was committed before, not the typed fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelect {
	committed: Option<String>,
	query: ListQuery,
	open: bool,
}

impl SingleSelect {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Open the dropdown and list the catalog entries matching the current text.
	pub fn open(&mut self, catalog: &[String]) {
		self.open = true;
		self.query.refresh(catalog);
	}

	/// Replace the typed text, refilter and drop the highlight.
	pub fn set_input_text(&mut self, text: impl Into<String>, catalog: &[String]) {
		self.query.set_input(text, catalog);
	}

	pub fn advance(&mut self) {
		self.query.advance();
	}

	pub fn retreat(&mut self) {
		self.query.retreat();
	}

	/// Commit `value` and close. The text input mirrors the committed value.
	///
	/// No catalog membership check happens here: callers only offer values
	/// drawn from the visible options. An empty value clears the selection.
	pub fn commit(&mut self, value: impl Into<String>) {
		let value = value.into();
		debug!("single-select commit: {value:?}");
		self.query.replace_text(value.clone());
		self.committed = (!value.is_empty()).then_some(value);
		self.open = false;
	}

	/// Commit the highlighted option. Does nothing when nothing is highlighted.
	pub fn commit_highlighted(&mut self) -> Option<String> {
		let value = self.query.highlighted()?.to_string();
		self.commit(value.clone());
		Some(value)
	}

	/// Close without touching the typed text or the committed value.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Drop the committed value and the typed text.
	pub fn clear(&mut self, catalog: &[String]) {
		debug!("single-select cleared");
		self.committed = None;
		self.query.set_input(String::new(), catalog);
	}

	pub fn committed_value(&self) -> Option<&str> {
		self.committed.as_deref()
	}

	/// Whether `option` should render as the selected entry. Independent of
	/// the keyboard highlight.
	pub fn is_selected(&self, option: &str) -> bool {
		self.committed.as_deref() == Some(option)
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn query(&self) -> &ListQuery {
		&self.query
	}
}
