//! Keyboard cursor shared by the searchable dropdowns.
//!
//! The cursor knows nothing about catalogs; every transition is given the
//! length of the list it currently walks. `None` means "nothing highlighted".
//! Invariant: a highlighted index is always below the list length it was
//! computed against.

/// Highlight position over an ordered list of visible options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
	index: Option<usize>,
}

impl Cursor {
	/// Current highlight, if navigation has started.
	#[must_use]
	pub fn index(self) -> Option<usize> {
		self.index
	}

	/// Move down one entry, stopping on the last one. Never wraps.
	pub fn advance(&mut self, len: usize) {
		if len == 0 {
			return;
		}
		self.index = Some(match self.index {
			None => 0,
			Some(index) => (index + 1).min(len - 1),
		});
	}

	/// Move up one entry, stopping on the first one.
	///
	/// Retreating from an unset cursor lands on the first entry: once
	/// navigation starts it never returns to "nothing highlighted".
	pub fn retreat(&mut self, len: usize) {
		if len == 0 {
			return;
		}
		self.index = Some(match self.index {
			None | Some(0) => 0,
			Some(index) => (index - 1).min(len - 1),
		});
	}

	/// Resolve the highlighted option. `None` when nothing is highlighted, in
	/// which case a keyboard commit must do nothing.
	#[must_use]
	pub fn commit<'a>(self, options: &'a [String]) -> Option<&'a str> {
		self.index
			.and_then(|index| options.get(index))
			.map(String::as_str)
	}

	/// Forget the highlight. Called whenever the visible list is recomputed.
	pub fn reset(&mut self) {
		self.index = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| (*value).to_string()).collect()
	}

	#[test]
	fn advance_starts_at_first_entry_and_clamps_at_last() {
		let mut cursor = Cursor::default();
		cursor.advance(3);
		assert_eq!(cursor.index(), Some(0));
		cursor.advance(3);
		cursor.advance(3);
		assert_eq!(cursor.index(), Some(2));
		cursor.advance(3);
		assert_eq!(cursor.index(), Some(2), "advance at the last index is idempotent");
	}

	#[test]
	fn retreat_clamps_at_zero_and_never_unsets() {
		let mut cursor = Cursor::default();
		cursor.advance(4);
		cursor.advance(4);
		cursor.retreat(4);
		cursor.retreat(4);
		cursor.retreat(4);
		assert_eq!(cursor.index(), Some(0));

		let mut fresh = Cursor::default();
		fresh.retreat(4);
		assert_eq!(fresh.index(), Some(0));
	}

	#[test]
	fn empty_lists_leave_the_cursor_unset() {
		let mut cursor = Cursor::default();
		cursor.advance(0);
		cursor.retreat(0);
		assert_eq!(cursor.index(), None);
	}

	#[test]
	fn commit_requires_a_highlight() {
		let list = options(&["Thai", "Mexican"]);
		let mut cursor = Cursor::default();
		assert_eq!(cursor.commit(&list), None);

		cursor.advance(list.len());
		cursor.advance(list.len());
		assert_eq!(cursor.commit(&list), Some("Mexican"));
	}

	#[test]
	fn reset_clears_highlight() {
		let mut cursor = Cursor::default();
		cursor.advance(2);
		cursor.reset();
		assert_eq!(cursor.index(), None);
	}
}
