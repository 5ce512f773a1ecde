//! Searchable multi-select with removable tokens (the cuisine picker).

use log::debug;

use crate::list::ListQuery;

/// State of a dropdown that commits an ordered set of values.
///
/// `committed` has no duplicates and keeps the order in which the user picked
/// values, independent of catalog or display order. Selected options stay in
/// the visible list so they can be toggled off again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelect {
	committed: Vec<String>,
	query: ListQuery,
	open: bool,
}

impl MultiSelect {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn open(&mut self, catalog: &[String]) {
		self.open = true;
		self.query.refresh(catalog);
	}

	pub fn set_input_text(&mut self, text: impl Into<String>, catalog: &[String]) {
		self.query.set_input(text, catalog);
	}

	pub fn advance(&mut self) {
		self.query.advance();
	}

	pub fn retreat(&mut self) {
		self.query.retreat();
	}

	/// Remove `value` when selected, append it otherwise. Returns whether the
	/// value is selected afterwards.
	///
	/// The typed text is cleared so the next keystroke filters the full
	/// catalog again. No catalog membership check happens here.
	pub fn toggle(&mut self, value: &str, catalog: &[String]) -> bool {
		let selected = if let Some(position) = self.position(value) {
			self.committed.remove(position);
			false
		} else {
			self.committed.push(value.to_string());
			true
		};
		debug!("multi-select toggle {value:?}: selected={selected}");
		self.query.set_input(String::new(), catalog);
		selected
	}

	/// Toggle the highlighted option. Does nothing when nothing is highlighted.
	pub fn toggle_highlighted(&mut self, catalog: &[String]) -> Option<String> {
		let value = self.query.highlighted()?.to_string();
		self.toggle(&value, catalog);
		Some(value)
	}

	/// Remove a token. Returns `false` when `value` was not selected.
	pub fn remove_token(&mut self, value: &str, catalog: &[String]) -> bool {
		let Some(position) = self.position(value) else {
			return false;
		};
		self.committed.remove(position);
		debug!("multi-select token removed: {value:?}");
		self.query.refresh(catalog);
		true
	}

	/// Pop the most recent selection when the input is empty.
	pub fn backspace_at_empty_input(&mut self, catalog: &[String]) -> Option<String> {
		if !self.query.raw_input().is_empty() {
			return None;
		}
		let popped = self.committed.pop()?;
		debug!("multi-select popped last token: {popped:?}");
		self.query.refresh(catalog);
		Some(popped)
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn committed_values(&self) -> &[String] {
		&self.committed
	}

	/// The earliest selection still committed.
	pub fn first(&self) -> Option<&str> {
		self.committed.first().map(String::as_str)
	}

	pub fn is_selected(&self, option: &str) -> bool {
		self.position(option).is_some()
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn query(&self) -> &ListQuery {
		&self.query
	}

	fn position(&self, value: &str) -> Option<usize> {
		self.committed.iter().position(|entry| entry == value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cuisines() -> Vec<String> {
		["Chinese", "Italian", "Mexican", "North Indian", "Thai"]
			.into_iter()
			.map(String::from)
			.collect()
	}

	#[test]
	fn toggle_appends_in_selection_order() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		assert!(multi.toggle("Thai", &catalog));
		assert!(multi.toggle("Chinese", &catalog));
		assert!(multi.toggle("Mexican", &catalog));
		assert_eq!(multi.committed_values(), ["Thai", "Chinese", "Mexican"]);
		assert_eq!(multi.first(), Some("Thai"));
	}

	#[test]
	fn toggle_twice_restores_prior_state_and_order() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.toggle("Italian", &catalog);
		multi.toggle("Thai", &catalog);
		let before = multi.committed_values().to_vec();

		for value in ["Mexican", "Chinese", "Ethiopian"] {
			multi.toggle(value, &catalog);
			multi.toggle(value, &catalog);
			assert_eq!(multi.committed_values(), before.as_slice());
		}
	}

	#[test]
	fn reselecting_a_removed_value_moves_it_to_the_end() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.toggle("Italian", &catalog);
		multi.toggle("Thai", &catalog);

		multi.toggle("Italian", &catalog);
		multi.toggle("Italian", &catalog);
		assert_eq!(multi.committed_values(), ["Thai", "Italian"]);
	}

	#[test]
	fn toggle_removes_without_disturbing_the_rest() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		for value in ["Thai", "Chinese", "Mexican"] {
			multi.toggle(value, &catalog);
		}
		assert!(!multi.toggle("Chinese", &catalog));
		assert_eq!(multi.committed_values(), ["Thai", "Mexican"]);
	}

	#[test]
	fn toggle_clears_text_and_relists_full_catalog() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.open(&catalog);
		multi.set_input_text("ian", &catalog);
		multi.advance();
		assert_eq!(multi.toggle_highlighted(&catalog).as_deref(), Some("Italian"));

		assert_eq!(multi.query().raw_input(), "");
		assert_eq!(multi.query().visible_options(), catalog.as_slice());
		assert_eq!(multi.query().highlight_index(), None);
		assert!(multi.is_open(), "toggling keeps the list open");
		assert!(multi.is_selected("Italian"));
	}

	#[test]
	fn keyboard_toggle_without_highlight_is_a_no_op() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.open(&catalog);
		assert_eq!(multi.toggle_highlighted(&catalog), None);
		assert!(multi.committed_values().is_empty());
	}

	#[test]
	fn selected_options_stay_filterable() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.toggle("Thai", &catalog);
		multi.set_input_text("th", &catalog);
		assert_eq!(multi.query().visible_options(), ["North Indian", "Thai"]);
	}

	#[test]
	fn remove_token_is_a_no_op_for_unselected_values() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.toggle("Thai", &catalog);
		assert!(!multi.remove_token("Chinese", &catalog));
		assert!(multi.remove_token("Thai", &catalog));
		assert!(multi.committed_values().is_empty());
	}

	#[test]
	fn remove_token_keeps_typed_text() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.toggle("Thai", &catalog);
		multi.set_input_text("ex", &catalog);
		multi.remove_token("Thai", &catalog);
		assert_eq!(multi.query().raw_input(), "ex");
		assert_eq!(multi.query().visible_options(), ["Mexican"]);
	}

	#[test]
	fn backspace_at_empty_input_pops_last_selection() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.toggle("Thai", &catalog);
		multi.toggle("Mexican", &catalog);

		assert_eq!(
			multi.backspace_at_empty_input(&catalog).as_deref(),
			Some("Mexican")
		);
		assert_eq!(multi.committed_values(), ["Thai"]);
	}

	#[test]
	fn backspace_with_text_or_no_tokens_does_nothing() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		assert_eq!(multi.backspace_at_empty_input(&catalog), None);

		multi.toggle("Thai", &catalog);
		multi.set_input_text("m", &catalog);
		assert_eq!(multi.backspace_at_empty_input(&catalog), None);
		assert_eq!(multi.committed_values(), ["Thai"]);
	}

	#[test]
	fn toggle_accepts_values_outside_the_catalog() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		assert!(multi.toggle("Ethiopian", &catalog));
		assert_eq!(multi.committed_values(), ["Ethiopian"]);
	}

	#[test]
	fn close_keeps_committed_values() {
		let catalog = cuisines();
		let mut multi = MultiSelect::new();
		multi.open(&catalog);
		multi.toggle("Thai", &catalog);
		multi.close();
		assert!(!multi.is_open());
		assert_eq!(multi.committed_values(), ["Thai"]);
	}
}
