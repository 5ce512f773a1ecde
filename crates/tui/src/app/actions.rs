use anyhow::Result;
use prefpanel_core::{Handle, decrement_rating, increment_rating};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::state::{ActiveDropdown, App, Field, PanelOutcome};

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user leaves.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PanelOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return Ok(Some(PanelOutcome::Cancelled)),
			KeyCode::Char('s') if ctrl => return Ok(self.submit()),
			KeyCode::Tab => self.focus_field(self.focus.next()),
			KeyCode::BackTab => self.focus_field(self.focus.previous()),
			KeyCode::Esc => {
				if self.active == ActiveDropdown::None {
					return Ok(Some(PanelOutcome::Cancelled));
				}
				self.close_dropdown();
			}
			_ => match self.focus {
				Field::Area => self.handle_area_key(key),
				Field::Cuisines => self.handle_cuisine_key(key),
				Field::PriceMin => self.handle_price_key(Handle::Min, key),
				Field::PriceMax => self.handle_price_key(Handle::Max, key),
				Field::MinRating => return Ok(self.handle_rating_key(key)),
				Field::MaxResults => {
					if key.code == KeyCode::Enter {
						return Ok(self.submit());
					}
					self.results_input.input(key);
				}
				Field::Submit => {
					if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
						return Ok(self.submit());
					}
				}
			},
		}
		Ok(None)
	}

	fn handle_area_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Down => {
				if self.active != ActiveDropdown::Area {
					self.open_dropdown(ActiveDropdown::Area);
				}
				self.area.advance();
			}
			KeyCode::Up => {
				if self.active == ActiveDropdown::Area {
					self.area.retreat();
				}
			}
			KeyCode::Enter => {
				if self.active != ActiveDropdown::Area {
					self.open_dropdown(ActiveDropdown::Area);
				} else if let Some(value) = self.area.query().highlighted().map(str::to_string) {
					self.commit_area(&value);
				}
			}
			KeyCode::Delete => self.clear_area(),
			_ => {
				if self.area_input.input(key) {
					self.area
						.set_input_text(self.area_input.text(), self.catalog.areas());
					self.open_dropdown(ActiveDropdown::Area);
				}
			}
		}
	}

	fn handle_cuisine_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Down => {
				if self.active != ActiveDropdown::Cuisine {
					self.open_dropdown(ActiveDropdown::Cuisine);
				}
				self.cuisines.advance();
			}
			KeyCode::Up => {
				if self.active == ActiveDropdown::Cuisine {
					self.cuisines.retreat();
				}
			}
			KeyCode::Enter => {
				if self.active != ActiveDropdown::Cuisine {
					self.open_dropdown(ActiveDropdown::Cuisine);
				} else if let Some(value) = self.cuisines.query().highlighted().map(str::to_string)
				{
					self.toggle_cuisine(&value);
				}
			}
			KeyCode::Backspace if self.cuisine_input.text().is_empty() => {
				if self
					.cuisines
					.backspace_at_empty_input(self.catalog.cuisines())
					.is_some()
				{
					self.sync_inputs();
				}
			}
			_ => {
				if self.cuisine_input.input(key) {
					self.cuisines
						.set_input_text(self.cuisine_input.text(), self.catalog.cuisines());
					self.open_dropdown(ActiveDropdown::Cuisine);
				}
			}
		}
	}

	fn handle_price_key(&mut self, handle: Handle, key: KeyEvent) {
		let bounds = self.price.bounds();
		match key.code {
			KeyCode::Left => self.nudge_price(handle, -1),
			KeyCode::Right => self.nudge_price(handle, 1),
			KeyCode::Home => self.set_price(handle, bounds.low()),
			KeyCode::End => self.set_price(handle, bounds.high()),
			_ => {}
		}
	}

	fn handle_rating_key(&mut self, key: KeyEvent) -> Option<PanelOutcome> {
		match key.code {
			KeyCode::Enter => return self.submit(),
			KeyCode::Up | KeyCode::Char('+') => {
				let next = increment_rating(self.rating_input.text());
				self.rating_input.set_text(&next);
			}
			KeyCode::Down | KeyCode::Char('-') => {
				let next = decrement_rating(self.rating_input.text());
				self.rating_input.set_text(&next);
			}
			_ => {
				self.rating_input.input(key);
			}
		}
		None
	}

	/// Process a mouse event. Clicking the submit button can end the session.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PanelOutcome> {
		let position = Position::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::ScrollDown if self.dropdown_contains(position) => {
				self.advance_active();
				None
			}
			MouseEventKind::ScrollUp if self.dropdown_contains(position) => {
				self.retreat_active();
				None
			}
			MouseEventKind::Down(MouseButton::Left) => self.click(position),
			_ => None,
		}
	}

	fn click(&mut self, position: Position) -> Option<PanelOutcome> {
		// An open list covers whatever is drawn beneath it.
		if self.active != ActiveDropdown::None {
			if let Some(value) = self.hits.option_at(position).map(str::to_string) {
				match self.active {
					ActiveDropdown::Area => self.commit_area(&value),
					ActiveDropdown::Cuisine => self.toggle_cuisine(&value),
					ActiveDropdown::None => {}
				}
				return None;
			}
			if self.dropdown_contains(position) {
				return None;
			}
		}

		if let Some(value) = self.hits.token_remover_at(position).map(str::to_string) {
			self.remove_cuisine(&value);
			return None;
		}

		if self.active != ActiveDropdown::None {
			if self.owner_contains(position) {
				return None;
			}
			self.close_dropdown();
		}

		let field = self.hits.field_at(position)?;
		if field == Field::Submit {
			self.focus_field(field);
			return self.submit();
		}
		self.focus_field(field);
		None
	}

	fn dropdown_contains(&self, position: Position) -> bool {
		self.active != ActiveDropdown::None
			&& self
				.hits
				.dropdown
				.is_some_and(|rect| rect.contains(position))
	}

	/// Inside the field that owns the open dropdown.
	fn owner_contains(&self, position: Position) -> bool {
		let owner = match self.active {
			ActiveDropdown::Area => Field::Area,
			ActiveDropdown::Cuisine => Field::Cuisines,
			ActiveDropdown::None => return false,
		};
		self.hits
			.field_rect(owner)
			.is_some_and(|rect| rect.contains(position))
	}

	fn advance_active(&mut self) {
		match self.active {
			ActiveDropdown::Area => self.area.advance(),
			ActiveDropdown::Cuisine => self.cuisines.advance(),
			ActiveDropdown::None => {}
		}
	}

	fn retreat_active(&mut self) {
		match self.active {
			ActiveDropdown::Area => self.area.retreat(),
			ActiveDropdown::Cuisine => self.cuisines.retreat(),
			ActiveDropdown::None => {}
		}
	}
}
