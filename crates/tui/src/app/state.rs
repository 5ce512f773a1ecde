use log::{debug, info, warn};
use prefpanel_core::{
	DualRange, Handle, MultiSelect, OptionCatalog, QueryObject, RequestAssembler, SingleSelect,
};
use ratatui::layout::{Position, Rect};

use crate::config::PanelConfig;
use crate::input::FieldInput;
use crate::style::StyleConfig;

/// How the panel was left.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelOutcome {
	/// The user submitted; the sparse query is ready to hand off.
	Submitted(QueryObject),
	/// The user quit without submitting.
	Cancelled,
}

/// Focusable fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Area,
	Cuisines,
	PriceMin,
	PriceMax,
	MinRating,
	MaxResults,
	Submit,
}

impl Field {
	pub const ALL: [Field; 7] = [
		Field::Area,
		Field::Cuisines,
		Field::PriceMin,
		Field::PriceMax,
		Field::MinRating,
		Field::MaxResults,
		Field::Submit,
	];

	#[must_use]
	pub fn next(self) -> Self {
		let index = self.position();
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		let index = self.position();
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	/// The dropdown owned by this field, if any.
	#[must_use]
	pub fn dropdown(self) -> ActiveDropdown {
		match self {
			Field::Area => ActiveDropdown::Area,
			Field::Cuisines => ActiveDropdown::Cuisine,
			_ => ActiveDropdown::None,
		}
	}

	/// The price handle edited by this field, if any.
	#[must_use]
	pub fn handle(self) -> Option<Handle> {
		match self {
			Field::PriceMin => Some(Handle::Min),
			Field::PriceMax => Some(Handle::Max),
			_ => None,
		}
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|field| *field == self)
			.unwrap_or_default()
	}
}

/// Which dropdown is open. At most one is open at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveDropdown {
	#[default]
	None,
	Area,
	Cuisine,
}

/// Screen regions recorded by the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
	pub(crate) fields: Vec<(Field, Rect)>,
	pub(crate) dropdown: Option<Rect>,
	pub(crate) options: Vec<(Rect, String)>,
	pub(crate) token_removers: Vec<(Rect, String)>,
}

impl HitAreas {
	pub(crate) fn field_at(&self, position: Position) -> Option<Field> {
		self.fields
			.iter()
			.find(|(_, rect)| rect.contains(position))
			.map(|(field, _)| *field)
	}

	pub(crate) fn field_rect(&self, field: Field) -> Option<Rect> {
		self.fields
			.iter()
			.find(|(candidate, _)| *candidate == field)
			.map(|(_, rect)| *rect)
	}

	pub(crate) fn option_at(&self, position: Position) -> Option<&str> {
		self.options
			.iter()
			.find(|(rect, _)| rect.contains(position))
			.map(|(_, value)| value.as_str())
	}

	pub(crate) fn token_remover_at(&self, position: Position) -> Option<&str> {
		self.token_removers
			.iter()
			.find(|(rect, _)| rect.contains(position))
			.map(|(_, value)| value.as_str())
	}
}

/// Aggregate state of the panel.
///
/// The widgets own their state; the app only routes events to them and keeps
/// the text inputs in step with the widgets' typed text.
pub struct App<'a> {
	pub(crate) catalog: OptionCatalog,
	pub(crate) config: PanelConfig,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) area: SingleSelect,
	pub(crate) cuisines: MultiSelect,
	pub(crate) price: DualRange,
	pub(crate) area_input: FieldInput<'a>,
	pub(crate) cuisine_input: FieldInput<'a>,
	pub(crate) rating_input: FieldInput<'a>,
	pub(crate) results_input: FieldInput<'a>,
	pub(crate) focus: Field,
	pub(crate) active: ActiveDropdown,
	pub(crate) assembler: RequestAssembler,
	pub(crate) status: Option<String>,
	pub(crate) hits: HitAreas,
}

impl<'a> App<'a> {
	/// Build the panel with every filter at its default.
	pub fn new(catalog: OptionCatalog, config: PanelConfig) -> Self {
		let labels = &config.labels;
		let mut app = Self {
			area_input: FieldInput::new(labels.area_placeholder.clone()),
			cuisine_input: FieldInput::new(labels.cuisines_placeholder.clone()),
			rating_input: FieldInput::new("0 to 5"),
			results_input: FieldInput::new("1 to 10"),
			style: StyleConfig::with_theme(config.theme),
			price: DualRange::new(config.price_bounds),
			assembler: RequestAssembler::new(config.malformed),
			area: SingleSelect::new(),
			cuisines: MultiSelect::new(),
			focus: Field::Area,
			active: ActiveDropdown::None,
			status: None,
			hits: HitAreas::default(),
			catalog,
			config,
		};
		app.apply_placeholder_style();
		app.focus_field(Field::Area);
		app
	}

	pub fn catalog(&self) -> &OptionCatalog {
		&self.catalog
	}

	#[must_use]
	pub fn focus(&self) -> Field {
		self.focus
	}

	#[must_use]
	pub fn active_dropdown(&self) -> ActiveDropdown {
		self.active
	}

	pub fn area(&self) -> &SingleSelect {
		&self.area
	}

	pub fn cuisines(&self) -> &MultiSelect {
		&self.cuisines
	}

	pub fn price(&self) -> &DualRange {
		&self.price
	}

	/// Message shown on the status line, if any.
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	/// Move focus, closing a dropdown left behind and opening the one entered.
	pub(crate) fn focus_field(&mut self, field: Field) {
		if self.active != field.dropdown() {
			self.close_dropdown();
		}
		self.focus = field;
		for (input, owner) in [
			(&mut self.area_input, Field::Area),
			(&mut self.cuisine_input, Field::Cuisines),
			(&mut self.rating_input, Field::MinRating),
			(&mut self.results_input, Field::MaxResults),
		] {
			input.set_focused(owner == field);
		}
		self.open_dropdown(field.dropdown());
	}

	/// Open `target`, closing whichever other dropdown is open.
	pub(crate) fn open_dropdown(&mut self, target: ActiveDropdown) {
		if target == ActiveDropdown::None {
			return;
		}
		if self.active != target {
			self.close_dropdown();
		}
		match target {
			ActiveDropdown::Area => self.area.open(self.catalog.areas()),
			ActiveDropdown::Cuisine => self.cuisines.open(self.catalog.cuisines()),
			ActiveDropdown::None => {}
		}
		debug!("dropdown opened: {target:?}");
		self.active = target;
	}

	/// Close the open dropdown. Commits are kept; only the highlight is lost.
	pub(crate) fn close_dropdown(&mut self) {
		match self.active {
			ActiveDropdown::Area => self.area.close(),
			ActiveDropdown::Cuisine => self.cuisines.close(),
			ActiveDropdown::None => return,
		}
		debug!("dropdown closed: {:?}", self.active);
		self.active = ActiveDropdown::None;
	}

	/// Copy the widgets' typed text back into the inputs after a commit,
	/// toggle or clear rewrote it.
	pub(crate) fn sync_inputs(&mut self) {
		self.area_input.set_text(self.area.query().raw_input());
		self.cuisine_input.set_text(self.cuisines.query().raw_input());
	}

	pub(crate) fn commit_area(&mut self, value: &str) {
		self.area.commit(value);
		self.active = ActiveDropdown::None;
		self.sync_inputs();
		self.status = None;
	}

	pub(crate) fn toggle_cuisine(&mut self, value: &str) {
		self.cuisines.toggle(value, self.catalog.cuisines());
		self.sync_inputs();
		self.status = None;
	}

	pub(crate) fn remove_cuisine(&mut self, value: &str) {
		if self.cuisines.remove_token(value, self.catalog.cuisines()) {
			self.sync_inputs();
		}
	}

	pub(crate) fn clear_area(&mut self) {
		self.area.clear(self.catalog.areas());
		self.sync_inputs();
	}

	pub(crate) fn nudge_price(&mut self, handle: Handle, direction: i64) {
		let delta = self.config.price_step.saturating_mul(direction);
		self.price.nudge(handle, delta);
	}

	pub(crate) fn set_price(&mut self, handle: Handle, value: i64) {
		self.price.set(handle, value);
	}

	/// Assemble the query. A rejected scalar keeps the panel open and shows the
	/// reason on the status line.
	pub(crate) fn submit(&mut self) -> Option<PanelOutcome> {
		let result = self.assembler.assemble(
			&self.area,
			&self.cuisines,
			&self.price,
			self.rating_input.text(),
			self.results_input.text(),
		);
		match result {
			Ok(query) => {
				info!("submitting query with {} constraint(s)", query.entries().len());
				Some(PanelOutcome::Submitted(query))
			}
			Err(err) => {
				warn!("submit refused: {err}");
				self.status = Some(err.to_string());
				None
			}
		}
	}

	fn apply_placeholder_style(&mut self) {
		let style = self.style.theme.empty;
		for input in [
			&mut self.area_input,
			&mut self.cuisine_input,
			&mut self.rating_input,
			&mut self.results_input,
		] {
			input.set_placeholder_style(style);
		}
	}
}
