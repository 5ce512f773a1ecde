pub(crate) mod layout;

use layout::PanelLayout;
use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{ActiveDropdown, App, Field, HitAreas};
use crate::components::{
	DropdownContext, dropdown_area, render_chips, render_dropdown, render_range_bar,
};
use crate::input::FieldInput;

const KEY_HINTS: &str =
	"Tab next · ↑↓ browse · Enter pick · Del clear area · Ctrl+S submit · Esc quit";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let layout = PanelLayout::new(area);
		let mut hits = HitAreas::default();

		self.render_header(frame, layout.header);
		self.render_text_field(frame, layout.area, Field::Area);
		self.render_cuisines(frame, layout.cuisines, &mut hits);
		self.render_price(frame, layout.price);
		self.render_text_field(frame, layout.rating, Field::MinRating);
		self.render_text_field(frame, layout.results, Field::MaxResults);
		self.render_submit(frame, layout.submit);
		self.render_status(frame, layout.status);

		hits.fields = vec![
			(Field::Area, layout.area),
			(Field::Cuisines, layout.cuisines),
			(Field::PriceMin, left_half(layout.price)),
			(Field::PriceMax, right_half(layout.price)),
			(Field::MinRating, layout.rating),
			(Field::MaxResults, layout.results),
			(Field::Submit, layout.submit),
		];

		let anchor = match self.active {
			ActiveDropdown::Area => Some(layout.area),
			ActiveDropdown::Cuisine => Some(layout.cuisines),
			ActiveDropdown::None => None,
		};
		if let Some(anchor) = anchor {
			self.render_open_dropdown(frame, anchor, area, &mut hits);
		}

		self.hits = hits;
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let stats = format!(
			"  {} areas · {} cuisines",
			self.catalog.areas().len(),
			self.catalog.cuisines().len()
		);
		let line = Line::from(vec![
			Span::styled(self.config.title.as_str(), theme.header),
			Span::styled(stats, theme.hint),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}

	fn field_block(&self, field: Field, title: &str) -> Block<'static> {
		let theme = &self.style.theme;
		let price_focused = field.handle().is_some() && self.focus.handle().is_some();
		let border = if self.focus == field || price_focused {
			theme.focus
		} else {
			theme.border
		};
		Block::default()
			.borders(Borders::ALL)
			.border_style(border)
			.title(Span::styled(title.to_string(), theme.label))
	}

	fn render_text_field(&self, frame: &mut Frame, area: Rect, field: Field) {
		let labels = &self.config.labels;
		let (title, input): (&str, &FieldInput<'_>) = match field {
			Field::Area => (labels.area.as_str(), &self.area_input),
			Field::MinRating => (labels.min_rating.as_str(), &self.rating_input),
			Field::MaxResults => (labels.max_results.as_str(), &self.results_input),
			_ => return,
		};
		let block = self.field_block(field, title);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		frame.render_widget(input.widget(), inner);
	}

	fn render_cuisines(&self, frame: &mut Frame, area: Rect, hits: &mut HitAreas) {
		let block = self.field_block(Field::Cuisines, &self.config.labels.cuisines);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.height == 0 {
			return;
		}
		let chips_area = Rect { height: 1, ..inner };
		hits.token_removers = render_chips(
			frame,
			chips_area,
			self.cuisines.committed_values(),
			&self.style.theme,
		);
		if inner.height > 1 {
			let input_area = Rect {
				y: inner.y + 1,
				height: inner.height - 1,
				..inner
			};
			frame.render_widget(self.cuisine_input.widget(), input_area);
		}
	}

	fn render_price(&self, frame: &mut Frame, area: Rect) {
		let block = self.field_block(Field::PriceMin, &self.config.labels.price);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		render_range_bar(
			frame,
			inner,
			&self.price,
			&self.config.currency,
			self.focus.handle(),
			&self.style.theme,
		);
	}

	fn render_submit(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let style = if self.focus == Field::Submit {
			theme.button_focus_style()
		} else {
			theme.button
		};
		let label = format!("[ {} ]", self.config.labels.submit);
		frame.render_widget(
			Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
			area,
		);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let line = match &self.status {
			Some(message) => Span::styled(message.as_str(), theme.error),
			None => Span::styled(KEY_HINTS, theme.hint),
		};
		frame.render_widget(Paragraph::new(line), area);
	}

	fn render_open_dropdown(
		&self,
		frame: &mut Frame,
		anchor: Rect,
		bounds: Rect,
		hits: &mut HitAreas,
	) {
		let theme = &self.style.theme;
		let query = match self.active {
			ActiveDropdown::Area => self.area.query(),
			ActiveDropdown::Cuisine => self.cuisines.query(),
			ActiveDropdown::None => return,
		};
		let is_selected = |option: &str| match self.active {
			ActiveDropdown::Area => self.area.is_selected(option),
			_ => self.cuisines.is_selected(option),
		};
		let options = query.visible_options();
		let list_area = dropdown_area(anchor, bounds, options.len());
		let ctx = DropdownContext {
			options,
			highlight: query.highlight_index(),
			selected: &is_selected,
			theme,
		};
		hits.options = render_dropdown(frame, list_area, ctx);
		hits.dropdown = Some(list_area);
	}
}

fn left_half(area: Rect) -> Rect {
	Rect {
		width: area.width / 2,
		..area
	}
}

fn right_half(area: Rect) -> Rect {
	let half = area.width / 2;
	Rect {
		x: area.x + half,
		width: area.width - half,
		..area
	}
}
