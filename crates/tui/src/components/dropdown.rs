use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::style::Theme;

/// Rows shown before the list starts scrolling.
pub const MAX_VISIBLE_OPTIONS: u16 = 6;

const SELECTED_MARKER: &str = "✓ ";
const UNSELECTED_MARKER: &str = "  ";

pub struct DropdownContext<'a> {
	pub options: &'a [String],
	pub highlight: Option<usize>,
	/// Committed values, marked independently of the highlight.
	pub selected: &'a dyn Fn(&str) -> bool,
	pub theme: &'a Theme,
}

/// Place the list directly under `anchor`, clipped to `bounds`.
#[must_use]
pub fn dropdown_area(anchor: Rect, bounds: Rect, option_count: usize) -> Rect {
	let rows = u16::try_from(option_count)
		.unwrap_or(u16::MAX)
		.clamp(1, MAX_VISIBLE_OPTIONS);
	let top = anchor.y.saturating_add(anchor.height);
	let bottom = bounds.y.saturating_add(bounds.height);
	let height = rows.saturating_add(2).min(bottom.saturating_sub(top));
	Rect::new(anchor.x, top, anchor.width, height)
}

/// Draw the list and return the screen row of every option that is visible.
pub fn render_dropdown(
	frame: &mut Frame,
	area: Rect,
	ctx: DropdownContext<'_>,
) -> Vec<(Rect, String)> {
	if area.height == 0 {
		return Vec::new();
	}
	frame.render_widget(Clear, area);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(ctx.theme.focus);
	let inner = block.inner(area);

	if ctx.options.is_empty() {
		let empty = Paragraph::new("No matches")
			.style(ctx.theme.empty)
			.block(block);
		frame.render_widget(empty, area);
		return Vec::new();
	}

	let items: Vec<ListItem> = ctx
		.options
		.iter()
		.map(|option| {
			let marker = if (ctx.selected)(option) {
				Span::styled(SELECTED_MARKER, ctx.theme.selected)
			} else {
				Span::raw(UNSELECTED_MARKER)
			};
			ListItem::new(Line::from(vec![marker, Span::raw(option.as_str())]))
		})
		.collect();

	let list = List::new(items)
		.block(block)
		.highlight_style(ctx.theme.row_highlight);
	let mut state = ListState::default().with_selected(ctx.highlight);
	frame.render_stateful_widget(list, area, &mut state);

	let first = state.offset();
	ctx.options
		.iter()
		.enumerate()
		.skip(first)
		.take(usize::from(inner.height))
		.map(|(index, option)| {
			let row = inner.y + u16::try_from(index - first).unwrap_or_default();
			(Rect::new(inner.x, row, inner.width, 1), option.clone())
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn options(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn list_hangs_below_its_field() {
		let anchor = Rect::new(2, 1, 30, 3);
		let bounds = Rect::new(0, 0, 40, 30);
		assert_eq!(dropdown_area(anchor, bounds, 3), Rect::new(2, 4, 30, 5));
		assert_eq!(dropdown_area(anchor, bounds, 40), Rect::new(2, 4, 30, 8));
		assert_eq!(dropdown_area(anchor, bounds, 0), Rect::new(2, 4, 30, 3));
	}

	#[test]
	fn list_is_clipped_at_the_bottom_edge() {
		let anchor = Rect::new(0, 20, 30, 3);
		let bounds = Rect::new(0, 0, 40, 26);
		assert_eq!(dropdown_area(anchor, bounds, 10).height, 3);
	}

	#[test]
	fn scrolled_list_reports_only_visible_rows() {
		let values = options(&["A", "B", "C", "D", "E", "F", "G", "H"]);
		let theme = Theme::default();
		let selected = |value: &str| value == "H";
		let mut terminal = Terminal::new(TestBackend::new(20, 8)).expect("terminal");
		let mut rows = Vec::new();
		terminal
			.draw(|frame| {
				let ctx = DropdownContext {
					options: &values,
					highlight: Some(7),
					selected: &selected,
					theme: &theme,
				};
				rows = render_dropdown(frame, frame.area(), ctx);
			})
			.expect("draw");

		assert_eq!(rows.len(), 6);
		let last = rows.last().expect("visible rows");
		assert_eq!(last.1, "H");
		assert_eq!(last.0.y, 6);

		let buffer = terminal.backend().buffer();
		let row: String = (0..20).map(|x| buffer[(x, 6)].symbol()).collect();
		assert!(row.contains("✓ H"), "row: {row:?}");
	}
}
