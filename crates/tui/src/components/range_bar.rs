use prefpanel_core::{DualRange, FillProjection, Handle};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

const TRACK: char = '─';
const FILL: char = '━';
const KNOB: char = '●';

/// Lower and upper label. The upper one reads `<cur><high>+` while the max
/// handle sits on the ceiling.
#[must_use]
pub fn price_labels(range: &DualRange, currency: &str) -> (String, String) {
	let lower = format!("{currency}{}", range.min());
	let upper = if range.is_at_ceiling() {
		format!("{currency}{}+", range.bounds().high())
	} else {
		format!("{currency}{}", range.max())
	};
	(lower, upper)
}

/// Track columns of the two handles for a track `width` cells wide.
fn handle_columns(projection: FillProjection, width: usize) -> (usize, usize) {
	let last = width.saturating_sub(1) as f64;
	let column = |percent: f64| (percent.clamp(0.0, 100.0) / 100.0 * last).round() as usize;
	(
		column(projection.left_percent),
		column(projection.left_percent + projection.width_percent),
	)
}

/// The plain glyphs of the track, one per cell.
#[must_use]
pub fn track_symbols(projection: FillProjection, width: usize) -> String {
	if width == 0 {
		return String::new();
	}
	let (low, high) = handle_columns(projection, width);
	(0..width)
		.map(|column| {
			if column == low || column == high {
				KNOB
			} else if column > low && column < high {
				FILL
			} else {
				TRACK
			}
		})
		.collect()
}

/// Draw the labels row and the track row. `active` is the focused handle.
pub fn render_range_bar(
	frame: &mut Frame,
	area: Rect,
	range: &DualRange,
	currency: &str,
	active: Option<Handle>,
	theme: &Theme,
) {
	let [labels_area, track_area] =
		Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

	let (lower, upper) = price_labels(range, currency);
	let label_style = |handle: Handle| {
		if active == Some(handle) {
			theme.active_handle_style()
		} else {
			theme.label
		}
	};
	let [lower_area, upper_area] =
		Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(labels_area);
	frame.render_widget(
		Paragraph::new(Span::styled(lower, label_style(Handle::Min))),
		lower_area,
	);
	frame.render_widget(
		Paragraph::new(Span::styled(upper, label_style(Handle::Max)))
			.alignment(ratatui::layout::Alignment::Right),
		upper_area,
	);

	let width = usize::from(track_area.width);
	let (low, high) = handle_columns(range.fill_projection(), width);
	let spans: Vec<Span> = track_symbols(range.fill_projection(), width)
		.chars()
		.enumerate()
		.map(|(column, symbol)| {
			let style = match symbol {
				KNOB if column == low => knob_style(active, Handle::Min, theme),
				KNOB if column == high => knob_style(active, Handle::Max, theme),
				FILL => theme.fill,
				_ => theme.track,
			};
			Span::styled(symbol.to_string(), style)
		})
		.collect();
	frame.render_widget(Paragraph::new(Line::from(spans)), track_area);
}

fn knob_style(active: Option<Handle>, handle: Handle, theme: &Theme) -> ratatui::style::Style {
	if active == Some(handle) {
		theme.active_handle_style()
	} else {
		theme.handle
	}
}
