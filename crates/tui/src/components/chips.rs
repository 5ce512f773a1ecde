use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const REMOVE_GLYPH: &str = "×";

/// Draw one token per value on a single row. Returns the screen cell of each
/// token's remove glyph. Tokens that do not fit are summarised as `+N`.
pub fn render_chips(
	frame: &mut Frame,
	area: Rect,
	values: &[String],
	theme: &Theme,
) -> Vec<(Rect, String)> {
	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}
	if values.is_empty() {
		let empty = Paragraph::new("Any cuisine").style(theme.empty);
		frame.render_widget(empty, area);
		return Vec::new();
	}

	let available = usize::from(area.width);
	let mut spans = Vec::new();
	let mut removers = Vec::new();
	let mut used = 0usize;

	for (index, value) in values.iter().enumerate() {
		let chip = format!(" {value} {REMOVE_GLYPH} ");
		let chip_width = chip.width();
		let remaining = values.len() - index;
		let overflow = format!("+{remaining}");
		let reserve = if remaining > 1 { overflow.width() + 1 } else { 0 };

		if used + chip_width + reserve > available {
			if used + overflow.width() <= available {
				spans.push(Span::styled(overflow, theme.hint));
			}
			break;
		}

		let glyph_offset = used + 1 + value.width() + 1;
		let x = area.x + u16::try_from(glyph_offset).unwrap_or(u16::MAX);
		removers.push((Rect::new(x, area.y, 1, 1), value.clone()));

		spans.push(Span::styled(chip, theme.chip));
		spans.push(Span::raw(" "));
		used += chip_width + 1;
	}

	frame.render_widget(Paragraph::new(Line::from(spans)), area);
	removers
}
