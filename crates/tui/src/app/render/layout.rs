use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions of the panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PanelLayout {
	pub(crate) header: Rect,
	pub(crate) area: Rect,
	pub(crate) cuisines: Rect,
	pub(crate) price: Rect,
	pub(crate) rating: Rect,
	pub(crate) results: Rect,
	pub(crate) submit: Rect,
	pub(crate) status: Rect,
}

impl PanelLayout {
	pub(crate) fn new(frame_area: Rect) -> Self {
		let [header, area, cuisines, price, scalars, submit, _, status] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Length(4),
			Constraint::Length(4),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(frame_area);
		let [rating, results] =
			Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(scalars);
		let [submit, _] =
			Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(submit);

		Self {
			header,
			area,
			cuisines,
			price,
			rating,
			results,
			submit,
			status,
		}
	}
}
