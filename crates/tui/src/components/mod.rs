//! UI building blocks used by the panel renderer.

/// Cuisine tokens with their remove buttons.
pub mod chips;
/// Option list shown under an open dropdown field.
pub mod dropdown;
/// Price track and labels.
pub mod range_bar;

pub use chips::render_chips;
pub use dropdown::{DropdownContext, dropdown_area, render_dropdown};
pub use range_bar::{price_labels, render_range_bar, track_symbols};
