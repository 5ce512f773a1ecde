//! Stepper for the minimum-rating text field.
//!
//! The field stays free text; the stepper only rewrites it. Parsing for the
//! query happens in the assembler.

pub const RATING_FLOOR: f64 = 0.0;
pub const RATING_CEILING: f64 = 5.0;
pub const RATING_STEP: f64 = 0.5;

/// Raise the rating text by one step, clamped to the ceiling.
pub fn increment_rating(raw: &str) -> String {
	step(raw, RATING_STEP)
}

/// Lower the rating text by one step, clamped to the floor.
pub fn decrement_rating(raw: &str) -> String {
	step(raw, -RATING_STEP)
}

/// Unparsable or empty text counts as the floor.
fn step(raw: &str, delta: f64) -> String {
	let current = raw
		.trim()
		.parse::<f64>()
		.ok()
		.filter(|value| value.is_finite())
		.unwrap_or(RATING_FLOOR);
	let next = (current + delta).clamp(RATING_FLOOR, RATING_CEILING);
	format!("{next}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn steps_by_half_points() {
		assert_eq!(increment_rating("3.5"), "4");
		assert_eq!(increment_rating("4"), "4.5");
		assert_eq!(decrement_rating("4"), "3.5");
	}

	#[test]
	fn clamps_to_the_rating_scale() {
		assert_eq!(increment_rating("5"), "5");
		assert_eq!(increment_rating("4.8"), "5");
		assert_eq!(decrement_rating("0"), "0");
		assert_eq!(decrement_rating("0.2"), "0");
	}

	#[test]
	fn empty_or_garbage_counts_as_zero() {
		assert_eq!(increment_rating(""), "0.5");
		assert_eq!(increment_rating("  "), "0.5");
		assert_eq!(increment_rating("four"), "0.5");
		assert_eq!(decrement_rating("NaN"), "0");
	}
}
