//! Two coupled handles over an inclusive integer interval (the price range).

use log::debug;

use crate::error::RangeError;

/// Inclusive interval the handles live in. Always non-empty: `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds {
	low: i64,
	high: i64,
}

impl RangeBounds {
	pub fn new(low: i64, high: i64) -> Result<Self, RangeError> {
		if low >= high {
			return Err(RangeError::EmptyBounds { low, high });
		}
		Ok(Self { low, high })
	}

	#[must_use]
	pub fn low(self) -> i64 {
		self.low
	}

	#[must_use]
	pub fn high(self) -> i64 {
		self.high
	}

	#[must_use]
	pub fn clamp(self, value: i64) -> i64 {
		value.clamp(self.low, self.high)
	}

	fn percent_of(self, value: i64) -> f64 {
		let span = self.high as f64 - self.low as f64;
		(value as f64 - self.low as f64) / span * 100.0
	}
}

impl Default for RangeBounds {
	/// The price interval of the recommendation service: 100 to 5000.
	fn default() -> Self {
		Self {
			low: 100,
			high: 5000,
		}
	}
}

/// Which of the two handles an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
	Min,
	Max,
}

/// Left offset and width of the selected sub-range, in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillProjection {
	pub left_percent: f64,
	pub width_percent: f64,
}

/// Dual-handle range state.
///
/// Invariant: `bounds.low <= min <= max <= bounds.high`. A handle pushed past
/// the other one trades places with it instead of sticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualRange {
	min: i64,
	max: i64,
	bounds: RangeBounds,
}

impl DualRange {
	/// Both handles start at the outer bounds.
	#[must_use]
	pub fn new(bounds: RangeBounds) -> Self {
		Self {
			min: bounds.low,
			max: bounds.high,
			bounds,
		}
	}

	pub fn set_min(&mut self, value: i64) {
		self.min = self.bounds.clamp(value);
		self.uncross();
	}

	pub fn set_max(&mut self, value: i64) {
		self.max = self.bounds.clamp(value);
		self.uncross();
	}

	/// Set the given handle.
	pub fn set(&mut self, handle: Handle, value: i64) {
		match handle {
			Handle::Min => self.set_min(value),
			Handle::Max => self.set_max(value),
		}
	}

	/// Move a handle by `delta`, saturating at the bounds.
	pub fn nudge(&mut self, handle: Handle, delta: i64) {
		let current = self.value(handle);
		self.set(handle, current.saturating_add(delta));
	}

	#[must_use]
	pub fn value(&self, handle: Handle) -> i64 {
		match handle {
			Handle::Min => self.min,
			Handle::Max => self.max,
		}
	}

	#[must_use]
	pub fn min(&self) -> i64 {
		self.min
	}

	#[must_use]
	pub fn max(&self) -> i64 {
		self.max
	}

	#[must_use]
	pub fn bounds(&self) -> RangeBounds {
		self.bounds
	}

	/// Derived from the handles on every call; never stored.
	#[must_use]
	pub fn fill_projection(&self) -> FillProjection {
		let left = self.bounds.percent_of(self.min);
		let right = self.bounds.percent_of(self.max);
		FillProjection {
			left_percent: left,
			width_percent: right - left,
		}
	}

	/// `max` sits on the absolute ceiling; the upper label becomes open-ended.
	#[must_use]
	pub fn is_at_ceiling(&self) -> bool {
		self.max == self.bounds.high
	}

	/// `min` sits on the absolute floor.
	#[must_use]
	pub fn is_at_floor(&self) -> bool {
		self.min == self.bounds.low
	}

	fn uncross(&mut self) {
		if self.min > self.max {
			debug!("range handles crossed ({} > {}), swapping", self.min, self.max);
			std::mem::swap(&mut self.min, &mut self.max);
		}
	}
}

impl Default for DualRange {
	fn default() -> Self {
		Self::new(RangeBounds::default())
	}
}
