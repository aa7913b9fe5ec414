use serde::Deserialize;

/// Axis-aligned box in document coordinates (pixels from the top of the page).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self { left, top, width, height }
	}

	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}

	/// Vertical overlap with the span `[top, bottom]`.
	pub fn vertical_overlap(&self, top: f64, bottom: f64) -> f64 {
		(self.bottom().min(bottom) - self.top.max(top)).max(0.0)
	}
}

/// Visible area of the window.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 1280.0,
			height: 800.0,
		}
	}
}

/// CSS-style margin, positive values grow the box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margin {
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub left: f64,
}

impl Margin {
	pub const fn uniform(value: f64) -> Self {
		Self {
			top: value,
			right: value,
			bottom: value,
			left: value,
		}
	}

	pub const fn bottom(value: f64) -> Self {
		Self {
			top: 0.0,
			right: 0.0,
			bottom: value,
			left: 0.0,
		}
	}
}
