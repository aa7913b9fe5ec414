use crate::document::Document;
use crate::element::NodeId;
use crate::geometry::Margin;

/// Root margin and threshold of an [`IntersectionObserver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
	/// Grows (positive) or shrinks (negative) the viewport before testing.
	pub root_margin: Margin,
	/// Fraction of the target's height that must be inside the root.
	pub threshold: f64,
}

impl Default for ObserverOptions {
	fn default() -> Self {
		Self {
			root_margin: Margin::default(),
			threshold: 0.0,
		}
	}
}

/// Viewport intersection tracking for a set of targets.
///
/// Targets are tested against the document's current layout and scroll
/// offset. Unrendered targets never intersect.
#[derive(Debug, Clone, Default)]
pub struct IntersectionObserver {
	options: ObserverOptions,
	targets: Vec<NodeId>,
}

impl IntersectionObserver {
	pub fn new(options: ObserverOptions) -> Self {
		Self {
			options,
			targets: Vec::new(),
		}
	}

	pub fn options(&self) -> ObserverOptions {
		self.options
	}

	pub fn observe(&mut self, node: NodeId) {
		if !self.targets.contains(&node) {
			self.targets.push(node);
		}
	}

	pub fn unobserve(&mut self, node: NodeId) {
		self.targets.retain(|&n| n != node);
	}

	pub fn disconnect(&mut self) {
		self.targets.clear();
	}

	pub fn is_observing(&self, node: NodeId) -> bool {
		self.targets.contains(&node)
	}

	pub fn targets(&self) -> &[NodeId] {
		&self.targets
	}

	/// Observed targets that currently intersect the root, in observation order.
	pub fn intersecting(&self, doc: &Document) -> Vec<NodeId> {
		self.targets
			.iter()
			.copied()
			.filter(|&node| self.intersects(doc, node))
			.collect()
	}

	fn intersects(&self, doc: &Document, node: NodeId) -> bool {
		let Some(rect) = doc.element(node).rect else {
			return false;
		};
		let margin = self.options.root_margin;
		let root_top = doc.scroll_y() - margin.top;
		let root_bottom = doc.scroll_y() + doc.viewport().height + margin.bottom;
		if rect.height <= 0.0 {
			return rect.top >= root_top && rect.top <= root_bottom;
		}
		let overlap = rect.vertical_overlap(root_top, root_bottom);
		overlap > 0.0 && overlap / rect.height >= self.options.threshold
	}
}
