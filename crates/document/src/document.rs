use rustc_hash::FxHashMap;

use crate::element::{Element, NodeId};
use crate::geometry::{Rect, Viewport};

#[cfg(test)]
mod tests;

/// How a programmatic scroll animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
	Auto,
	Smooth,
}

/// A programmatic scroll issued by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
	pub top: f64,
	pub behavior: ScrollBehavior,
}

/// Arena-backed element tree plus window state.
#[derive(Debug, Clone)]
pub struct Document {
	nodes: Vec<Element>,
	by_id: FxHashMap<String, NodeId>,
	viewport: Viewport,
	scroll_y: f64,
	focused: Option<NodeId>,
	scroll_log: Vec<ScrollRequest>,
	/// Slots of removed elements, reused by [`Document::append`].
	free: Vec<NodeId>,
}

/// Programmatic scrolls kept by [`Document::scroll_requests`].
pub const SCROLL_LOG_LIMIT: usize = 64;

impl Default for Document {
	fn default() -> Self {
		Self::new(Viewport::default())
	}
}

impl Document {
	/// Creates a document holding only the `body` root.
	pub fn new(viewport: Viewport) -> Self {
		Self {
			nodes: vec![Element::new("body")],
			by_id: FxHashMap::default(),
			viewport,
			scroll_y: 0.0,
			focused: None,
			scroll_log: Vec::new(),
			free: Vec::new(),
		}
	}

	pub const fn root(&self) -> NodeId {
		NodeId(0)
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn set_viewport(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.layout();
	}

	/// Appends `element` as the last child of `parent`.
	///
	/// The first element registered under an id wins lookups, as in the browser.
	pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
		element.parent = Some(parent);
		element.children.clear();
		let node = match self.free.pop() {
			Some(slot) => {
				self.nodes[slot.0] = element;
				slot
			}
			None => {
				self.nodes.push(element);
				NodeId(self.nodes.len() - 1)
			}
		};
		if let Some(id) = &self.nodes[node.0].id {
			self.by_id.entry(id.clone()).or_insert(node);
		}
		self.nodes[parent.0].children.push(node);
		node
	}

	/// Detaches `node` and its subtree. Their ids and arena slots become free
	/// for reuse, so a `NodeId` held past removal may later name a new element.
	pub fn remove(&mut self, node: NodeId) {
		if node == self.root() || !self.is_attached(node) {
			return;
		}
		if let Some(parent) = self.nodes[node.0].parent.take() {
			self.nodes[parent.0].children.retain(|&c| c != node);
		}
		for n in std::iter::once(node).chain(self.descendants(node)) {
			if let Some(id) = &self.nodes[n.0].id
				&& self.by_id.get(id) == Some(&n)
			{
				self.by_id.remove(id);
			}
			self.nodes[n.0].rect = None;
			self.free.push(n);
		}
		if self.focused.is_some_and(|f| !self.is_attached(f)) {
			self.focused = None;
		}
	}

	pub fn element(&self, node: NodeId) -> &Element {
		&self.nodes[node.0]
	}

	pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
		&mut self.nodes[node.0]
	}

	pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
		self.by_id.get(id).copied()
	}

	pub fn is_attached(&self, node: NodeId) -> bool {
		let mut current = node;
		loop {
			if current == self.root() {
				return true;
			}
			match self.nodes[current.0].parent {
				Some(parent) => current = parent,
				None => return false,
			}
		}
	}

	/// Pre-order descendants of `node`, excluding `node` itself.
	pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
		let mut out = Vec::new();
		let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
		while let Some(n) = stack.pop() {
			out.push(n);
			stack.extend(self.nodes[n.0].children.iter().rev().copied());
		}
		out
	}

	/// Attached elements carrying `class`, in document order.
	pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
		self.descendants(self.root())
			.into_iter()
			.filter(|&n| self.nodes[n.0].has_class(class))
			.collect()
	}

	/// First descendant of `node` matching `pred`, in document order.
	pub fn find_descendant(&self, node: NodeId, pred: impl Fn(&Element) -> bool) -> Option<NodeId> {
		self.descendants(node).into_iter().find(|&n| pred(&self.nodes[n.0]))
	}

	pub fn descendant_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
		self.find_descendant(node, |el| el.has_class(class))
	}

	pub fn descendant_with_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
		self.find_descendant(node, |el| el.tag == tag)
	}

	/// Nearest inclusive ancestor of `node` carrying `class`.
	pub fn closest_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
		let mut current = Some(node);
		while let Some(n) = current {
			if self.nodes[n.0].has_class(class) {
				return Some(n);
			}
			current = self.nodes[n.0].parent;
		}
		None
	}

	/// First anchor in the page whose `href` equals `href`.
	pub fn find_anchor(&self, href: &str) -> Option<NodeId> {
		self.find_descendant(self.root(), |el| el.tag == "a" && el.attr("href") == Some(href))
	}

	pub fn has_class(&self, node: NodeId, class: &str) -> bool {
		self.nodes[node.0].has_class(class)
	}

	pub fn add_class(&mut self, node: NodeId, class: &str) {
		self.nodes[node.0].classes.add(class);
	}

	pub fn remove_class(&mut self, node: NodeId, class: &str) {
		self.nodes[node.0].classes.remove(class);
	}

	pub fn toggle_class(&mut self, node: NodeId, class: &str, force: bool) {
		self.nodes[node.0].classes.toggle(class, force);
	}

	pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
		self.nodes[node.0].attr(name)
	}

	pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
		self.nodes[node.0].attrs.insert(name.to_owned(), value.into());
	}

	pub fn remove_attr(&mut self, node: NodeId, name: &str) {
		self.nodes[node.0].attrs.remove(name);
	}

	pub fn text(&self, node: NodeId) -> &str {
		&self.nodes[node.0].text
	}

	pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
		self.nodes[node.0].text = text.into();
	}

	pub fn value(&self, node: NodeId) -> &str {
		&self.nodes[node.0].value
	}

	pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
		self.nodes[node.0].value = value.into();
	}

	pub fn focused(&self) -> Option<NodeId> {
		self.focused
	}

	pub fn focus(&mut self, node: NodeId) {
		self.focused = Some(node);
	}

	pub fn blur(&mut self) -> Option<NodeId> {
		self.focused.take()
	}

	pub fn scroll_y(&self) -> f64 {
		self.scroll_y
	}

	/// Sets the scroll offset as a user scroll would, clamped to the scrollable range.
	pub fn set_scroll_y(&mut self, top: f64) {
		self.layout();
		self.scroll_y = top.clamp(0.0, self.max_scroll());
	}

	/// Programmatic `window.scrollTo`. Smooth scrolls land immediately in a headless page.
	pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
		self.set_scroll_y(top);
		self.scroll_log.push(ScrollRequest { top, behavior });
		if self.scroll_log.len() > SCROLL_LOG_LIMIT {
			let excess = self.scroll_log.len() - SCROLL_LOG_LIMIT;
			self.scroll_log.drain(..excess);
		}
	}

	/// The most recent programmatic scrolls, oldest first, up to
	/// [`SCROLL_LOG_LIMIT`].
	pub fn scroll_requests(&self) -> &[ScrollRequest] {
		&self.scroll_log
	}

	pub fn document_height(&self) -> f64 {
		self.nodes[0].rect.map_or(0.0, |r| r.height)
	}

	fn max_scroll(&self) -> f64 {
		(self.document_height() - self.viewport.height).max(0.0)
	}

	/// Whether CSS would render `node`: not `hidden`, and not an inactive `page`.
	pub fn is_displayed(&self, node: NodeId) -> bool {
		let el = &self.nodes[node.0];
		!(el.has_class("hidden") || (el.has_class("page") && !el.has_class("active")))
	}

	/// Recomputes block layout: every rendered element stacks its children
	/// vertically below its own intrinsic height.
	pub fn layout(&mut self) {
		let width = self.viewport.width;
		self.layout_node(self.root(), 0.0, width);
	}

	fn layout_node(&mut self, node: NodeId, top: f64, width: f64) -> f64 {
		if !self.is_displayed(node) {
			self.clear_rects(node);
			return 0.0;
		}
		let mut height = self.nodes[node.0].intrinsic_height;
		let children = self.nodes[node.0].children.clone();
		for child in children {
			height += self.layout_node(child, top + height, width);
		}
		self.nodes[node.0].rect = Some(Rect::new(0.0, top, width, height));
		height
	}

	fn clear_rects(&mut self, node: NodeId) {
		self.nodes[node.0].rect = None;
		for n in self.descendants(node) {
			self.nodes[n.0].rect = None;
		}
	}

	/// Serializes `node` and its subtree as HTML.
	pub fn outer_html(&self, node: NodeId) -> String {
		let mut out = String::new();
		self.write_html(node, &mut out);
		out
	}

	fn write_html(&self, node: NodeId, out: &mut String) {
		let el = &self.nodes[node.0];
		out.push('<');
		out.push_str(&el.tag);
		if let Some(id) = &el.id {
			push_attr(out, "id", id);
		}
		if !el.classes.is_empty() {
			push_attr(out, "class", &el.classes.to_string());
		}
		for (name, value) in &el.attrs {
			push_attr(out, name, value);
		}
		if el.disabled {
			out.push_str(" disabled");
		}
		out.push('>');
		if matches!(el.tag.as_str(), "img" | "input") {
			return;
		}
		push_escaped(out, &el.text);
		for &child in &el.children {
			self.write_html(child, out);
		}
		out.push_str("</");
		out.push_str(&el.tag);
		out.push('>');
	}
}

fn push_attr(out: &mut String, name: &str, value: &str) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	push_escaped(out, value);
	out.push('"');
}

fn push_escaped(out: &mut String, text: &str) {
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(ch),
		}
	}
}
