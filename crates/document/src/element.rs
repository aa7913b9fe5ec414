use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use crate::geometry::Rect;

/// Index of an element in its [`Document`](crate::Document) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
	pub const fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Ordered set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(SmallVec<[String; 4]>);

impl ClassList {
	/// Parses a whitespace-separated class attribute.
	pub fn parse(classes: &str) -> Self {
		let mut list = Self::default();
		for class in classes.split_whitespace() {
			list.add(class);
		}
		list
	}

	pub fn contains(&self, class: &str) -> bool {
		self.0.iter().any(|c| c == class)
	}

	/// Adds `class`; returns `false` if it was already present.
	pub fn add(&mut self, class: &str) -> bool {
		if self.contains(class) {
			return false;
		}
		self.0.push(class.to_owned());
		true
	}

	/// Removes `class`; returns `false` if it was absent.
	pub fn remove(&mut self, class: &str) -> bool {
		let before = self.0.len();
		self.0.retain(|c| c != class);
		before != self.0.len()
	}

	/// Adds or removes `class` so that its presence equals `force`.
	pub fn toggle(&mut self, class: &str, force: bool) {
		if force {
			self.add(class);
		} else {
			self.remove(class);
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for ClassList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, class) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			f.write_str(class)?;
		}
		Ok(())
	}
}

/// One element of the page.
#[derive(Debug, Clone)]
pub struct Element {
	pub tag: String,
	pub id: Option<String>,
	pub classes: ClassList,
	pub attrs: BTreeMap<String, String>,
	pub text: String,
	/// Current value of form controls.
	pub value: String,
	pub disabled: bool,
	/// Inline `transform` style; empty when unset.
	pub transform: String,
	/// Own height contributed to block layout, excluding children.
	pub intrinsic_height: f64,
	/// Layout box; `None` while the element is not rendered.
	pub rect: Option<Rect>,
	pub(crate) parent: Option<NodeId>,
	pub(crate) children: Vec<NodeId>,
}

impl Element {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			id: None,
			classes: ClassList::default(),
			attrs: BTreeMap::new(),
			text: String::new(),
			value: String::new(),
			disabled: false,
			transform: String::new(),
			intrinsic_height: 0.0,
			rect: None,
			parent: None,
			children: Vec::new(),
		}
	}

	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn with_classes(mut self, classes: &str) -> Self {
		self.classes = ClassList::parse(classes);
		self
	}

	pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	pub fn with_height(mut self, height: f64) -> Self {
		self.intrinsic_height = height;
		self
	}

	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.classes.contains(class)
	}

	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}

	pub fn children(&self) -> &[NodeId] {
		&self.children
	}
}
