use lootbox_document::{Document, NodeId};
use tracing::debug;

/// Handles to the mobile navigation overlay and its toggle button.
///
/// Any of the parts may be missing from the page; operations skip them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
	button: Option<NodeId>,
	menu: Option<NodeId>,
	menu_icon: Option<NodeId>,
	close_icon: Option<NodeId>,
}

impl MobileMenu {
	pub fn attach(doc: &Document) -> Self {
		let button = doc.get_element_by_id("mobile-menu-button");
		Self {
			button,
			menu: doc.get_element_by_id("mobile-menu"),
			menu_icon: button.and_then(|b| doc.descendant_with_class(b, "menu-icon")),
			close_icon: button.and_then(|b| doc.descendant_with_class(b, "close-icon")),
		}
	}

	pub fn button(&self) -> Option<NodeId> {
		self.button
	}

	/// Open state as advertised by the button's `aria-expanded`.
	pub fn is_open(&self, doc: &Document) -> bool {
		self.button.is_some_and(|b| doc.attr(b, "aria-expanded") == Some("true"))
	}

	pub fn open(&self, doc: &mut Document) {
		if let Some(menu) = self.menu {
			doc.remove_class(menu, "hidden");
			doc.add_class(menu, "mobile-menu-enter");
		}
		if let Some(button) = self.button {
			doc.set_attr(button, "aria-expanded", "true");
		}
		if let Some(icon) = self.menu_icon {
			doc.add_class(icon, "hidden");
		}
		if let Some(icon) = self.close_icon {
			doc.remove_class(icon, "hidden");
		}
		debug!("menu.open");
	}

	pub fn close(&self, doc: &mut Document) {
		if let Some(menu) = self.menu {
			doc.add_class(menu, "hidden");
		}
		if let Some(button) = self.button {
			doc.set_attr(button, "aria-expanded", "false");
		}
		if let Some(icon) = self.menu_icon {
			doc.remove_class(icon, "hidden");
		}
		if let Some(icon) = self.close_icon {
			doc.add_class(icon, "hidden");
		}
	}

	/// Button click: flips the current state.
	pub fn toggle(&self, doc: &mut Document) {
		if self.is_open(doc) {
			self.close(doc);
		} else {
			self.open(doc);
		}
	}

	/// Escape key: closes an open menu and returns focus to the button.
	///
	/// Returns whether the key was consumed.
	pub fn escape(&self, doc: &mut Document) -> bool {
		let Some(button) = self.button.filter(|_| self.is_open(doc)) else {
			return false;
		};
		self.close(doc);
		doc.focus(button);
		true
	}
}
