use std::time::Duration;

use lootbox_document::{Document, NodeId, ScrollBehavior};
use tracing::debug;

use crate::history::History;
use crate::menu::MobileMenu;

#[cfg(test)]
mod tests;

/// Fragment shown when the URL carries none.
pub const HOME_FRAGMENT: &str = "#home";

/// Settle time before entrance animations are re-evaluated after a transition.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Section key of a fragment: the text after a leading `#`.
pub fn section_key(fragment: &str) -> &str {
	fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Outcome of [`Router::show_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
	/// Fragment the transition targeted.
	pub fragment: String,
	/// Section that became active; `None` for an unknown fragment.
	pub section: Option<NodeId>,
	/// One-shot delay after which the caller re-runs entrance animations.
	pub reveal_after: Option<Duration>,
}

/// Page switcher bound to the sections and nav links present at attach time.
#[derive(Debug, Clone)]
pub struct Router {
	pages: Vec<NodeId>,
	nav_links: Vec<NodeId>,
	menu: MobileMenu,
	active: Option<NodeId>,
}

impl Router {
	pub fn attach(doc: &Document) -> Self {
		let pages = doc.elements_with_class("page");
		let active = pages.iter().copied().find(|&p| doc.has_class(p, "active"));
		Self {
			pages,
			nav_links: doc.elements_with_class("nav-link"),
			menu: MobileMenu::attach(doc),
			active,
		}
	}

	pub fn menu(&self) -> &MobileMenu {
		&self.menu
	}

	pub fn active(&self) -> Option<NodeId> {
		self.active
	}

	/// Id of the active section.
	pub fn active_section<'d>(&self, doc: &'d Document) -> Option<&'d str> {
		self.active.and_then(|p| doc.element(p).id.as_deref())
	}

	pub fn pages(&self) -> &[NodeId] {
		&self.pages
	}

	/// Shows the section named by `fragment`.
	///
	/// Every other section is deactivated, including when nothing matches.
	/// Nav links are marked current by exact `href` comparison with
	/// `fragment`. The page scrolls smoothly to the top and the mobile menu
	/// closes.
	pub fn show_page(&mut self, doc: &mut Document, fragment: &str) -> Transition {
		let key = section_key(fragment);
		let previous = self.active.take();
		for &page in &self.pages {
			let matched = doc.element(page).id.as_deref() == Some(key);
			doc.toggle_class(page, "active", matched);
			if matched && self.active.is_none() {
				self.active = Some(page);
			}
		}

		for &link in &self.nav_links {
			if doc.attr(link, "href") == Some(fragment) {
				doc.add_class(link, "active");
				doc.set_attr(link, "aria-current", "page");
			} else {
				doc.remove_class(link, "active");
				doc.remove_attr(link, "aria-current");
			}
		}

		doc.scroll_to(0.0, ScrollBehavior::Smooth);
		self.menu.close(doc);

		debug!(
			from = ?previous.and_then(|p| doc.element(p).id.clone()),
			to = key,
			matched = self.active.is_some(),
			"router.show_page"
		);
		Transition {
			fragment: fragment.to_owned(),
			section: self.active,
			reveal_after: self.active.map(|_| REVEAL_DELAY),
		}
	}

	/// Nav trigger activation: pushes `href` onto `history`, then shows it.
	pub fn navigate(&mut self, doc: &mut Document, history: &mut History, href: &str) -> Transition {
		history.push(href);
		self.show_page(doc, href)
	}

	/// Back/forward landed on a new entry: shows it without touching history.
	pub fn pop_state(&mut self, doc: &mut Document, history: &History) -> Transition {
		self.show_page(doc, history.target())
	}
}
