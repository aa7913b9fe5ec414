use std::time::Duration;

use lootbox_cart::Product;
use lootbox_document::{Document, Element, NodeId};
use lootbox_storage::Storage;
use lootbox_worker::{Debounce, TimerId};
use tracing::debug;

use crate::shell::{Storefront, Task};
use crate::specs::OverlayContent;

/// Grace period before an overlay hides, so the pointer can travel onto it.
pub(crate) const OVERLAY_HIDE_DELAY: Duration = Duration::from_millis(150);

/// A decorated product card.
#[derive(Debug)]
pub(crate) struct CardUi {
	pub(crate) card: NodeId,
	pub(crate) info: NodeId,
	pub(crate) overlay: Option<NodeId>,
	hide: Debounce,
}

/// First product card whose title reads `name`.
pub fn find_card(doc: &Document, name: &str) -> Option<NodeId> {
	doc.elements_with_class("product-card").into_iter().find(|&card| {
		doc.descendant_with_tag(card, "h3")
			.is_some_and(|title| doc.text(title).trim() == name)
	})
}

/// Reads the product a card displays: title, price, image source and
/// description. Cards without a title or price yield `None`.
pub fn capture_product(doc: &Document, card: NodeId) -> Option<Product> {
	let name = doc.text(doc.descendant_with_tag(card, "h3")?);
	let price = doc.text(doc.descendant_with_class(card, "text-indigo-400")?);
	let image = doc
		.descendant_with_tag(card, "img")
		.and_then(|img| doc.attr(img, "src"))
		.unwrap_or_default();
	let description = doc
		.descendant_with_class(card, "text-gray-400")
		.map(|d| doc.text(d))
		.unwrap_or_default();
	Some(
		Product::new(name, price)
			.with_image(image)
			.with_description(description),
	)
}

impl<S: Storage> Storefront<S> {
	/// Adds the quick-view badge, info button, overlay and accessibility
	/// attributes to every titled product card.
	pub(crate) fn decorate_cards(&mut self) {
		for card in self.doc.elements_with_class("product-card") {
			let Some(title) = self.doc.descendant_with_tag(card, "h3") else {
				continue;
			};
			let name = self.doc.text(title).trim().to_owned();
			let description = self
				.doc
				.descendant_with_class(card, "text-gray-400")
				.map(|d| self.doc.text(d).to_owned())
				.unwrap_or_default();

			self.doc.append(
				card,
				Element::new("div")
					.with_classes("quick-view-badge")
					.with_attr("aria-hidden", "true")
					.with_text("Quick View"),
			);
			let info = self.doc.append(
				card,
				Element::new("button")
					.with_classes("info-icon")
					.with_attr("aria-label", format!("View {name} specifications"))
					.with_attr("type", "button")
					.with_text("i"),
			);
			let overlay = OverlayContent::for_product(&name, &description).map(|content| self.append_overlay(card, content));

			self.doc.set_attr(card, "tabindex", "0");
			self.doc.set_attr(card, "role", "article");
			self.doc.set_attr(card, "aria-label", format!("{name} product card"));

			self.cards.push(CardUi {
				card,
				info,
				overlay,
				hide: Debounce::new(OVERLAY_HIDE_DELAY),
			});
		}
		debug!(cards = self.cards.len(), "cards.decorated");
	}

	fn append_overlay(&mut self, card: NodeId, content: OverlayContent) -> NodeId {
		let overlay = self.doc.append(
			card,
			Element::new("div")
				.with_id(content.id)
				.with_classes("product-info-overlay")
				.with_attr("aria-label", content.aria_label)
				.with_attr("role", "tooltip"),
		);
		self.doc.append(overlay, Element::new("h4").with_text(content.heading));
		let list = self.doc.append(overlay, Element::new("ul"));
		for line in content.lines {
			self.doc.append(list, Element::new("li").with_text(line));
		}
		overlay
	}

	pub(crate) fn card_for_info(&self, node: NodeId) -> Option<usize> {
		self.cards.iter().position(|c| c.info == node && c.overlay.is_some())
	}

	pub(crate) fn card_for_overlay(&self, node: NodeId) -> Option<usize> {
		self.cards.iter().position(|c| c.overlay == Some(node))
	}

	pub(crate) fn show_overlay(&mut self, index: usize) {
		let card = &mut self.cards[index];
		card.hide.cancel(&mut self.scheduler);
		self.doc.add_class(card.card, "overlay-active");
	}

	pub(crate) fn hide_overlay(&mut self, index: usize) {
		self.cards[index].hide.trigger(&mut self.scheduler, Task::HideOverlay(index));
	}

	pub(crate) fn hide_overlay_now(&mut self, id: TimerId, index: usize) {
		let card = &mut self.cards[index];
		if card.hide.complete(id) {
			self.doc.remove_class(card.card, "overlay-active");
		}
	}

	/// First button or nav-trigger link inside the card, in document order.
	pub(crate) fn card_primary_action(&self, card: NodeId) -> Option<NodeId> {
		self.doc
			.find_descendant(card, |el| el.tag == "button" || (el.tag == "a" && el.has_class("nav-trigger")))
	}

	/// Pointer-driven 3D tilt. `x`/`y` are viewport coordinates.
	pub(crate) fn tilt(&mut self, target: NodeId, x: f64, y: f64) {
		if self.options.reduced_motion {
			return;
		}
		let Some(card) = self.doc.closest_with_class(target, "product-card") else {
			return;
		};
		let Some(rect) = self.doc.element(card).rect else {
			return;
		};
		let local_x = x - rect.left;
		let local_y = y - (rect.top - self.doc.scroll_y());
		let rotate_x = (local_y - rect.height / 2.0) / 20.0;
		let rotate_y = (rect.width / 2.0 - local_x) / 20.0;
		self.doc.element_mut(card).transform = format!(
			"translateY(-16px) rotateX({}deg) rotateY({}deg) scale(1.02)",
			4.0 + rotate_x,
			-2.0 + rotate_y
		);
	}
}
