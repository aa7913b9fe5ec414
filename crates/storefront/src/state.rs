//! Serializable snapshot of what the page currently shows.

use std::fmt;

use lootbox_cart::format_price;
use lootbox_notifications::{Level, ToastPhase};
use lootbox_storage::Storage;
use serde::Serialize;

use crate::event::Effect;
use crate::form::Field;
use crate::shell::Storefront;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
	pub now_ms: u64,
	/// Current URL fragment, `None` on a bare URL.
	pub location: Option<String>,
	pub active_section: Option<String>,
	pub cart: Vec<CartLine>,
	pub item_count: u64,
	pub total: String,
	pub badge: Badge,
	pub menu_open: bool,
	pub toasts: Vec<ToastView>,
	pub back_to_top_visible: bool,
	/// Names of products whose info overlay is showing.
	pub overlays_open: Vec<String>,
	pub form_errors: Vec<FieldError>,
	pub form_success: bool,
	pub effects: Vec<Effect>,
	/// Tag and id of the focused element, e.g. `input#email`.
	pub focused: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
	pub name: String,
	pub price: String,
	pub quantity: u32,
	pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
	pub count: String,
	pub hidden: bool,
	pub mobile: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastView {
	pub level: Level,
	pub message: String,
	pub exiting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
	pub field: Field,
	pub message: String,
}

impl<S: Storage> Storefront<S> {
	/// Captures the visible page state.
	pub fn state(&self) -> State {
		let doc = &self.doc;
		let text_of = |id: &str| doc.get_element_by_id(id).map(|n| doc.text(n).to_owned()).unwrap_or_default();

		let badge = Badge {
			count: text_of("cart-count"),
			hidden: doc.get_element_by_id("cart-count").is_none_or(|n| doc.has_class(n, "hidden")),
			mobile: text_of("mobile-cart-count"),
		};

		let cart = self
			.cart
			.items()
			.iter()
			.map(|item| CartLine {
				name: item.name.clone(),
				price: item.price.clone(),
				quantity: item.quantity,
				line_total: format_price(item.line_total()),
			})
			.collect();

		let toasts = self
			.notifications
			.toasts()
			.iter()
			.map(|t| ToastView {
				level: t.notification.level,
				message: t.notification.message.clone(),
				exiting: t.phase == ToastPhase::Exiting,
			})
			.collect();

		let overlays_open = self
			.cards
			.iter()
			.filter(|c| doc.has_class(c.card, "overlay-active"))
			.filter_map(|c| doc.descendant_with_tag(c.card, "h3"))
			.map(|title| doc.text(title).trim().to_owned())
			.collect();

		let form_errors = Field::ALL
			.into_iter()
			.filter_map(|field| {
				let node = doc.get_element_by_id(field.error_id())?;
				doc.has_class(node, "show").then(|| FieldError {
					field,
					message: doc.text(node).to_owned(),
				})
			})
			.collect();

		let focused = doc.focused().map(|node| {
			let el = doc.element(node);
			match &el.id {
				Some(id) => format!("{}#{id}", el.tag),
				None => el.tag.clone(),
			}
		});

		State {
			now_ms: self.scheduler.now().as_millis() as u64,
			location: self.history.hash().map(str::to_owned),
			active_section: self.router.active_section(doc).map(str::to_owned),
			cart,
			item_count: self.cart.item_count(),
			total: format_price(self.cart.total()),
			badge,
			menu_open: self.router.menu().is_open(doc),
			toasts,
			back_to_top_visible: doc
				.get_element_by_id("back-to-top")
				.is_some_and(|n| doc.has_class(n, "visible")),
			overlays_open,
			form_errors,
			form_success: doc
				.get_element_by_id("form-success")
				.is_some_and(|n| !doc.has_class(n, "hidden")),
			effects: self.effects.clone(),
			focused,
		}
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "t={}ms location={}", self.now_ms, self.location.as_deref().unwrap_or("-"))?;
		writeln!(f, "section: {}", self.active_section.as_deref().unwrap_or("-"))?;
		writeln!(
			f,
			"cart: {} item(s), total {}{}",
			self.item_count,
			self.total,
			if self.badge.hidden { " (badge hidden)" } else { "" }
		)?;
		for line in &self.cart {
			writeln!(f, "  {} x{} @ {} = {}", line.name, line.quantity, line.price, line.line_total)?;
		}
		if self.menu_open {
			writeln!(f, "mobile menu: open")?;
		}
		for toast in &self.toasts {
			let level = match toast.level {
				Level::Info => "info",
				Level::Success => "success",
				Level::Error => "error",
			};
			let exiting = if toast.exiting { " (exiting)" } else { "" };
			writeln!(f, "toast[{level}]: {}{exiting}", toast.message)?;
		}
		if self.back_to_top_visible {
			writeln!(f, "back-to-top: visible")?;
		}
		for name in &self.overlays_open {
			writeln!(f, "overlay: {name}")?;
		}
		for error in &self.form_errors {
			writeln!(f, "error[{}]: {}", error.field.id(), error.message)?;
		}
		if self.form_success {
			writeln!(f, "form: sent")?;
		}
		for effect in &self.effects {
			match effect {
				Effect::Navigate { url } => writeln!(f, "navigate: {url}")?,
			}
		}
		if let Some(focused) = &self.focused {
			writeln!(f, "focus: {focused}")?;
		}
		Ok(())
	}
}
