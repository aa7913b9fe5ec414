use std::time::Duration;

use lootbox_document::{Element, NodeId};
use lootbox_notifications::{Notification, TOAST_DWELL, TOAST_EXIT, ToastId};
use lootbox_storage::Storage;
use lootbox_worker::{Debounce, TimerId};
use tracing::{debug, warn};

use crate::StorefrontError;
use crate::cards::capture_product;
use crate::shell::{Storefront, Task};

/// Simulated round trip before an add-to-cart lands.
pub(crate) const ADD_DELAY: Duration = Duration::from_millis(300);
/// How long the button reads "Added!".
pub(crate) const ADDED_FEEDBACK: Duration = Duration::from_millis(1500);
pub(crate) const BADGE_PULSE: Duration = Duration::from_millis(200);

/// Per-button state: the resting label and the pending label restore.
#[derive(Debug)]
pub(crate) struct AddButton {
	label: String,
	restore: Debounce,
}

impl<S: Storage> Storefront<S> {
	pub(crate) fn begin_add_to_cart(&mut self, button: NodeId) {
		let text = self.doc.text(button).to_owned();
		let entry = self.add_buttons.entry(button).or_insert_with(|| AddButton {
			label: text,
			restore: Debounce::new(ADDED_FEEDBACK),
		});
		entry.restore.cancel(&mut self.scheduler);
		self.doc.remove_class(button, "bg-green-600");
		self.doc.add_class(button, "btn-loading");
		self.doc.set_text(button, "Adding");
		self.doc.element_mut(button).disabled = true;
		self.scheduler.schedule(ADD_DELAY, Task::FinishAdd(button));
	}

	pub(crate) fn finish_add_to_cart(&mut self, button: NodeId) -> Result<(), StorefrontError> {
		let product = self
			.doc
			.closest_with_class(button, "product-card")
			.and_then(|card| capture_product(&self.doc, card));
		let label = self.add_buttons.get(&button).map(|b| b.label.clone()).unwrap_or_default();

		self.doc.remove_class(button, "btn-loading");
		self.doc.element_mut(button).disabled = false;

		let Some(product) = product else {
			warn!(%button, "add-to-cart button outside a product card");
			self.doc.set_text(button, label);
			return Ok(());
		};

		let notification = self.cart.add_item(product)?;
		self.show_notification(notification);
		self.update_cart_badge();

		self.doc.set_text(button, "Added!");
		self.doc.add_class(button, "bg-green-600");
		if let Some(state) = self.add_buttons.get_mut(&button) {
			state.restore.trigger(&mut self.scheduler, Task::RestoreAdd(button));
		}
		Ok(())
	}

	pub(crate) fn restore_add_button(&mut self, id: TimerId, button: NodeId) {
		let Some(state) = self.add_buttons.get_mut(&button) else {
			return;
		};
		if !state.restore.complete(id) {
			return;
		}
		let label = state.label.clone();
		self.doc.set_text(button, label);
		self.doc.remove_class(button, "bg-green-600");
	}

	/// Mirrors the item count into both cart badges.
	pub(crate) fn update_cart_badge(&mut self) {
		let count = self.cart.item_count();
		if let Some(badge) = self.doc.get_element_by_id("cart-count") {
			self.doc.set_text(badge, count.to_string());
			self.doc.toggle_class(badge, "hidden", count == 0);
			if count > 0 {
				self.doc.add_class(badge, "scale-125");
				self.badge_pulse.trigger(&mut self.scheduler, Task::BadgePulseEnd);
			}
		}
		if let Some(badge) = self.doc.get_element_by_id("mobile-cart-count") {
			self.doc.set_text(badge, count.to_string());
		}
		debug!(count, "cart.badge");
	}

	/// Shows a toast and schedules its exit.
	pub(crate) fn show_notification(&mut self, notification: Notification) {
		let message = notification.message.clone();
		let icon = notification.level.icon_path();
		let id = self.notifications.push(notification);
		if let Some(toast) = self.notifications.toasts().iter().find(|t| t.id == id) {
			let root = self.doc.root();
			let node = self.doc.append(
				root,
				Element::new("div")
					.with_classes(&toast.class_name())
					.with_attr("role", "alert")
					.with_attr("aria-live", "polite"),
			);
			let row = self.doc.append(node, Element::new("div").with_classes("flex items-center space-x-2"));
			let svg = self.doc.append(
				row,
				Element::new("svg")
					.with_classes("w-5 h-5")
					.with_attr("fill", "none")
					.with_attr("stroke", "currentColor")
					.with_attr("viewBox", "0 0 24 24")
					.with_attr("aria-hidden", "true"),
			);
			self.doc.append(
				svg,
				Element::new("path")
					.with_attr("stroke-linecap", "round")
					.with_attr("stroke-linejoin", "round")
					.with_attr("stroke-width", "2")
					.with_attr("d", icon),
			);
			self.doc.append(row, Element::new("span").with_text(message));
			self.toast_nodes.insert(id, node);
		}
		self.scheduler.schedule(TOAST_DWELL, Task::ToastExit(id));
	}

	pub(crate) fn toast_exit(&mut self, id: ToastId) {
		if !self.notifications.begin_exit(id) {
			return;
		}
		if let Some(&node) = self.toast_nodes.get(&id) {
			self.doc.add_class(node, "toast-exit");
		}
		self.scheduler.schedule(TOAST_EXIT, Task::ToastRemove(id));
	}

	pub(crate) fn toast_remove(&mut self, id: ToastId) {
		self.notifications.remove(id);
		if let Some(node) = self.toast_nodes.remove(&id) {
			self.doc.remove(node);
		}
	}
}
