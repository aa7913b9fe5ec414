use std::sync::LazyLock;
use std::time::Duration;

use lootbox_document::{Document, NodeId};
use lootbox_notifications::Notification;
use lootbox_storage::Storage;
use lootbox_worker::{Debounce, TimerId};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::shell::{Storefront, Task};

#[cfg(test)]
mod tests;

const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
const SUCCESS_DWELL: Duration = Duration::from_millis(5000);

static EMAIL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A validated contact form field. The id doubles as the input element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
	Name,
	Email,
	Message,
}

impl Field {
	pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

	pub const fn id(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Message => "message",
		}
	}

	pub const fn error_id(self) -> &'static str {
		match self {
			Self::Name => "name-error",
			Self::Email => "email-error",
			Self::Message => "message-error",
		}
	}

	/// Text shown when the field is invalid.
	pub const fn message(self) -> &'static str {
		match self {
			Self::Name => "Please enter your full name (at least 2 characters)",
			Self::Email => "Please enter a valid email address",
			Self::Message => "Please enter a message (at least 10 characters)",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.id() == id)
	}
}

/// Whether `value` is acceptable for `field`.
///
/// Lengths count UTF-16 code units of the trimmed value.
pub fn validate(field: Field, value: &str) -> bool {
	match field {
		Field::Name => value.trim().encode_utf16().count() >= 2,
		Field::Email => EMAIL.is_match(value),
		Field::Message => value.trim().encode_utf16().count() >= 10,
	}
}

/// Handles to the contact form's fixed elements.
#[derive(Debug)]
pub(crate) struct ContactForm {
	pub(crate) node: NodeId,
	submit: Option<NodeId>,
	success: Option<NodeId>,
	count: Option<NodeId>,
	label: Option<String>,
	hide_success: Debounce,
}

impl ContactForm {
	pub(crate) fn attach(doc: &Document) -> Option<Self> {
		Some(Self {
			node: doc.get_element_by_id("contact-form")?,
			submit: doc.get_element_by_id("submit-btn"),
			success: doc.get_element_by_id("form-success"),
			count: doc.get_element_by_id("message-count"),
			label: None,
			hide_success: Debounce::new(SUCCESS_DWELL),
		})
	}
}

impl<S: Storage> Storefront<S> {
	fn field_of(&self, node: NodeId) -> Option<Field> {
		self.form.as_ref()?;
		let field = Field::from_id(self.doc.element(node).id.as_deref()?)?;
		(self.doc.get_element_by_id(field.id()) == Some(node)).then_some(field)
	}

	fn show_error(&mut self, field: Field) {
		if let Some(input) = self.doc.get_element_by_id(field.id()) {
			self.doc.add_class(input, "error");
			self.doc.remove_class(input, "success");
		}
		if let Some(error) = self.doc.get_element_by_id(field.error_id()) {
			self.doc.set_text(error, field.message());
			self.doc.add_class(error, "show");
		}
	}

	fn clear_error(&mut self, field: Field) {
		if let Some(input) = self.doc.get_element_by_id(field.id()) {
			self.doc.remove_class(input, "error");
		}
		if let Some(error) = self.doc.get_element_by_id(field.error_id()) {
			self.doc.set_text(error, "");
			self.doc.remove_class(error, "show");
		}
	}

	fn show_success(&mut self, field: Field) {
		if let Some(input) = self.doc.get_element_by_id(field.id()) {
			self.doc.add_class(input, "success");
			self.doc.remove_class(input, "error");
		}
		self.clear_error(field);
	}

	/// Blur validates non-empty fields.
	pub(crate) fn field_blurred(&mut self, node: NodeId) {
		let Some(field) = self.field_of(node) else {
			return;
		};
		let value = self.doc.value(node);
		if value.is_empty() {
			return;
		}
		let valid = validate(field, value);
		debug!(?field, valid, "form.blur");
		if valid {
			self.show_success(field);
		} else {
			self.show_error(field);
		}
	}

	/// Typing updates the value, the message counter, and clears an error
	/// once the field becomes valid.
	pub(crate) fn input(&mut self, target: NodeId, value: String) {
		self.doc.set_value(target, value);
		let Some(field) = self.field_of(target) else {
			return;
		};
		if field == Field::Message
			&& let Some(count) = self.form.as_ref().and_then(|f| f.count)
		{
			let length = self.doc.value(target).encode_utf16().count();
			self.doc.set_text(count, length.to_string());
		}
		if self.doc.has_class(target, "error") && validate(field, self.doc.value(target)) {
			self.show_success(field);
		}
	}

	pub(crate) fn submit(&mut self, target: NodeId) {
		let Some(form) = self.form.as_ref().filter(|f| f.node == target).map(|f| f.node) else {
			return;
		};
		let mut valid = true;
		for field in Field::ALL {
			let ok = self
				.doc
				.get_element_by_id(field.id())
				.is_some_and(|input| validate(field, self.doc.value(input)));
			if ok {
				self.show_success(field);
			} else {
				self.show_error(field);
				valid = false;
			}
		}
		debug!(valid, "form.submit");
		if !valid {
			if let Some(first) = self.doc.descendant_with_class(form, "error") {
				self.focus(first);
			}
			return;
		}

		if let Some(button) = self.form.as_ref().and_then(|f| f.submit) {
			let label = self.doc.text(button).to_owned();
			if let Some(state) = self.form.as_mut()
				&& state.label.is_none()
			{
				state.label = Some(label);
			}
			self.doc.add_class(button, "btn-loading");
			self.doc.set_text(button, "Sending");
			self.doc.element_mut(button).disabled = true;
		}
		self.scheduler.schedule(SUBMIT_DELAY, Task::FinishSubmit);
	}

	pub(crate) fn finish_submit(&mut self) {
		let Some(form) = self.form.as_ref() else {
			return;
		};
		let (submit, success, count, label) = (form.submit, form.success, form.count, form.label.clone());
		if let Some(button) = submit {
			self.doc.remove_class(button, "btn-loading");
			self.doc.set_text(button, label.unwrap_or_default());
			self.doc.element_mut(button).disabled = false;
		}
		if let Some(success) = success {
			self.doc.remove_class(success, "hidden");
		}
		for field in Field::ALL {
			if let Some(input) = self.doc.get_element_by_id(field.id()) {
				self.doc.set_value(input, "");
				self.doc.remove_class(input, "success");
				self.doc.remove_class(input, "error");
			}
		}
		if let Some(count) = count {
			self.doc.set_text(count, "0");
		}
		if let Some(form) = self.form.as_mut() {
			form.hide_success.trigger(&mut self.scheduler, Task::HideFormSuccess);
		}
		self.show_notification(Notification::success("Message sent successfully!"));
	}

	pub(crate) fn hide_form_success(&mut self, id: TimerId) {
		let Some(form) = self.form.as_mut() else {
			return;
		};
		if form.hide_success.complete(id)
			&& let Some(success) = form.success
		{
			self.doc.add_class(success, "hidden");
		}
	}
}
