//! Toast notifications.
//!
//! A [`Notification`] is a level plus a message. The [`NotificationCenter`]
//! turns notifications into [`Toast`]s with a lifecycle: visible for
//! [`TOAST_DWELL`], then exiting for [`TOAST_EXIT`], then removed. The owner
//! schedules the two transitions; the center only tracks state.

use std::time::Duration;

use serde::Serialize;

#[cfg(test)]
mod tests;

/// How long a toast stays fully visible.
pub const TOAST_DWELL: Duration = Duration::from_millis(3000);

/// Length of the exit transition before the toast is removed.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

/// Severity level for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,
	/// Success message.
	Success,
	/// Error message.
	Error,
}

impl Level {
	/// Background utility class used by the toast element.
	pub const fn background_class(self) -> &'static str {
		match self {
			Self::Success => "bg-green-600",
			Self::Error => "bg-red-600",
			Self::Info => "bg-blue-600",
		}
	}

	/// SVG path data for the toast icon.
	pub const fn icon_path(self) -> &'static str {
		match self {
			Self::Success => "M5 13l4 4L19 7",
			Self::Error => "M6 18L18 6M6 6l12 12",
			Self::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
		}
	}
}

/// Runtime notification instance ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
	pub level: Level,
	pub message: String,
}

impl Notification {
	pub fn new(level: Level, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	pub fn success(message: impl Into<String>) -> Self {
		Self::new(Level::Success, message)
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self::new(Level::Error, message)
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self::new(Level::Info, message)
	}
}

/// Identifier of a toast within its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
	Visible,
	Exiting,
}

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
	pub id: ToastId,
	pub notification: Notification,
	pub phase: ToastPhase,
}

impl Toast {
	/// Full class attribute of the toast element.
	pub fn class_name(&self) -> String {
		let mut class = format!(
			"toast fixed top-24 right-4 {} text-white px-6 py-3 rounded-lg shadow-lg z-50 transform transition-all duration-300",
			self.notification.level.background_class()
		);
		if self.phase == ToastPhase::Exiting {
			class.push_str(" toast-exit");
		}
		class
	}
}

/// Ordered set of on-screen toasts.
#[derive(Debug, Default)]
pub struct NotificationCenter {
	toasts: Vec<Toast>,
	next_id: u64,
}

impl NotificationCenter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shows a notification and returns the id of its toast.
	pub fn push(&mut self, notification: Notification) -> ToastId {
		self.next_id += 1;
		let id = ToastId(self.next_id);
		tracing::debug!(toast = self.next_id, level = ?notification.level, message = %notification.message, "toast.show");
		self.toasts.push(Toast {
			id,
			notification,
			phase: ToastPhase::Visible,
		});
		id
	}

	/// Starts the exit transition. Returns `false` if the toast is gone.
	pub fn begin_exit(&mut self, id: ToastId) -> bool {
		match self.toasts.iter_mut().find(|t| t.id == id) {
			Some(toast) => {
				toast.phase = ToastPhase::Exiting;
				true
			}
			None => false,
		}
	}

	/// Removes a toast from the screen.
	pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
		let idx = self.toasts.iter().position(|t| t.id == id)?;
		Some(self.toasts.remove(idx))
	}

	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}

	/// Messages of all on-screen toasts, oldest first.
	pub fn messages(&self) -> impl Iterator<Item = &str> {
		self.toasts.iter().map(|t| t.notification.message.as_str())
	}
}
