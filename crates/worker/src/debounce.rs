use std::time::Duration;

use crate::{Scheduler, TimerId};

/// Trailing-edge debounce: at most one pending timer, reset on every trigger.
#[derive(Debug, Clone)]
pub struct Debounce {
	wait: Duration,
	pending: Option<TimerId>,
}

impl Debounce {
	pub const fn new(wait: Duration) -> Self {
		Self { wait, pending: None }
	}

	pub const fn wait(&self) -> Duration {
		self.wait
	}

	/// Cancels any pending timer and schedules `task` after the wait period.
	pub fn trigger<T>(&mut self, scheduler: &mut Scheduler<T>, task: T) -> TimerId {
		self.cancel(scheduler);
		let id = scheduler.schedule(self.wait, task);
		self.pending = Some(id);
		id
	}

	/// Cancels the pending timer, if any.
	pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) -> bool {
		match self.pending.take() {
			Some(id) => scheduler.cancel(id),
			None => false,
		}
	}

	/// Marks `id` as fired. Returns `false` for a timer this debounce no longer owns.
	pub fn complete(&mut self, id: TimerId) -> bool {
		if self.pending == Some(id) {
			self.pending = None;
			true
		} else {
			false
		}
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}
