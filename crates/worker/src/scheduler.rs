use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;

#[cfg(test)]
mod tests;

/// Cadence of animation frames requested through [`Scheduler::request_frame`].
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Handle to a scheduled timer, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
	pub const fn get(self) -> u64 {
		self.0
	}
}

/// Virtual-clock task queue.
///
/// Tasks fire in order of due time; ties fire in scheduling order. The clock
/// starts at zero and never moves backwards.
#[derive(Debug)]
pub struct Scheduler<T> {
	now: Duration,
	next_id: u64,
	queue: BTreeMap<(Duration, TimerId), T>,
	due_by_id: FxHashMap<TimerId, Duration>,
}

impl<T> Default for Scheduler<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Scheduler<T> {
	pub fn new() -> Self {
		Self {
			now: Duration::ZERO,
			next_id: 0,
			queue: BTreeMap::new(),
			due_by_id: FxHashMap::default(),
		}
	}

	/// Current virtual time since the scheduler was created.
	pub fn now(&self) -> Duration {
		self.now
	}

	/// Schedules `task` to fire `delay` after the current time.
	pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
		self.schedule_at(self.now + delay, task)
	}

	/// Schedules `task` at an absolute time. Times in the past fire on the next drain.
	pub fn schedule_at(&mut self, due: Duration, task: T) -> TimerId {
		self.next_id += 1;
		let id = TimerId(self.next_id);
		let due = due.max(self.now);
		self.queue.insert((due, id), task);
		self.due_by_id.insert(id, due);
		tracing::trace!(timer = id.0, due_ms = due.as_millis() as u64, "timer.schedule");
		id
	}

	/// Schedules `task` for the next frame boundary strictly after now.
	pub fn request_frame(&mut self, task: T) -> TimerId {
		let frame = FRAME_INTERVAL.as_nanos();
		let next = (self.now.as_nanos() / frame + 1) * frame;
		self.schedule_at(Duration::from_nanos(next as u64), task)
	}

	/// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
	pub fn cancel(&mut self, id: TimerId) -> bool {
		let Some(due) = self.due_by_id.remove(&id) else {
			return false;
		};
		self.queue.remove(&(due, id));
		tracing::trace!(timer = id.0, "timer.cancel");
		true
	}

	pub fn is_pending(&self, id: TimerId) -> bool {
		self.due_by_id.contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.queue.len()
	}

	pub fn is_empty(&self) -> bool {
		self.queue.is_empty()
	}

	/// Due time of the earliest pending timer.
	pub fn next_due(&self) -> Option<Duration> {
		self.queue.keys().next().map(|(due, _)| *due)
	}

	/// Pops the earliest task that is already due at the current time.
	pub fn pop_due(&mut self) -> Option<(TimerId, T)> {
		self.pop_until(self.now)
	}

	/// Pops the earliest task due at or before `limit`, moving the clock to its due time.
	///
	/// Used by owners that advance time in steps: pop and run tasks until this
	/// returns `None`, then call [`advance_to`](Self::advance_to) with the same limit.
	pub fn pop_until(&mut self, limit: Duration) -> Option<(TimerId, T)> {
		let (&(due, id), _) = self.queue.first_key_value()?;
		if due > limit {
			return None;
		}
		let task = self.queue.remove(&(due, id))?;
		self.due_by_id.remove(&id);
		self.now = self.now.max(due);
		tracing::trace!(timer = id.0, now_ms = self.now.as_millis() as u64, "timer.fire");
		Some((id, task))
	}

	/// Moves the clock forward to `target` without running anything.
	pub fn advance_to(&mut self, target: Duration) {
		self.now = self.now.max(target);
	}

	/// Removes every pending timer.
	pub fn clear(&mut self) -> usize {
		let cleared = self.queue.len();
		self.queue.clear();
		self.due_by_id.clear();
		cleared
	}
}
