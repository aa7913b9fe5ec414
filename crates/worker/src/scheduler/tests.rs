use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;
use crate::Debounce;

fn ms(n: u64) -> Duration {
	Duration::from_millis(n)
}

fn drain_until(scheduler: &mut Scheduler<&'static str>, limit: Duration) -> Vec<(&'static str, u128)> {
	let mut fired = Vec::new();
	while let Some((_, task)) = scheduler.pop_until(limit) {
		fired.push((task, scheduler.now().as_millis()));
	}
	scheduler.advance_to(limit);
	fired
}

#[test]
fn fires_in_due_order_then_insertion_order() {
	let mut scheduler = Scheduler::new();
	scheduler.schedule(ms(300), "late");
	scheduler.schedule(ms(100), "first");
	scheduler.schedule(ms(100), "second");

	let fired = drain_until(&mut scheduler, ms(1000));
	assert_eq!(fired, vec![("first", 100), ("second", 100), ("late", 300)]);
	assert_eq!(scheduler.now(), ms(1000));
	assert!(scheduler.is_empty());
}

#[test]
fn nothing_fires_before_due() {
	let mut scheduler = Scheduler::new();
	scheduler.schedule(ms(100), "x");
	assert!(drain_until(&mut scheduler, ms(99)).is_empty());
	assert_eq!(scheduler.pop_due(), None);
	assert_eq!(drain_until(&mut scheduler, ms(100)), vec![("x", 100)]);
}

#[test]
fn cancelled_timers_never_fire() {
	let mut scheduler = Scheduler::new();
	let a = scheduler.schedule(ms(10), "a");
	scheduler.schedule(ms(20), "b");

	assert!(scheduler.cancel(a));
	assert!(!scheduler.cancel(a));
	assert!(!scheduler.is_pending(a));
	assert_eq!(drain_until(&mut scheduler, ms(50)), vec![("b", 20)]);
}

#[test]
fn request_frame_lands_on_next_boundary() {
	let mut scheduler = Scheduler::new();
	scheduler.advance_to(ms(20));
	scheduler.request_frame("frame");
	assert_eq!(scheduler.next_due(), Some(ms(32)));

	scheduler.advance_to(ms(32));
	scheduler.pop_due();
	scheduler.request_frame("frame");
	assert_eq!(scheduler.next_due(), Some(ms(48)));
}

#[test]
fn clock_never_moves_backwards() {
	let mut scheduler: Scheduler<()> = Scheduler::new();
	scheduler.advance_to(ms(500));
	scheduler.advance_to(ms(100));
	assert_eq!(scheduler.now(), ms(500));

	scheduler.schedule_at(ms(10), ());
	assert_eq!(scheduler.next_due(), Some(ms(500)));
}

#[test]
fn debounce_resets_pending_timer_on_retrigger() {
	let mut scheduler = Scheduler::new();
	let mut debounce = Debounce::new(ms(10));

	debounce.trigger(&mut scheduler, "scroll");
	scheduler.advance_to(ms(5));
	let second = debounce.trigger(&mut scheduler, "scroll");
	assert_eq!(scheduler.len(), 1);

	let fired = drain_until(&mut scheduler, ms(14));
	assert!(fired.is_empty());

	let (id, task) = scheduler.pop_until(ms(15)).unwrap();
	assert_eq!((id, task), (second, "scroll"));
	assert!(debounce.complete(id));
	assert!(!debounce.is_pending());
}

#[test]
fn debounce_ignores_stale_completion() {
	let mut scheduler = Scheduler::new();
	let mut debounce = Debounce::new(ms(150));
	let first = debounce.trigger(&mut scheduler, ());
	let _second = debounce.trigger(&mut scheduler, ());
	assert!(!debounce.complete(first));
	assert!(debounce.is_pending());
	assert!(debounce.cancel(&mut scheduler));
	assert!(scheduler.is_empty());
}
