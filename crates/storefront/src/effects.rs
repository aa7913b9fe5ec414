//! Scroll-driven page effects: entrance animations, stat counters, lazy
//! images, the back-to-top button and the footer year.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::Datelike;
use lootbox_document::{IntersectionObserver, Margin, NodeId, ObserverOptions};
use lootbox_storage::Storage;
use num_format::{Locale, ToFormattedString};
use regex::Regex;
use tracing::{debug, warn};

use crate::shell::{Storefront, Task};


pub(crate) const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);
const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
const COUNTER_DURATION: Duration = Duration::from_millis(2000);

static LEADING_INTEGER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\s*\+?(\d+)").expect("leading integer pattern is valid"));

/// An in-flight count-up animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CounterRun {
	node: NodeId,
	target: u64,
	started: Duration,
}

pub(crate) fn reveal_observer() -> IntersectionObserver {
	IntersectionObserver::new(ObserverOptions {
		root_margin: Margin::bottom(-50.0),
		threshold: 0.1,
	})
}

pub(crate) fn lazy_image_observer() -> IntersectionObserver {
	IntersectionObserver::new(ObserverOptions {
		root_margin: Margin::uniform(50.0),
		threshold: 0.0,
	})
}

fn counter_observer() -> IntersectionObserver {
	IntersectionObserver::new(ObserverOptions {
		root_margin: Margin::default(),
		threshold: 0.5,
	})
}

/// `1 - (1 - p)^4`.
pub fn ease_out_quart(progress: f64) -> f64 {
	1.0 - (1.0 - progress).powi(4)
}

/// Suffix shown once a counter finishes: `%` for 99, `/7` for 24, `+` otherwise.
pub fn counter_suffix(target: u64) -> &'static str {
	match target {
		99 => "%",
		24 => "/7",
		_ => "+",
	}
}

/// Counter text at `progress` in `[0, 1]`: the eased value floored, with
/// thousands separators, suffixed only when complete.
/// Reads a `data-target` the way `parseInt` does: leading whitespace, an
/// optional `+`, then digits. Trailing text is ignored.
pub fn counter_target(raw: &str) -> Option<u64> {
	LEADING_INTEGER.captures(raw)?.get(1)?.as_str().parse().ok()
}

pub fn counter_text(target: u64, progress: f64) -> String {
	let progress = progress.clamp(0.0, 1.0);
	let current = (target as f64 * ease_out_quart(progress)).floor() as u64;
	let mut text = current.to_formatted_string(&Locale::en);
	if progress >= 1.0 {
		text.push_str(counter_suffix(target));
	}
	text
}

impl<S: Storage> Storefront<S> {
	/// Clears `is-visible` from every animated element and observes it afresh.
	pub(crate) fn init_scroll_animations(&mut self) {
		let targets = self.doc.elements_with_class("animate-on-scroll");
		for &node in &targets {
			self.doc.remove_class(node, "is-visible");
			self.reveal.observe(node);
		}
		debug!(targets = targets.len(), "reveal.init");
	}

	pub(crate) fn init_stat_counters(&mut self) {
		self.counters = counter_observer();
		for node in self.doc.elements_with_class("stat-number") {
			if self.doc.attr(node, "data-target").is_some() {
				self.counters.observe(node);
			}
		}
	}

	pub(crate) fn init_lazy_images(&mut self) {
		let images = self.doc.elements_with_class("lazy-image");
		if !self.options.intersection_observer {
			for node in images {
				self.doc.add_class(node, "loaded");
			}
			return;
		}
		let mut observer = lazy_image_observer();
		for node in images {
			observer.observe(node);
		}
		self.lazy_images = Some(observer);
	}

	/// Load event of an image. Only wired when observers are available.
	pub(crate) fn image_loaded(&mut self, node: NodeId) {
		if self.lazy_images.is_some() && self.doc.has_class(node, "lazy-image") {
			self.doc.add_class(node, "loaded");
		}
	}

	pub(crate) fn update_footer_year(&mut self) {
		let Some(node) = self.doc.get_element_by_id("current-year") else {
			return;
		};
		let year = self.options.year.unwrap_or_else(|| chrono::Local::now().year());
		self.doc.set_text(node, year.to_string());
	}

	pub(crate) fn update_back_to_top(&mut self) {
		if let Some(button) = self.doc.get_element_by_id("back-to-top") {
			let visible = self.doc.scroll_y() > BACK_TO_TOP_THRESHOLD;
			self.doc.toggle_class(button, "visible", visible);
		}
	}

	/// Delivers intersection changes for the current layout and scroll offset.
	pub(crate) fn update_observers(&mut self) {
		self.doc.layout();
		for node in self.reveal.intersecting(&self.doc) {
			self.doc.add_class(node, "is-visible");
			self.reveal.unobserve(node);
		}
		for node in self.counters.intersecting(&self.doc) {
			self.counters.unobserve(node);
			self.start_counter(node);
		}
		if let Some(observer) = self.lazy_images.as_mut() {
			for node in observer.intersecting(&self.doc) {
				self.doc.add_class(node, "loaded");
				observer.unobserve(node);
			}
		}
	}

	fn start_counter(&mut self, node: NodeId) {
		let raw = self.doc.attr(node, "data-target").unwrap_or_default();
		let Some(target) = counter_target(raw) else {
			warn!(%node, target = raw, "stat counter target is not a number");
			return;
		};
		if self.options.reduced_motion {
			self.doc.set_text(node, counter_text(target, 1.0));
			return;
		}
		let run = CounterRun {
			node,
			target,
			started: self.scheduler.now(),
		};
		self.scheduler.request_frame(Task::CounterFrame(run));
	}

	pub(crate) fn counter_frame(&mut self, run: CounterRun) {
		let elapsed = self.scheduler.now().saturating_sub(run.started);
		let progress = (elapsed.as_secs_f64() / COUNTER_DURATION.as_secs_f64()).min(1.0);
		self.doc.set_text(run.node, counter_text(run.target, progress));
		if progress < 1.0 {
			self.scheduler.request_frame(Task::CounterFrame(run));
		}
	}
}
