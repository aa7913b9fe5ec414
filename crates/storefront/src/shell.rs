use std::time::Duration;

use lootbox_cart::Cart;
use lootbox_document::{Document, IntersectionObserver, NodeId, ScrollBehavior};
use lootbox_notifications::{NotificationCenter, ToastId};
use lootbox_router::{History, Router, Transition};
use lootbox_storage::Storage;
use lootbox_worker::{Debounce, Scheduler, TimerId};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::StorefrontError;
use crate::cards::CardUi;
use crate::cart_ui::{AddButton, BADGE_PULSE};
use crate::effects::{CounterRun, SCROLL_DEBOUNCE, reveal_observer};
use crate::event::{Effect, Event};
use crate::form::ContactForm;
use crate::options::{Options, ShortcutAction};
use crate::shortcuts::Shortcuts;


/// Timer callbacks owned by the shell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Task {
	/// Re-run entrance animations after a page transition settles.
	Reveal,
	FinishAdd(NodeId),
	RestoreAdd(NodeId),
	BadgePulseEnd,
	ToastExit(ToastId),
	ToastRemove(ToastId),
	/// Hide the overlay of the card at this index.
	HideOverlay(usize),
	ScrollSettled,
	CounterFrame(CounterRun),
	FinishSubmit,
	HideFormSuccess,
}

/// The running page.
#[derive(Debug)]
pub struct Storefront<S> {
	pub(crate) doc: Document,
	pub(crate) cart: Cart<S>,
	pub(crate) router: Router,
	pub(crate) history: History,
	pub(crate) scheduler: Scheduler<Task>,
	pub(crate) notifications: NotificationCenter,
	pub(crate) toast_nodes: FxHashMap<ToastId, NodeId>,
	pub(crate) options: Options,
	pub(crate) shortcuts: Shortcuts,
	pub(crate) effects: Vec<Effect>,
	pub(crate) reveal: IntersectionObserver,
	pub(crate) counters: IntersectionObserver,
	pub(crate) lazy_images: Option<IntersectionObserver>,
	pub(crate) cards: Vec<CardUi>,
	pub(crate) add_buttons: FxHashMap<NodeId, AddButton>,
	pub(crate) badge_pulse: Debounce,
	pub(crate) back_to_top: Debounce,
	pub(crate) form: Option<ContactForm>,
}

impl<S: Storage> Storefront<S> {
	/// Loads the page: rehydrates the cart, shows the initial fragment and
	/// wires every page behavior.
	pub fn new(doc: Document, storage: S, options: Options) -> Result<Self, StorefrontError> {
		let shortcuts = Shortcuts::new(&options.shortcuts)?;
		let cart = Cart::load_with_key(storage, options.storage_key.clone());
		let router = Router::attach(&doc);
		let history = History::new(options.fragment.as_deref());
		let form = ContactForm::attach(&doc);
		let mut shell = Self {
			doc,
			cart,
			router,
			history,
			scheduler: Scheduler::new(),
			notifications: NotificationCenter::new(),
			toast_nodes: FxHashMap::default(),
			options,
			shortcuts,
			effects: Vec::new(),
			reveal: reveal_observer(),
			counters: IntersectionObserver::default(),
			lazy_images: None,
			cards: Vec::new(),
			add_buttons: FxHashMap::default(),
			badge_pulse: Debounce::new(BADGE_PULSE),
			back_to_top: Debounce::new(SCROLL_DEBOUNCE),
			form,
		};

		let initial = shell.history.target().to_owned();
		let transition = shell.router.show_page(&mut shell.doc, &initial);
		shell.after_transition(&transition);
		shell.init_scroll_animations();
		shell.init_stat_counters();
		shell.decorate_cards();
		shell.init_lazy_images();
		shell.update_footer_year();
		shell.update_cart_badge();
		shell.update_observers();

		info!(
			section = ?shell.router.active_section(&shell.doc),
			lines = shell.cart.items().len(),
			"storefront.ready"
		);
		Ok(shell)
	}

	pub fn document(&self) -> &Document {
		&self.doc
	}

	pub fn cart(&self) -> &Cart<S> {
		&self.cart
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	pub fn history(&self) -> &History {
		&self.history
	}

	pub fn notifications(&self) -> &NotificationCenter {
		&self.notifications
	}

	pub fn options(&self) -> &Options {
		&self.options
	}

	/// Outbound effects requested so far, oldest first.
	pub fn effects(&self) -> &[Effect] {
		&self.effects
	}

	pub fn now(&self) -> Duration {
		self.scheduler.now()
	}

	/// Number of pending timers.
	pub fn pending_timers(&self) -> usize {
		self.scheduler.len()
	}

	pub fn into_cart(self) -> Cart<S> {
		self.cart
	}

	/// Handles one input event to completion.
	pub fn dispatch(&mut self, event: Event) -> Result<(), StorefrontError> {
		let scroll_before = self.doc.scroll_y();
		debug!(?event, "storefront.dispatch");
		match event {
			Event::Click(target) => self.click(target),
			Event::Key(chord) => self.key(chord),
			Event::Scroll(top) => self.doc.set_scroll_y(top),
			Event::Back => {
				if self.history.back() {
					self.pop_state();
				}
			}
			Event::Forward => {
				if self.history.forward() {
					self.pop_state();
				}
			}
			Event::PointerEnter(target) => self.pointer_enter(target),
			Event::PointerLeave(target) => self.pointer_leave(target),
			Event::PointerMove { target, x, y } => self.tilt(target, x, y),
			Event::Focus(target) => self.focus(target),
			Event::Blur => self.blur(),
			Event::Input { target, value } => self.input(target, value),
			Event::Submit(target) => self.submit(target),
			Event::ImageLoad(target) => self.image_loaded(target),
		}
		self.settle(scroll_before);
		Ok(())
	}

	/// Moves the clock forward by `delta`, running every timer that falls due.
	pub fn advance(&mut self, delta: Duration) -> Result<(), StorefrontError> {
		let limit = self.scheduler.now() + delta;
		while let Some((id, task)) = self.scheduler.pop_until(limit) {
			self.run_task(id, task)?;
		}
		self.scheduler.advance_to(limit);
		Ok(())
	}

	/// Runs timers until none remain.
	pub fn run_until_idle(&mut self) -> Result<(), StorefrontError> {
		while let Some(due) = self.scheduler.next_due() {
			self.advance(due.saturating_sub(self.scheduler.now()))?;
		}
		Ok(())
	}

	fn run_task(&mut self, id: TimerId, task: Task) -> Result<(), StorefrontError> {
		let scroll_before = self.doc.scroll_y();
		match task {
			Task::Reveal => self.init_scroll_animations(),
			Task::FinishAdd(button) => self.finish_add_to_cart(button)?,
			Task::RestoreAdd(button) => self.restore_add_button(id, button),
			Task::BadgePulseEnd => {
				if self.badge_pulse.complete(id)
					&& let Some(badge) = self.doc.get_element_by_id("cart-count")
				{
					self.doc.remove_class(badge, "scale-125");
				}
			}
			Task::ToastExit(toast) => self.toast_exit(toast),
			Task::ToastRemove(toast) => self.toast_remove(toast),
			Task::HideOverlay(index) => self.hide_overlay_now(id, index),
			Task::ScrollSettled => {
				if self.back_to_top.complete(id) {
					self.update_back_to_top();
				}
			}
			Task::CounterFrame(run) => self.counter_frame(run),
			Task::FinishSubmit => self.finish_submit(),
			Task::HideFormSuccess => self.hide_form_success(id),
		}
		self.settle(scroll_before);
		Ok(())
	}

	/// Post-handler bookkeeping: a moved scroll offset fires the debounced
	/// scroll listener, and observers see the new layout.
	fn settle(&mut self, scroll_before: f64) {
		if self.doc.scroll_y() != scroll_before {
			self.back_to_top.trigger(&mut self.scheduler, Task::ScrollSettled);
		}
		self.update_observers();
	}

	fn click(&mut self, target: NodeId) {
		if self.is_disabled(target) {
			debug!(%target, "click on disabled control ignored");
			return;
		}
		if let Some(trigger) = self.doc.closest_with_class(target, "nav-trigger")
			&& let Some(href) = self.doc.attr(trigger, "href").map(str::to_owned)
		{
			let transition = self.router.navigate(&mut self.doc, &mut self.history, &href);
			self.after_transition(&transition);
		}
		if let Some(button) = self.doc.closest_with_class(target, "add-to-cart") {
			self.begin_add_to_cart(button);
		}
		if self.within_id(target, "mobile-menu-button") {
			self.router.menu().toggle(&mut self.doc);
		}
		if self.within_id(target, "back-to-top") {
			self.doc.scroll_to(0.0, ScrollBehavior::Smooth);
		}
		if self.within_id(target, "cart-button") || self.within_id(target, "mobile-cart-button") {
			self.go_to_cart();
		}
		if self.within_id(target, "submit-btn")
			&& let Some(form) = self.form.as_ref().map(|f| f.node)
		{
			self.submit(form);
		}
	}

	fn key(&mut self, chord: lootbox_keymap_parser::Node) {
		let Some(action) = self.shortcuts.lookup(chord).cloned() else {
			return;
		};
		debug!(keys = %chord, ?action, "shortcut");
		match action {
			ShortcutAction::Navigate(href) => {
				if let Some(anchor) = self.doc.find_anchor(&href) {
					self.click(anchor);
				}
			}
			ShortcutAction::CloseMenu => {
				self.router.menu().escape(&mut self.doc);
			}
			ShortcutAction::Activate => self.activate_focused(),
		}
	}

	/// Enter/Space: a focused card activates its primary control, a focused
	/// button or link activates itself.
	fn activate_focused(&mut self) {
		let Some(focused) = self.doc.focused() else {
			return;
		};
		if let Some(card) = self.doc.closest_with_class(focused, "product-card") {
			if let Some(action) = self.card_primary_action(card) {
				self.click(action);
			}
			return;
		}
		if matches!(self.doc.element(focused).tag.as_str(), "button" | "a") {
			self.click(focused);
		}
	}

	pub(crate) fn focus(&mut self, target: NodeId) {
		if self.doc.focused() == Some(target) {
			return;
		}
		self.blur();
		self.doc.focus(target);
		if let Some(index) = self.card_for_info(target) {
			self.show_overlay(index);
		}
	}

	fn blur(&mut self) {
		let Some(node) = self.doc.blur() else {
			return;
		};
		if let Some(index) = self.card_for_info(node) {
			self.hide_overlay(index);
		}
		self.field_blurred(node);
	}

	fn pointer_enter(&mut self, target: NodeId) {
		if let Some(index) = self.card_for_info(target).or_else(|| self.card_for_overlay(target)) {
			self.show_overlay(index);
		}
	}

	fn pointer_leave(&mut self, target: NodeId) {
		if let Some(index) = self.card_for_info(target).or_else(|| self.card_for_overlay(target)) {
			self.hide_overlay(index);
		}
		if self.doc.has_class(target, "product-card") {
			self.doc.element_mut(target).transform.clear();
		}
	}

	fn pop_state(&mut self) {
		let transition = self.router.pop_state(&mut self.doc, &self.history);
		self.after_transition(&transition);
	}

	pub(crate) fn after_transition(&mut self, transition: &Transition) {
		if let Some(delay) = transition.reveal_after {
			self.scheduler.schedule(delay, Task::Reveal);
		}
	}

	fn go_to_cart(&mut self) {
		info!(url = "cart.html", "navigate away");
		self.effects.push(Effect::Navigate {
			url: "cart.html".to_owned(),
		});
	}

	fn is_disabled(&self, target: NodeId) -> bool {
		let mut current = Some(target);
		while let Some(node) = current {
			let el = self.doc.element(node);
			if el.disabled {
				return true;
			}
			current = el.parent();
		}
		false
	}

	fn within_id(&self, target: NodeId, id: &str) -> bool {
		let Some(node) = self.doc.get_element_by_id(id) else {
			return false;
		};
		let mut current = Some(target);
		while let Some(n) = current {
			if n == node {
				return true;
			}
			current = self.doc.element(n).parent();
		}
		false
	}
}
