//! Fragment-based view routing.
//!
//! Exactly one `.page` section is shown at a time, selected by the URL
//! fragment. [`Router::show_page`] performs a transition against the
//! document; [`History`] models the session history stack that nav
//! triggers push onto and back/forward pop from; [`MobileMenu`] is the
//! collapsible navigation overlay every transition closes.

mod history;
mod menu;
mod router;

pub use history::History;
pub use menu::MobileMenu;
pub use router::{HOME_FRAGMENT, REVEAL_DELAY, Router, Transition, section_key};
