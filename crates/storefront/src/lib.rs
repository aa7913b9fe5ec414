//! Storefront application shell.
//!
//! [`Storefront`] owns every piece of page state: the document, the cart,
//! the router and history, toasts, observers and the timer queue. Input
//! arrives as [`Event`]s through [`Storefront::dispatch`]; time moves only
//! through [`Storefront::advance`], which runs due timers one at a time to
//! completion. Handlers never interleave.

mod cards;
mod cart_ui;
mod effects;
mod event;
mod form;
mod options;
mod shell;
mod shortcuts;
pub mod specs;
mod state;

use lootbox_cart::CartError;
use lootbox_keymap_parser::ParseError;
use thiserror::Error;

pub use cards::{capture_product, find_card};
pub use effects::{counter_suffix, counter_target, counter_text, ease_out_quart};
pub use event::{Effect, Event};
pub use form::{Field, validate};
pub use options::{Binding, Options, ShortcutAction, default_bindings};
pub use shell::Storefront;
pub use shortcuts::Shortcuts;
pub use state::{Badge, CartLine, FieldError, State, ToastView};

#[derive(Debug, Error)]
pub enum StorefrontError {
	#[error(transparent)]
	Cart(#[from] CartError),
	#[error("invalid shortcut '{keys}': {source}")]
	Shortcut {
		keys: String,
		#[source]
		source: ParseError,
	},
	#[error("invalid storefront options: {0}")]
	Config(#[from] toml::de::Error),
}
