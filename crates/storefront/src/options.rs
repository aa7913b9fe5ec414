use lootbox_cart::CART_STORAGE_KEY;
use lootbox_document::Viewport;
use serde::Deserialize;

use crate::StorefrontError;

/// Environment and preferences the page runs under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
	/// `prefers-reduced-motion: reduce`.
	pub reduced_motion: bool,
	/// Whether the environment provides `IntersectionObserver`.
	pub intersection_observer: bool,
	pub viewport: Viewport,
	/// URL fragment at load, including the `#`.
	pub fragment: Option<String>,
	pub storage_key: String,
	/// Overrides the clock year written into the footer.
	pub year: Option<i32>,
	pub shortcuts: Vec<Binding>,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			reduced_motion: false,
			intersection_observer: true,
			viewport: Viewport::default(),
			fragment: None,
			storage_key: CART_STORAGE_KEY.to_owned(),
			year: None,
			shortcuts: default_bindings(),
		}
	}
}

impl Options {
	pub fn from_toml_str(source: &str) -> Result<Self, StorefrontError> {
		Ok(toml::from_str(source)?)
	}
}

/// A keyboard shortcut as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Binding {
	/// Chord such as `alt-h` or `escape`.
	pub keys: String,
	pub action: ShortcutAction,
}

impl Binding {
	pub fn new(keys: impl Into<String>, action: ShortcutAction) -> Self {
		Self {
			keys: keys.into(),
			action,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutAction {
	/// Clicks the first anchor whose `href` equals the fragment.
	Navigate(String),
	/// Closes the mobile menu if open and refocuses its button.
	CloseMenu,
	/// Activates the focused card's primary action, or the focused control.
	Activate,
}

pub fn default_bindings() -> Vec<Binding> {
	vec![
		Binding::new("alt-h", ShortcutAction::Navigate("#home".into())),
		Binding::new("alt-c", ShortcutAction::Navigate("#components".into())),
		Binding::new("alt-p", ShortcutAction::Navigate("#peripherals".into())),
		Binding::new("alt-a", ShortcutAction::Navigate("#about".into())),
		Binding::new("escape", ShortcutAction::CloseMenu),
		Binding::new("enter", ShortcutAction::Activate),
		Binding::new("space", ShortcutAction::Activate),
	]
}
