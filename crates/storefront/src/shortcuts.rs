use lootbox_keymap_parser::{Node, parse};

use crate::StorefrontError;
use crate::options::{Binding, ShortcutAction};

/// Parsed shortcut table. The first binding matching a chord wins.
#[derive(Debug, Clone, Default)]
pub struct Shortcuts {
	bindings: Vec<(Node, ShortcutAction)>,
}

impl Shortcuts {
	pub fn new(bindings: &[Binding]) -> Result<Self, StorefrontError> {
		let bindings = bindings
			.iter()
			.map(|b| {
				let node = parse(&b.keys).map_err(|source| StorefrontError::Shortcut {
					keys: b.keys.clone(),
					source,
				})?;
				Ok((node, b.action.clone()))
			})
			.collect::<Result<_, StorefrontError>>()?;
		Ok(Self { bindings })
	}

	pub fn lookup(&self, chord: Node) -> Option<&ShortcutAction> {
		self.bindings.iter().find(|(node, _)| *node == chord).map(|(_, action)| action)
	}

	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use lootbox_keymap_parser::{Key, Modifier};
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::options::default_bindings;

	#[test]
	fn default_table_resolves() {
		let shortcuts = Shortcuts::new(&default_bindings()).unwrap();
		assert_eq!(shortcuts.len(), 7);
		let alt_p = Node::new(Modifier::Alt as u8, Key::Char('p'));
		assert_eq!(shortcuts.lookup(alt_p), Some(&ShortcutAction::Navigate("#peripherals".into())));
		assert_eq!(shortcuts.lookup(Key::Escape.into()), Some(&ShortcutAction::CloseMenu));
		assert_eq!(shortcuts.lookup(Key::Char('p').into()), None);
	}

	#[test]
	fn bad_chord_is_reported() {
		let err = Shortcuts::new(&[Binding::new("alt-", ShortcutAction::CloseMenu)]).unwrap_err();
		assert!(matches!(err, StorefrontError::Shortcut { keys, .. } if keys == "alt-"));
	}
}
