use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between modifiers and the key in a shortcut string.
pub const KEY_SEP: char = '-';

/// Modifier keys, stored as bits in [`Node::modifiers`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
	Ctrl = 0b0001,
	Alt = 0b0010,
	Shift = 0b0100,
	Meta = 0b1000,
}

impl Modifier {
	/// All modifiers in canonical display order.
	pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Meta];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Ctrl => "ctrl",
			Self::Alt => "alt",
			Self::Shift => "shift",
			Self::Meta => "meta",
		}
	}
}

impl FromStr for Modifier {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ctrl" => Ok(Self::Ctrl),
			"alt" | "opt" => Ok(Self::Alt),
			"shift" => Ok(Self::Shift),
			"meta" | "cmd" => Ok(Self::Meta),
			_ => Err(()),
		}
	}
}

/// A key identifier, as reported by a keyboard event's `key` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	/// A printable character.
	Char(char),
	Escape,
	Enter,
	Space,
	Tab,
	Backspace,
}

impl Key {
	/// Converts a DOM-style key name (`"Escape"`, `"Enter"`, `" "`, `"h"`) into a key.
	pub fn from_dom(name: &str) -> Option<Self> {
		match name {
			"Escape" | "Esc" => Some(Self::Escape),
			"Enter" => Some(Self::Enter),
			" " | "Spacebar" => Some(Self::Space),
			"Tab" => Some(Self::Tab),
			"Backspace" => Some(Self::Backspace),
			_ => {
				let mut chars = name.chars();
				match (chars.next(), chars.next()) {
					(Some(ch), None) => Some(Self::Char(ch)),
					_ => None,
				}
			}
		}
	}
}

impl FromStr for Key {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"esc" | "escape" => Ok(Self::Escape),
			"enter" | "return" => Ok(Self::Enter),
			"space" => Ok(Self::Space),
			"tab" => Ok(Self::Tab),
			"backspace" | "bs" => Ok(Self::Backspace),
			_ => Err(()),
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(ch) => write!(f, "{ch}"),
			Self::Escape => f.write_str("escape"),
			Self::Enter => f.write_str("enter"),
			Self::Space => f.write_str("space"),
			Self::Tab => f.write_str("tab"),
			Self::Backspace => f.write_str("backspace"),
		}
	}
}

/// A single key chord: a set of modifiers plus one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
	pub modifiers: u8,
	pub key: Key,
}

impl Node {
	pub const fn new(modifiers: u8, key: Key) -> Self {
		Self { modifiers, key }
	}

	pub const fn has(&self, modifier: Modifier) -> bool {
		self.modifiers & modifier as u8 != 0
	}
}

impl From<Key> for Node {
	fn from(key: Key) -> Self {
		Self::new(0, key)
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for modifier in Modifier::ALL {
			if self.has(modifier) {
				write!(f, "{}{KEY_SEP}", modifier.as_str())?;
			}
		}
		write!(f, "{}", self.key)
	}
}

impl Serialize for Node {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Node {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}
