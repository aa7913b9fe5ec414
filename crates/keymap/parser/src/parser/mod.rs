//! # Parser
//!
//! Reads shortcut definitions such as `"alt-h"`, `"shift-enter"` or
//! `"escape"` into [`Node`] values.
//!
//! ```text
//! node      = (modifier "-")* key
//! modifier  = "ctrl" | "alt" | "opt" | "shift" | "meta" | "cmd"
//! key       = named-key | char
//! named-key = "escape" | "esc" | "enter" | "return" | "space" | "tab" | "backspace" | "bs"
//! char      = printable ascii
//! ```
//!
//! A modifier word only counts as a modifier when something follows its
//! separator, so `"-"` and `"alt--"` both end in the `-` key.

use std::fmt;
use std::str::FromStr;

use crate::node::{KEY_SEP, Key, Modifier, Node};


/// A shortcut string that does not match the grammar.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
	pub message: String,
	/// Byte offset into the input.
	pub position: usize,
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} (at byte {})", self.message, self.position)
	}
}

impl std::error::Error for ParseError {}

/// Forward-only view over a shortcut string.
struct Cursor<'a> {
	source: &'a str,
	offset: usize,
}

impl<'a> Cursor<'a> {
	fn rest(&self) -> &'a str {
		&self.source[self.offset..]
	}

	/// Leading run of ASCII letters, without consuming it.
	fn word(&self) -> &'a str {
		let rest = self.rest();
		let end = rest.find(|ch: char| !ch.is_ascii_alphabetic()).unwrap_or(rest.len());
		&rest[..end]
	}

	fn advance(&mut self, bytes: usize) {
		self.offset += bytes;
	}

	fn fail(&self, message: String) -> ParseError {
		ParseError {
			message,
			position: self.offset,
		}
	}

	fn found(&self) -> String {
		match self.rest().chars().next() {
			Some(ch) => format!("'{ch}'"),
			None => "end of input".to_owned(),
		}
	}

	/// Consumes `modifier-` when a key follows the separator.
	fn modifier(&mut self) -> Option<Modifier> {
		let word = self.word();
		let modifier = word.parse::<Modifier>().ok()?;
		let after = self.rest()[word.len()..].strip_prefix(KEY_SEP)?;
		if after.is_empty() {
			return None;
		}
		self.advance(word.len() + KEY_SEP.len_utf8());
		Some(modifier)
	}

	fn key(&mut self) -> Result<Key, ParseError> {
		let word = self.word();
		if word.len() > 1
			&& let Ok(key) = word.parse::<Key>()
		{
			self.advance(word.len());
			return Ok(key);
		}
		match self.rest().chars().next() {
			Some(ch) if ch.is_ascii_graphic() => {
				self.advance(1);
				Ok(Key::Char(ch))
			}
			_ => Err(self.fail(format!("expected a key, found {}", self.found()))),
		}
	}

	fn finish(&self) -> Result<(), ParseError> {
		if self.rest().is_empty() {
			Ok(())
		} else {
			Err(self.fail(format!("expected end of input, found {}", self.found())))
		}
	}
}

/// Parses a single shortcut expression into a [`Node`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not match the grammar.
pub fn parse(s: &str) -> Result<Node, ParseError> {
	let mut cursor = Cursor { source: s, offset: 0 };
	let mut modifiers = 0u8;
	while let Some(modifier) = cursor.modifier() {
		modifiers |= modifier as u8;
	}
	let key = cursor.key()?;
	cursor.finish()?;
	Ok(Node::new(modifiers, key))
}

impl FromStr for Node {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}
