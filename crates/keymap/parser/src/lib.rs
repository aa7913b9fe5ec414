//! Keyboard shortcut parsing.
//!
//! Turns plain-text shortcut definitions such as `"alt-h"`, `"escape"` or
//! `"shift-enter"` into [`Node`] values that can be compared against incoming
//! key events.

mod node;
mod parser;

pub use node::{KEY_SEP, Key, Modifier, Node};
pub use parser::{ParseError, parse};
