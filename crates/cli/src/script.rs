//! Session scripts: one page event per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! key alt-c
//! key Escape
//! add "Noctua NH-D15"
//! wait 300
//! click "#cart-button"
//! input #name "Ada Lovelace"
//! ```
//!
//! Arguments split on whitespace. A word that starts with `"` runs to the
//! closing quote, with `\"` and `\\` escapes. Element targets are CSS
//! selectors resolved to their first match when the step runs.

use std::str::FromStr;
use std::time::Duration;

use lootbox_document::{NodeId, Selector};
use lootbox_keymap_parser::{Key, Node};
use lootbox_storage::Storage;
use lootbox_storefront::{Event, Storefront, find_card};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
mod tests;

/// A script line that could not be parsed or run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ScriptError {
	pub line: usize,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
	Click(String),
	Key(Node),
	Scroll(f64),
	Back,
	Forward,
	Hover(String),
	Leave(String),
	Move { target: String, x: f64, y: f64 },
	Focus(String),
	Blur,
	Input { target: String, value: String },
	Submit(String),
	Load(String),
	Wait(Duration),
	/// Runs every pending timer.
	Idle,
	/// Clicks the add-to-cart button of the named product's card.
	Add(String),
}

const COMMANDS: &[&str] = &[
	"click", "key", "scroll", "back", "forward", "hover", "leave", "move", "focus", "blur", "input", "submit", "load",
	"wait", "idle", "add",
];

/// A parsed script. Steps keep their 1-based source line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
	steps: Vec<(usize, Step)>,
}

impl FromStr for Script {
	type Err = ScriptError;

	fn from_str(source: &str) -> Result<Self, Self::Err> {
		let mut steps = Vec::new();
		for (index, raw) in source.lines().enumerate() {
			let line = index + 1;
			let trimmed = raw.trim();
			if trimmed.is_empty() || trimmed.starts_with('#') {
				continue;
			}
			let step = split_words(trimmed)
				.and_then(|words| parse_step(&words))
				.map_err(|message| ScriptError { line, message })?;
			steps.push((line, step));
		}
		Ok(Self { steps })
	}
}

impl Script {
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Plays every step against `shop`, stopping at the first failure.
	pub fn run<S: Storage>(&self, shop: &mut Storefront<S>) -> Result<(), ScriptError> {
		for (line, step) in &self.steps {
			let line = *line;
			let fail = move |message: String| ScriptError { line, message };
			debug!(line, ?step, "script.step");
			let event = match step {
				Step::Wait(delta) => {
					shop.advance(*delta).map_err(|e| fail(e.to_string()))?;
					continue;
				}
				Step::Idle => {
					shop.run_until_idle().map_err(|e| fail(e.to_string()))?;
					continue;
				}
				Step::Add(product) => Event::Click(add_button(shop, product).map_err(fail)?),
				Step::Click(target) => Event::Click(resolve(shop, target).map_err(fail)?),
				Step::Key(chord) => Event::Key(*chord),
				Step::Scroll(top) => Event::Scroll(*top),
				Step::Back => Event::Back,
				Step::Forward => Event::Forward,
				Step::Hover(target) => Event::PointerEnter(resolve(shop, target).map_err(fail)?),
				Step::Leave(target) => Event::PointerLeave(resolve(shop, target).map_err(fail)?),
				Step::Move { target, x, y } => Event::PointerMove {
					target: resolve(shop, target).map_err(fail)?,
					x: *x,
					y: *y,
				},
				Step::Focus(target) => Event::Focus(resolve(shop, target).map_err(fail)?),
				Step::Blur => Event::Blur,
				Step::Input { target, value } => Event::Input {
					target: resolve(shop, target).map_err(fail)?,
					value: value.clone(),
				},
				Step::Submit(target) => Event::Submit(resolve(shop, target).map_err(fail)?),
				Step::Load(target) => Event::ImageLoad(resolve(shop, target).map_err(fail)?),
			};
			shop.dispatch(event).map_err(|e| fail(e.to_string()))?;
		}
		Ok(())
	}
}

fn resolve<S: Storage>(shop: &Storefront<S>, selector: &str) -> Result<NodeId, String> {
	shop.document()
		.query_selector(selector)
		.map_err(|e| e.to_string())?
		.ok_or_else(|| format!("no element matches '{selector}'"))
}

fn add_button<S: Storage>(shop: &Storefront<S>, product: &str) -> Result<NodeId, String> {
	let doc = shop.document();
	let card = find_card(doc, product).ok_or_else(|| format!("no product card titled '{product}'"))?;
	doc.descendant_with_class(card, "add-to-cart")
		.ok_or_else(|| format!("'{product}' has no add-to-cart button"))
}

fn parse_step(words: &[String]) -> Result<Step, String> {
	let Some((command, args)) = words.split_first() else {
		return Err("empty step".to_owned());
	};
	match (command.as_str(), args) {
		("click", [target]) => Ok(Step::Click(selector(target)?)),
		("key", [chord]) => key(chord).map(Step::Key),
		("scroll", [top]) => Ok(Step::Scroll(number(top)?)),
		("back", []) => Ok(Step::Back),
		("forward", []) => Ok(Step::Forward),
		("hover", [target]) => Ok(Step::Hover(selector(target)?)),
		("leave", [target]) => Ok(Step::Leave(selector(target)?)),
		("move", [target, x, y]) => Ok(Step::Move {
			target: selector(target)?,
			x: number(x)?,
			y: number(y)?,
		}),
		("focus", [target]) => Ok(Step::Focus(selector(target)?)),
		("blur", []) => Ok(Step::Blur),
		("input", [target, value]) => Ok(Step::Input {
			target: selector(target)?,
			value: value.clone(),
		}),
		("submit", [target]) => Ok(Step::Submit(selector(target)?)),
		("load", [target]) => Ok(Step::Load(selector(target)?)),
		("wait", [delay]) => Ok(Step::Wait(millis(delay)?)),
		("idle", []) => Ok(Step::Idle),
		("add", [product]) => Ok(Step::Add(product.clone())),
		(name, _) if COMMANDS.contains(&name) => Err(format!("wrong number of arguments for '{name}'")),
		(name, _) => Err(format!("unknown command '{name}'")),
	}
}

fn selector(raw: &str) -> Result<String, String> {
	raw.parse::<Selector>().map_err(|e| e.to_string())?;
	Ok(raw.to_owned())
}

/// A shortcut chord (`alt-c`), or a bare DOM key name (`Escape`, `" "`).
fn key(raw: &str) -> Result<Node, String> {
	raw.parse::<Node>().or_else(|e| {
		Key::from_dom(raw)
			.map(Node::from)
			.ok_or_else(|| format!("invalid key '{raw}': {e}"))
	})
}

fn number(raw: &str) -> Result<f64, String> {
	raw.parse::<f64>()
		.ok()
		.filter(|n| n.is_finite())
		.ok_or_else(|| format!("expected a number, found '{raw}'"))
}

/// `300` or `300ms`.
fn millis(raw: &str) -> Result<Duration, String> {
	raw.strip_suffix("ms")
		.unwrap_or(raw)
		.parse::<u64>()
		.map(Duration::from_millis)
		.map_err(|_| format!("expected milliseconds, found '{raw}'"))
}

fn split_words(line: &str) -> Result<Vec<String>, String> {
	let mut words = Vec::new();
	let mut chars = line.chars().peekable();
	loop {
		while chars.next_if(|c| c.is_whitespace()).is_some() {}
		let Some(&first) = chars.peek() else {
			break;
		};
		let mut word = String::new();
		if first == '"' {
			chars.next();
			loop {
				match chars.next() {
					Some('"') => break,
					Some('\\') => match chars.next() {
						Some(escaped) => word.push(escaped),
						None => return Err("unterminated quote".to_owned()),
					},
					Some(c) => word.push(c),
					None => return Err("unterminated quote".to_owned()),
				}
			}
			if chars.peek().is_some_and(|c| !c.is_whitespace()) {
				return Err("expected whitespace after closing quote".to_owned());
			}
		} else {
			while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
				word.push(c);
			}
		}
		words.push(word);
	}
	Ok(words)
}
