//! CSS selector subset for `querySelector`-style lookups.
//!
//! Supported: type, `#id`, `.class` and `[attr]` / `[attr="value"]`
//! compounds joined by descendant (whitespace) or child (`>`) combinators.

use std::str::FromStr;

use thiserror::Error;

use crate::document::Document;
use crate::element::{Element, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported selector '{selector}': {reason}")]
pub struct SelectorError {
	pub selector: String,
	pub reason: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
	tag: Option<String>,
	id: Option<String>,
	classes: Vec<String>,
	attrs: Vec<(String, Option<String>)>,
}

impl Compound {
	fn matches(&self, el: &Element) -> bool {
		self.tag.as_ref().is_none_or(|t| el.tag.eq_ignore_ascii_case(t))
			&& self.id.as_ref().is_none_or(|id| el.id.as_ref() == Some(id))
			&& self.classes.iter().all(|c| el.has_class(c))
			&& self.attrs.iter().all(|(name, value)| match value {
				Some(value) => el.attr(name) == Some(value.as_str()),
				None => el.attr(name).is_some(),
			})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
	Descendant,
	Child,
}

/// A parsed selector chain, rightmost compound last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
	parts: Vec<(Combinator, Compound)>,
}

impl FromStr for Selector {
	type Err = SelectorError;

	fn from_str(selector: &str) -> Result<Self, Self::Err> {
		let fail = |reason| SelectorError {
			selector: selector.to_owned(),
			reason,
		};
		let mut parts = Vec::new();
		let mut pending = Combinator::Descendant;
		for token in tokenize(selector).map_err(fail)? {
			if token == ">" {
				if parts.is_empty() || pending == Combinator::Child {
					return Err(fail("dangling '>'"));
				}
				pending = Combinator::Child;
				continue;
			}
			parts.push((pending, parse_compound(&token).map_err(fail)?));
			pending = Combinator::Descendant;
		}
		if parts.is_empty() {
			return Err(fail("empty selector"));
		}
		if pending == Combinator::Child {
			return Err(fail("dangling '>'"));
		}
		Ok(Self { parts })
	}
}

impl Selector {
	/// Whether `node` matches, with ancestors resolved up to the document root.
	pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
		self.matches_at(doc, node, self.parts.len() - 1)
	}

	fn matches_at(&self, doc: &Document, node: NodeId, index: usize) -> bool {
		let (combinator, compound) = &self.parts[index];
		if !compound.matches(doc.element(node)) {
			return false;
		}
		if index == 0 {
			return true;
		}
		let mut ancestor = doc.element(node).parent();
		while let Some(candidate) = ancestor {
			if self.matches_at(doc, candidate, index - 1) {
				return true;
			}
			if *combinator == Combinator::Child {
				return false;
			}
			ancestor = doc.element(candidate).parent();
		}
		false
	}
}

fn tokenize(selector: &str) -> Result<Vec<String>, &'static str> {
	let mut tokens = Vec::new();
	let mut current = String::new();
	let mut quote = None;
	let mut in_brackets = false;
	for ch in selector.chars() {
		match (quote, ch) {
			(Some(q), c) if c == q => {
				quote = None;
				current.push(c);
			}
			(Some(_), c) => current.push(c),
			(None, '"' | '\'') if in_brackets => {
				quote = Some(ch);
				current.push(ch);
			}
			(None, '[') => {
				in_brackets = true;
				current.push(ch);
			}
			(None, ']') => {
				in_brackets = false;
				current.push(ch);
			}
			(None, '>') if !in_brackets => {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
				tokens.push(">".to_owned());
			}
			(None, c) if c.is_whitespace() && !in_brackets => {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
			}
			(None, c) => current.push(c),
		}
	}
	if quote.is_some() || in_brackets {
		return Err("unterminated attribute selector");
	}
	if !current.is_empty() {
		tokens.push(current);
	}
	Ok(tokens)
}

fn parse_compound(token: &str) -> Result<Compound, &'static str> {
	let mut compound = Compound::default();
	let mut rest = token;
	while !rest.is_empty() {
		if let Some(after) = rest.strip_prefix('#') {
			let (ident, tail) = split_ident(after)?;
			if compound.id.replace(ident.to_owned()).is_some() {
				return Err("more than one id");
			}
			rest = tail;
		} else if let Some(after) = rest.strip_prefix('.') {
			let (ident, tail) = split_ident(after)?;
			compound.classes.push(ident.to_owned());
			rest = tail;
		} else if let Some(after) = rest.strip_prefix('[') {
			let end = after.find(']').ok_or("unterminated attribute selector")?;
			compound.attrs.push(parse_attr(&after[..end])?);
			rest = &after[end + 1..];
		} else {
			if compound.tag.is_some() || compound.id.is_some() || !compound.classes.is_empty() || !compound.attrs.is_empty() {
				return Err("type selector must come first");
			}
			let (ident, tail) = split_ident(rest)?;
			compound.tag = Some(ident.to_owned());
			rest = tail;
		}
	}
	Ok(compound)
}

fn split_ident(s: &str) -> Result<(&str, &str), &'static str> {
	let end = s
		.find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
		.unwrap_or(s.len());
	if end == 0 {
		return Err("expected an identifier");
	}
	Ok(s.split_at(end))
}

fn parse_attr(body: &str) -> Result<(String, Option<String>), &'static str> {
	let Some((name, value)) = body.split_once('=') else {
		let (name, tail) = split_ident(body.trim())?;
		return if tail.is_empty() { Ok((name.to_owned(), None)) } else { Err("unsupported attribute operator") };
	};
	let (name, tail) = split_ident(name.trim())?;
	if !tail.is_empty() {
		return Err("unsupported attribute operator");
	}
	let value = value.trim();
	let unquoted = ['"', '\'']
		.iter()
		.find_map(|&q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
		.unwrap_or(value);
	Ok((name.to_owned(), Some(unquoted.to_owned())))
}

impl Document {
	/// First element in document order matching `selector`.
	pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
		let selector: Selector = selector.parse()?;
		Ok(self
			.descendants(self.root())
			.into_iter()
			.find(|&n| selector.matches(self, n)))
	}

	/// Every element in document order matching `selector`.
	pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
		let selector: Selector = selector.parse()?;
		Ok(self
			.descendants(self.root())
			.into_iter()
			.filter(|&n| selector.matches(self, n))
			.collect())
	}
}
