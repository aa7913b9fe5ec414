//! Storefront page markup.
//!
//! The page structure is declared in TOML and expanded into the element tree
//! the storefront scripts expect: `.page` sections, `.nav-link` anchors,
//! `.product-card` blocks, `#cart-count` badges and so on.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::document::Document;
use crate::element::{Element, NodeId};
use crate::geometry::Viewport;

#[cfg(test)]
mod tests;

/// Storefront shipped with the binary.
pub const DEFAULT_MARKUP: &str = include_str!("../assets/storefront.toml");

const NAV_HEIGHT: f64 = 64.0;
const HEADING_HEIGHT: f64 = 96.0;
const CARD_HEIGHT: f64 = 420.0;
const STAT_HEIGHT: f64 = 160.0;
const TEXT_HEIGHT: f64 = 120.0;
const IMAGE_HEIGHT: f64 = 360.0;
const LINK_HEIGHT: f64 = 48.0;
const FORM_HEIGHT: f64 = 560.0;
const FOOTER_HEIGHT: f64 = 120.0;

#[derive(Debug, Error)]
pub enum MarkupError {
	#[error("failed to read markup '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid storefront markup: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("duplicate element id '{0}'")]
	DuplicateId(String),
	#[error("storefront markup declares no sections")]
	NoSections,
}

/// Top-level page declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Markup {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub nav: Vec<NavLink>,
	/// Links rendered inside the collapsible mobile menu.
	#[serde(default)]
	pub mobile_nav: Vec<NavLink>,
	pub sections: Vec<Section>,
	#[serde(default = "enabled")]
	pub mobile_menu: bool,
	#[serde(default = "enabled")]
	pub cart_badges: bool,
	#[serde(default = "enabled")]
	pub back_to_top: bool,
	#[serde(default = "enabled")]
	pub footer_year: bool,
}

fn enabled() -> bool {
	true
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
	pub href: String,
	pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
	pub id: String,
	#[serde(default)]
	pub heading: Option<String>,
	#[serde(default)]
	pub blocks: Vec<Block>,
}

/// Content blocks of a section.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
	Text {
		text: String,
		#[serde(default)]
		animate: bool,
	},
	Card(ProductCard),
	Stat {
		label: String,
		target: u64,
	},
	Image {
		src: String,
		#[serde(default)]
		alt: String,
		#[serde(default = "enabled")]
		lazy: bool,
	},
	Link {
		href: String,
		label: String,
	},
	ContactForm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCard {
	pub name: String,
	pub price: String,
	#[serde(default)]
	pub image: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub action: CardAction,
	#[serde(default = "enabled")]
	pub animate: bool,
}

/// What the card's primary control does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardAction {
	#[default]
	AddToCart,
	ViewDetails {
		href: String,
	},
	None,
}

impl Markup {
	pub fn from_toml_str(source: &str) -> Result<Self, MarkupError> {
		let markup: Self = toml::from_str(source)?;
		markup.validate()?;
		Ok(markup)
	}

	pub fn load(path: &Path) -> Result<Self, MarkupError> {
		let source = std::fs::read_to_string(path).map_err(|source| MarkupError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// The markup shipped in [`DEFAULT_MARKUP`].
	pub fn bundled() -> Result<Self, MarkupError> {
		Self::from_toml_str(DEFAULT_MARKUP)
	}

	fn validate(&self) -> Result<(), MarkupError> {
		if self.sections.is_empty() {
			return Err(MarkupError::NoSections);
		}
		let mut seen = FxHashSet::default();
		let mut contact_forms = 0;
		for section in &self.sections {
			if !seen.insert(section.id.as_str()) {
				return Err(MarkupError::DuplicateId(section.id.clone()));
			}
			contact_forms += section.blocks.iter().filter(|b| matches!(b, Block::ContactForm)).count();
		}
		if contact_forms > 1 {
			return Err(MarkupError::DuplicateId("contact-form".to_string()));
		}
		for id in RESERVED_IDS {
			if seen.contains(id) {
				return Err(MarkupError::DuplicateId((*id).to_string()));
			}
		}
		Ok(())
	}

	/// Expands the markup into a laid-out document.
	pub fn build(&self, viewport: Viewport) -> Document {
		let mut doc = Document::new(viewport);
		let root = doc.root();

		let header = doc.append(root, Element::new("header").with_height(NAV_HEIGHT));
		let nav = doc.append(header, Element::new("nav"));
		for link in &self.nav {
			doc.append(
				nav,
				Element::new("a")
					.with_classes("nav-link nav-trigger")
					.with_attr("href", &link.href)
					.with_text(&link.label),
			);
		}
		if self.cart_badges {
			let cart = doc.append(
				header,
				Element::new("button")
					.with_id("cart-button")
					.with_attr("aria-label", "View cart"),
			);
			doc.append(cart, Element::new("span").with_id("cart-count").with_classes("cart-badge hidden").with_text("0"));
		}
		if self.mobile_menu {
			let button = doc.append(
				header,
				Element::new("button")
					.with_id("mobile-menu-button")
					.with_attr("aria-expanded", "false")
					.with_attr("aria-controls", "mobile-menu"),
			);
			doc.append(button, Element::new("span").with_classes("menu-icon"));
			doc.append(button, Element::new("span").with_classes("close-icon hidden"));
			let menu = doc.append(header, Element::new("div").with_id("mobile-menu").with_classes("hidden"));
			for link in &self.mobile_nav {
				doc.append(
					menu,
					Element::new("a")
						.with_classes("mobile-nav-link nav-trigger")
						.with_attr("href", &link.href)
						.with_text(&link.label)
						.with_height(LINK_HEIGHT),
				);
			}
			if self.cart_badges {
				let cart = doc.append(
					menu,
					Element::new("button")
						.with_id("mobile-cart-button")
						.with_text("Cart")
						.with_height(LINK_HEIGHT),
				);
				doc.append(cart, Element::new("span").with_id("mobile-cart-count").with_text("0"));
			}
		}

		let main = doc.append(root, Element::new("main"));
		for section in &self.sections {
			let page = doc.append(main, Element::new("section").with_id(&section.id).with_classes("page"));
			if let Some(heading) = &section.heading {
				doc.append(page, Element::new("h2").with_text(heading).with_height(HEADING_HEIGHT));
			}
			for block in &section.blocks {
				build_block(&mut doc, page, block);
			}
		}

		if self.back_to_top {
			doc.append(
				root,
				Element::new("button")
					.with_id("back-to-top")
					.with_attr("aria-label", "Back to top"),
			);
		}
		let footer = doc.append(root, Element::new("footer").with_height(FOOTER_HEIGHT));
		if self.footer_year {
			doc.append(footer, Element::new("span").with_id("current-year"));
		}

		doc.layout();
		debug!(sections = self.sections.len(), height = doc.document_height(), "markup.build");
		doc
	}
}

/// Ids generated by the builder that sections may not reuse.
const RESERVED_IDS: &[&str] = &[
	"cart-button",
	"cart-count",
	"mobile-cart-button",
	"mobile-cart-count",
	"mobile-menu",
	"mobile-menu-button",
	"back-to-top",
	"current-year",
	"contact-form",
	"name",
	"email",
	"message",
	"submit-btn",
	"form-success",
	"message-count",
];

fn build_block(doc: &mut Document, page: NodeId, block: &Block) {
	match block {
		Block::Text { text, animate } => {
			let classes = if *animate { "animate-on-scroll" } else { "" };
			doc.append(page, Element::new("p").with_classes(classes).with_text(text).with_height(TEXT_HEIGHT));
		}
		Block::Card(card) => build_card(doc, page, card),
		Block::Stat { label, target } => {
			let stat = doc.append(page, Element::new("div").with_classes("stat").with_height(STAT_HEIGHT));
			doc.append(
				stat,
				Element::new("span")
					.with_classes("stat-number")
					.with_attr("data-target", target.to_string())
					.with_text("0"),
			);
			doc.append(stat, Element::new("p").with_text(label));
		}
		Block::Image { src, alt, lazy } => {
			let classes = if *lazy { "lazy-image" } else { "" };
			doc.append(
				page,
				Element::new("img")
					.with_classes(classes)
					.with_attr("src", src)
					.with_attr("alt", alt)
					.with_height(IMAGE_HEIGHT),
			);
		}
		Block::Link { href, label } => {
			doc.append(
				page,
				Element::new("a")
					.with_classes("nav-trigger")
					.with_attr("href", href)
					.with_text(label)
					.with_height(LINK_HEIGHT),
			);
		}
		Block::ContactForm => build_contact_form(doc, page),
	}
}

fn build_card(doc: &mut Document, page: NodeId, card: &ProductCard) {
	let classes = if card.animate { "product-card animate-on-scroll" } else { "product-card" };
	let node = doc.append(page, Element::new("div").with_classes(classes).with_height(CARD_HEIGHT));
	doc.append(
		node,
		Element::new("img")
			.with_classes("lazy-image")
			.with_attr("src", &card.image)
			.with_attr("alt", &card.name),
	);
	doc.append(node, Element::new("h3").with_text(&card.name));
	doc.append(node, Element::new("p").with_classes("text-gray-400").with_text(&card.description));
	doc.append(node, Element::new("span").with_classes("text-indigo-400").with_text(&card.price));
	match &card.action {
		CardAction::AddToCart => {
			doc.append(node, Element::new("button").with_classes("add-to-cart").with_text("Add to Cart"));
		}
		CardAction::ViewDetails { href } => {
			doc.append(
				node,
				Element::new("a")
					.with_classes("nav-trigger")
					.with_attr("href", href)
					.with_text("View Details"),
			);
		}
		CardAction::None => {}
	}
}

fn build_contact_form(doc: &mut Document, page: NodeId) {
	let form = doc.append(page, Element::new("form").with_id("contact-form").with_height(FORM_HEIGHT));
	for (field, tag) in [("name", "input"), ("email", "input"), ("message", "textarea")] {
		doc.append(form, Element::new(tag).with_id(field).with_attr("name", field));
		doc.append(
			form,
			Element::new("span")
				.with_id(format!("{field}-error"))
				.with_classes("error-message")
				.with_attr("role", "alert"),
		);
	}
	doc.append(form, Element::new("span").with_id("message-count").with_text("0"));
	doc.append(
		form,
		Element::new("button")
			.with_id("submit-btn")
			.with_attr("type", "submit")
			.with_text("Send Message"),
	);
	doc.append(
		form,
		Element::new("div")
			.with_id("form-success")
			.with_classes("hidden")
			.with_text("Thanks! Your message has been sent."),
	);
}
