use pretty_assertions::assert_eq;

use super::*;

const MINIMAL: &str = r##"
nav = [{ href = "#home", label = "Home" }]

[[sections]]
id = "home"

[[sections.blocks]]
kind = "card"
name = "Widget"
price = "₱100"
"##;

#[test]
fn bundled_markup_parses() {
	let markup = Markup::bundled().unwrap();
	let ids: Vec<_> = markup.sections.iter().map(|s| s.id.as_str()).collect();
	assert_eq!(ids, ["home", "components", "peripherals", "about"]);
	assert_eq!(markup.nav.len(), 4);
}

#[test]
fn card_defaults_to_add_to_cart() {
	let markup = Markup::from_toml_str(MINIMAL).unwrap();
	let Block::Card(card) = &markup.sections[0].blocks[0] else {
		panic!("expected card block");
	};
	assert_eq!(card.action, CardAction::AddToCart);
	assert!(card.animate);
	assert!(markup.mobile_menu);
}

#[test]
fn view_details_action() {
	let source = r##"
[[sections]]
id = "home"

[[sections.blocks]]
kind = "card"
name = "GPU"
price = "₱1"
action = { view-details = { href = "#components" } }
"##;
	let markup = Markup::from_toml_str(source).unwrap();
	let Block::Card(card) = &markup.sections[0].blocks[0] else {
		panic!("expected card block");
	};
	assert_eq!(
		card.action,
		CardAction::ViewDetails {
			href: "#components".into()
		}
	);
}

#[test]
fn rejects_empty_sections() {
	let err = Markup::from_toml_str("sections = []").unwrap_err();
	assert!(matches!(err, MarkupError::NoSections));
}

#[test]
fn rejects_duplicate_section_ids() {
	let source = r#"
[[sections]]
id = "home"

[[sections]]
id = "home"
"#;
	let err = Markup::from_toml_str(source).unwrap_err();
	assert!(matches!(err, MarkupError::DuplicateId(id) if id == "home"));
}

#[test]
fn rejects_reserved_ids() {
	let err = Markup::from_toml_str("[[sections]]\nid = \"back-to-top\"\n").unwrap_err();
	assert!(matches!(err, MarkupError::DuplicateId(id) if id == "back-to-top"));
}

#[test]
fn rejects_unknown_block_kind() {
	let source = "[[sections]]\nid = \"home\"\n[[sections.blocks]]\nkind = \"carousel\"\n";
	assert!(matches!(Markup::from_toml_str(source), Err(MarkupError::Toml(_))));
}

#[test]
fn build_produces_expected_structure() {
	let doc = Markup::from_toml_str(MINIMAL).unwrap().build(Viewport::default());

	let home = doc.get_element_by_id("home").unwrap();
	assert!(doc.has_class(home, "page"));
	assert!(!doc.has_class(home, "active"));

	let card = doc.descendant_with_class(home, "product-card").unwrap();
	let title = doc.descendant_with_tag(card, "h3").unwrap();
	assert_eq!(doc.text(title), "Widget");
	let price = doc.descendant_with_class(card, "text-indigo-400").unwrap();
	assert_eq!(doc.text(price), "₱100");
	let button = doc.descendant_with_class(card, "add-to-cart").unwrap();
	assert_eq!(doc.text(button), "Add to Cart");

	let link = doc.find_anchor("#home").unwrap();
	assert!(doc.has_class(link, "nav-link"));
	assert!(doc.has_class(link, "nav-trigger"));

	let badge = doc.get_element_by_id("cart-count").unwrap();
	assert!(doc.has_class(badge, "hidden"));
	assert_eq!(doc.text(badge), "0");
	assert!(doc.get_element_by_id("mobile-cart-count").is_some());
	assert!(doc.get_element_by_id("back-to-top").is_some());
	assert!(doc.get_element_by_id("current-year").is_some());
	assert!(doc.get_element_by_id("contact-form").is_none());
}

#[test]
fn mobile_menu_starts_closed() {
	let doc = Markup::bundled().unwrap().build(Viewport::default());
	let button = doc.get_element_by_id("mobile-menu-button").unwrap();
	assert_eq!(doc.attr(button, "aria-expanded"), Some("false"));
	let menu = doc.get_element_by_id("mobile-menu").unwrap();
	assert!(doc.has_class(menu, "hidden"));
	let close = doc.descendant_with_class(button, "close-icon").unwrap();
	assert!(doc.has_class(close, "hidden"));
	assert_eq!(doc.elements_with_class("mobile-nav-link").len(), 4);
	assert_eq!(doc.elements_with_class("nav-link").len(), 4);
}

#[test]
fn contact_form_fields() {
	let doc = Markup::bundled().unwrap().build(Viewport::default());
	for id in [
		"contact-form",
		"name",
		"name-error",
		"email",
		"email-error",
		"message",
		"message-error",
		"message-count",
		"submit-btn",
		"form-success",
	] {
		assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
	}
	let success = doc.get_element_by_id("form-success").unwrap();
	assert!(doc.has_class(success, "hidden"));
}

#[test]
fn stat_targets_are_attributes() {
	let doc = Markup::bundled().unwrap().build(Viewport::default());
	let targets: Vec<_> = doc
		.elements_with_class("stat-number")
		.into_iter()
		.filter_map(|n| doc.attr(n, "data-target"))
		.collect();
	assert_eq!(targets, ["10000", "99", "24"]);
}
