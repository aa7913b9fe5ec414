use pretty_assertions::assert_eq;

use super::*;
use crate::element::ClassList;

fn page_with_sections() -> (Document, NodeId, NodeId) {
	let mut doc = Document::new(Viewport {
		width: 1000.0,
		height: 500.0,
	});
	let root = doc.root();
	doc.append(root, Element::new("header").with_height(60.0));
	let a = doc.append(root, Element::new("section").with_id("a").with_classes("page active").with_height(900.0));
	let b = doc.append(root, Element::new("section").with_id("b").with_classes("page").with_height(400.0));
	doc.layout();
	(doc, a, b)
}

#[test]
fn append_registers_first_id() {
	let mut doc = Document::default();
	let root = doc.root();
	let first = doc.append(root, Element::new("div").with_id("x"));
	doc.append(root, Element::new("div").with_id("x"));
	assert_eq!(doc.get_element_by_id("x"), Some(first));
}

#[test]
fn remove_detaches_subtree() {
	let mut doc = Document::default();
	let root = doc.root();
	let outer = doc.append(root, Element::new("div").with_id("outer"));
	let inner = doc.append(outer, Element::new("span").with_id("inner"));
	doc.focus(inner);

	doc.remove(outer);

	assert_eq!(doc.get_element_by_id("outer"), None);
	assert_eq!(doc.get_element_by_id("inner"), None);
	assert!(!doc.is_attached(inner));
	assert_eq!(doc.focused(), None);
	assert!(doc.descendants(root).is_empty());
}

#[test]
fn descendants_are_preorder() {
	let mut doc = Document::default();
	let root = doc.root();
	let a = doc.append(root, Element::new("div"));
	let a1 = doc.append(a, Element::new("p"));
	let b = doc.append(root, Element::new("div"));
	let a2 = doc.append(a, Element::new("p"));
	assert_eq!(doc.descendants(root), vec![a, a1, a2, b]);
}

#[test]
fn closest_includes_self() {
	let mut doc = Document::default();
	let root = doc.root();
	let card = doc.append(root, Element::new("div").with_classes("product-card"));
	let button = doc.append(card, Element::new("button"));
	assert_eq!(doc.closest_with_class(button, "product-card"), Some(card));
	assert_eq!(doc.closest_with_class(card, "product-card"), Some(card));
	assert_eq!(doc.closest_with_class(root, "product-card"), None);
}

#[test]
fn inactive_pages_are_not_laid_out() {
	let (doc, a, b) = page_with_sections();
	assert_eq!(doc.element(a).rect, Some(Rect::new(0.0, 60.0, 1000.0, 900.0)));
	assert_eq!(doc.element(b).rect, None);
	assert_eq!(doc.document_height(), 960.0);
}

#[test]
fn scroll_is_clamped() {
	let (mut doc, ..) = page_with_sections();
	doc.set_scroll_y(10_000.0);
	assert_eq!(doc.scroll_y(), 460.0);
	doc.set_scroll_y(-5.0);
	assert_eq!(doc.scroll_y(), 0.0);
}

#[test]
fn scroll_to_is_logged() {
	let (mut doc, ..) = page_with_sections();
	doc.set_scroll_y(200.0);
	doc.scroll_to(0.0, ScrollBehavior::Smooth);
	assert_eq!(doc.scroll_y(), 0.0);
	assert_eq!(
		doc.scroll_requests(),
		[ScrollRequest {
			top: 0.0,
			behavior: ScrollBehavior::Smooth,
		}]
	);
}

#[test]
fn switching_active_page_relayouts() {
	let (mut doc, a, b) = page_with_sections();
	doc.remove_class(a, "active");
	doc.add_class(b, "active");
	doc.layout();
	assert_eq!(doc.element(a).rect, None);
	assert_eq!(doc.element(b).rect, Some(Rect::new(0.0, 60.0, 1000.0, 400.0)));
}

#[test]
fn outer_html_escapes() {
	let mut doc = Document::default();
	let root = doc.root();
	let p = doc.append(
		root,
		Element::new("p")
			.with_id("q")
			.with_classes("a b")
			.with_attr("title", "\"x\"")
			.with_text("1 < 2 & 3"),
	);
	doc.append(p, Element::new("img").with_attr("src", "i.png"));
	assert_eq!(
		doc.outer_html(p),
		r#"<p id="q" class="a b" title="&quot;x&quot;">1 &lt; 2 &amp; 3<img src="i.png"></p>"#
	);
}

#[test]
fn class_list_toggle() {
	let mut classes = ClassList::parse("a  b a");
	assert_eq!(classes.to_string(), "a b");
	classes.toggle("c", true);
	classes.toggle("a", false);
	assert_eq!(classes.to_string(), "b c");
	assert!(!classes.add("b"));
	assert!(!classes.remove("z"));
}

#[test]
fn removed_slots_are_reused() {
	let mut doc = Document::default();
	let root = doc.root();
	for round in 0..100 {
		let toast = doc.append(root, Element::new("div").with_classes("toast"));
		doc.append(toast, Element::new("span").with_text(format!("toast {round}")));
		doc.remove(toast);
	}
	assert_eq!(doc.nodes.len(), 3);

	let outer = doc.append(root, Element::new("div").with_id("outer"));
	doc.remove(outer);
	doc.remove(outer);
	let a = doc.append(root, Element::new("p"));
	let b = doc.append(root, Element::new("p"));
	assert_ne!(a, b, "a double remove must not free a slot twice");
	assert_eq!(doc.descendants(root), [a, b]);
}

#[test]
fn scroll_log_keeps_recent_requests() {
	let (mut doc, ..) = page_with_sections();
	for top in 0..(SCROLL_LOG_LIMIT + 10) {
		doc.scroll_to(top as f64, ScrollBehavior::Auto);
	}
	let requests = doc.scroll_requests();
	assert_eq!(requests.len(), SCROLL_LOG_LIMIT);
	assert_eq!(requests[0].top, 10.0);
	assert_eq!(requests[SCROLL_LOG_LIMIT - 1].top, (SCROLL_LOG_LIMIT + 9) as f64);
}
