use lootbox_document::Element;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

struct Page {
	doc: Document,
	home: NodeId,
	shop: NodeId,
	home_link: NodeId,
	shop_link: NodeId,
}

fn page() -> Page {
	let mut doc = Document::default();
	let root = doc.root();
	let nav = doc.append(root, Element::new("nav"));
	let home_link = doc.append(nav, Element::new("a").with_classes("nav-link nav-trigger").with_attr("href", "#home"));
	let shop_link = doc.append(nav, Element::new("a").with_classes("nav-link nav-trigger").with_attr("href", "#shop"));
	let home = doc.append(root, Element::new("section").with_id("home").with_classes("page").with_height(900.0));
	let shop = doc.append(root, Element::new("section").with_id("shop").with_classes("page").with_height(900.0));
	Page {
		doc,
		home,
		shop,
		home_link,
		shop_link,
	}
}

#[rstest]
#[case("#home", "home")]
#[case("home", "home")]
#[case("#", "")]
#[case("", "")]
#[case("##x", "#x")]
fn section_keys(#[case] fragment: &str, #[case] key: &str) {
	assert_eq!(section_key(fragment), key);
}

#[test]
fn show_page_activates_exactly_one_section() {
	let Page {
		mut doc,
		home,
		shop,
		home_link,
		shop_link,
	} = page();
	let mut router = Router::attach(&doc);

	router.show_page(&mut doc, "#home");
	let transition = router.show_page(&mut doc, "#shop");

	assert_eq!(transition.section, Some(shop));
	assert_eq!(transition.reveal_after, Some(REVEAL_DELAY));
	assert!(doc.has_class(shop, "active"));
	assert!(!doc.has_class(home, "active"));
	assert!(doc.has_class(shop_link, "active"));
	assert_eq!(doc.attr(shop_link, "aria-current"), Some("page"));
	assert!(!doc.has_class(home_link, "active"));
	assert_eq!(doc.attr(home_link, "aria-current"), None);
	assert_eq!(router.active_section(&doc), Some("shop"));
}

#[test]
fn unknown_fragment_leaves_nothing_active() {
	let Page {
		mut doc,
		home,
		shop,
		home_link,
		..
	} = page();
	let mut router = Router::attach(&doc);
	router.show_page(&mut doc, "#home");

	let transition = router.show_page(&mut doc, "#missing");

	assert_eq!(transition.section, None);
	assert_eq!(transition.reveal_after, None);
	assert!(!doc.has_class(home, "active"));
	assert!(!doc.has_class(shop, "active"));
	assert!(!doc.has_class(home_link, "active"));
	assert_eq!(router.active(), None);
}

#[test]
fn nav_match_uses_full_href() {
	let Page {
		mut doc,
		home,
		home_link,
		..
	} = page();
	let mut router = Router::attach(&doc);

	router.show_page(&mut doc, "home");

	assert!(doc.has_class(home, "active"));
	assert!(!doc.has_class(home_link, "active"));
}

#[test]
fn show_page_scrolls_to_top_smoothly() {
	let Page { mut doc, .. } = page();
	let mut router = Router::attach(&doc);
	router.show_page(&mut doc, "#home");
	doc.set_scroll_y(400.0);

	router.show_page(&mut doc, "#shop");

	assert_eq!(doc.scroll_y(), 0.0);
	let last = doc.scroll_requests().last().copied();
	assert_eq!(last.map(|r| r.behavior), Some(ScrollBehavior::Smooth));
}

#[test]
fn navigate_pushes_history_and_pop_state_does_not() {
	let Page { mut doc, home, shop, .. } = page();
	let mut router = Router::attach(&doc);
	let mut history = History::default();
	router.pop_state(&mut doc, &history);
	assert!(doc.has_class(home, "active"));

	router.navigate(&mut doc, &mut history, "#shop");
	assert_eq!(history.len(), 2);
	assert!(doc.has_class(shop, "active"));

	assert!(history.back());
	router.pop_state(&mut doc, &history);
	assert_eq!(history.len(), 2);
	assert!(doc.has_class(home, "active"));
	assert!(!doc.has_class(shop, "active"));
}

#[test]
fn attach_picks_up_preactivated_page() {
	let Page { mut doc, shop, .. } = page();
	doc.add_class(shop, "active");
	let router = Router::attach(&doc);
	assert_eq!(router.active(), Some(shop));
	assert_eq!(router.pages().len(), 2);
}
