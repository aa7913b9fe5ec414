use lootbox_document::{Markup, Viewport};
use lootbox_storage::MemoryStorage;
use lootbox_storefront::Options;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn shop() -> Storefront<MemoryStorage> {
	let doc = Markup::bundled().unwrap().build(Viewport::default());
	Storefront::new(doc, MemoryStorage::new(), Options::default()).unwrap()
}

#[test]
fn parses_steps_with_line_numbers() {
	let script: Script = "\n# open the catalog\nkey alt-c\nadd \"Noctua NH-D15\"\nwait 300ms\ninput #name \"Ada \\\"A\\\" L\"\nmove .product-card 10 20.5\n"
		.parse()
		.unwrap();
	assert_eq!(
		script.steps,
		[
			(3, Step::Key("alt-c".parse().unwrap())),
			(4, Step::Add("Noctua NH-D15".into())),
			(5, Step::Wait(Duration::from_millis(300))),
			(
				6,
				Step::Input {
					target: "#name".into(),
					value: "Ada \"A\" L".into()
				}
			),
			(
				7,
				Step::Move {
					target: ".product-card".into(),
					x: 10.0,
					y: 20.5
				}
			),
		]
	);
}

#[test]
fn attribute_selectors_keep_inner_quotes() {
	let script: Script = "click a[href=\"#about\"]".parse().unwrap();
	assert_eq!(script.steps, [(1, Step::Click("a[href=\"#about\"]".into()))]);
}

#[rstest]
#[case("key escape", Key::Escape)]
#[case("key Escape", Key::Escape)]
#[case("key \" \"", Key::Space)]
#[case("key Enter", Key::Enter)]
fn key_accepts_dom_names(#[case] source: &str, #[case] expected: Key) {
	let script: Script = source.parse().unwrap();
	assert_eq!(script.steps, [(1, Step::Key(Node::from(expected)))]);
}

#[rstest]
#[case("jump #home", 1, "unknown command 'jump'")]
#[case("back\nclick", 2, "wrong number of arguments for 'click'")]
#[case("wait soon", 1, "expected milliseconds, found 'soon'")]
#[case("scroll NaN", 1, "expected a number, found 'NaN'")]
#[case("input #name \"Ada", 1, "unterminated quote")]
#[case("click \"#a\"b", 1, "expected whitespace after closing quote")]
#[case("\n\nkey alt-", 3, "invalid key 'alt-'")]
fn reports_bad_lines(#[case] source: &str, #[case] line: usize, #[case] message: &str) {
	let err = source.parse::<Script>().unwrap_err();
	assert_eq!(err.line, line);
	assert!(err.message.starts_with(message), "{}", err.message);
}

#[test]
fn malformed_selector_fails_at_parse_time() {
	let err = "hover .card>".parse::<Script>().unwrap_err();
	assert_eq!(err.line, 1);
	assert!(err.message.contains("unsupported selector"), "{}", err.message);
}

#[test]
fn session_adds_and_navigates() {
	let mut shop = shop();
	let script: Script = "key alt-c\nadd \"Noctua NH-D15\"\nadd \"Noctua NH-D15\"\nwait 300\nclick #cart-button"
		.parse()
		.unwrap();
	script.run(&mut shop).unwrap();

	let state = shop.state();
	assert_eq!(state.active_section.as_deref(), Some("components"));
	assert_eq!(state.cart.len(), 1);
	assert_eq!(state.cart[0].quantity, 1, "second click lands on a disabled button");
	assert_eq!(state.effects.len(), 1);
}

#[test]
fn missing_element_names_the_line() {
	let mut shop = shop();
	let script: Script = "back\nclick #checkout".parse().unwrap();
	let err = script.run(&mut shop).unwrap_err();
	assert_eq!(
		err,
		ScriptError {
			line: 2,
			message: "no element matches '#checkout'".into()
		}
	);
}

#[test]
fn unknown_product_is_an_error() {
	let mut shop = shop();
	let err = "add \"Flux Capacitor\"".parse::<Script>().unwrap().run(&mut shop).unwrap_err();
	assert_eq!(err.to_string(), "line 1: no product card titled 'Flux Capacitor'");
}

#[test]
fn idle_drains_timers() {
	let mut shop = shop();
	let script: Script = "key alt-p\nadd \"Blue Yeti USB Mic\"\nidle".parse().unwrap();
	script.run(&mut shop).unwrap();
	assert_eq!(shop.pending_timers(), 0);
	assert!(shop.state().toasts.is_empty());
	assert_eq!(shop.cart().item_count(), 1);
}
