use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn table_has_eighteen_products() {
	assert_eq!(known_products().count(), 18);
	assert!(lookup("Intel Core i9-13900K").is_some());
	assert!(lookup("intel core i9-13900k").is_none());
}

#[rstest]
#[case("Intel Core i9-13900K", "overlay-intel-core-i9-13900k")]
#[case("LG UltraGear 27\"", "overlay-lg-ultragear-27\"")]
#[case("Two  spaces\there", "overlay-two-spaces-here")]
#[case("", "overlay-")]
fn overlay_ids(#[case] name: &str, #[case] id: &str) {
	assert_eq!(overlay_id(name), id);
}

#[test]
fn known_product_overlay() {
	let overlay = OverlayContent::for_product("Next-Gen GPU", "ignored").unwrap();
	assert_eq!(overlay.heading, "Features");
	assert_eq!(overlay.aria_label, "Next-Gen GPU specifications");
	assert_eq!(overlay.lines.len(), 5);
	assert_eq!(overlay.lines[0], "High-end graphics for 4K/144Hz gaming");
}

#[test]
fn unknown_product_falls_back_to_details() {
	let overlay = OverlayContent::for_product("Gaming Chair", "Ergonomic").unwrap();
	assert_eq!(
		overlay,
		OverlayContent {
			id: "overlay-gaming-chair".into(),
			aria_label: "Gaming Chair details".into(),
			heading: "Details".into(),
			lines: vec![
				"Premium quality product".into(),
				"Full manufacturer warranty".into(),
				"Fast shipping available".into(),
			],
		}
	);
}

#[test]
fn unknown_product_without_description_has_no_overlay() {
	assert_eq!(OverlayContent::for_product("Gaming Chair", ""), None);
}
