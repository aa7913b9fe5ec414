use std::collections::HashSet;

use lootbox_cart::{CART_STORAGE_KEY, Cart, CartItem, Product, format_price, parse_price};
use lootbox_storage::{MemoryStorage, Storage};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone)]
enum Op {
	Add(usize),
	Remove(usize),
	Update(usize, i64),
	Clear,
}

const NAMES: [&str; 5] = ["Intel Core i9-13900K", "NVIDIA RTX 4080", "Corsair RM850x", "Noctua NH-D15", "Blue Yeti USB Mic"];

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		6 => (0..NAMES.len()).prop_map(Op::Add),
		2 => (0..NAMES.len()).prop_map(Op::Remove),
		2 => (0..NAMES.len(), -5i64..20).prop_map(|(i, q)| Op::Update(i, q)),
		1 => Just(Op::Clear),
	]
}

fn item() -> impl Strategy<Value = CartItem> {
	("[A-Za-z0-9 ]{1,16}", 1u32..10_000, ".{0,12}", ".{0,24}", 1u32..50).prop_map(|(name, price, image, description, quantity)| {
		CartItem {
			name,
			price: format!("₱{price}"),
			image,
			description,
			quantity,
		}
	})
}

proptest! {
	#[test]
	fn count_is_sum_of_quantities_and_names_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
		let mut cart = Cart::load(MemoryStorage::new());
		for op in ops {
			match op {
				Op::Add(i) => { cart.add_item(Product::new(NAMES[i], "₱100")).unwrap(); }
				Op::Remove(i) => cart.remove_item(NAMES[i]).unwrap(),
				Op::Update(i, q) => cart.update_quantity(NAMES[i], q).unwrap(),
				Op::Clear => cart.clear().unwrap(),
			}

			let sum: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
			prop_assert_eq!(cart.item_count(), sum);

			let names: HashSet<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
			prop_assert_eq!(names.len(), cart.items().len());
			prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
			prop_assert_eq!(cart.total(), sum as f64 * 100.0);
		}
	}

	#[test]
	fn durable_state_round_trips(items in prop::collection::vec(item(), 0..8)) {
		let json = serde_json::to_string(&items).unwrap();
		let cart = Cart::load(MemoryStorage::with_entry(CART_STORAGE_KEY, json));
		prop_assert_eq!(cart.items(), items.as_slice());

		let reencoded = serde_json::to_string(cart.items()).unwrap();
		prop_assert_eq!(cart.storage().get(CART_STORAGE_KEY), Some(reencoded));
	}
}

#[rstest]
#[case("₱100", 100.0)]
#[case("₱32,995", 32_995.0)]
#[case("₱1,234.50", 1_234.5)]
#[case("  ₱7", 7.0)]
#[case("₱100 each", 100.0)]
#[case("₱.5", 0.5)]
#[case("-₱20", -20.0)]
fn parses_displayed_prices(#[case] raw: &str, #[case] expected: f64) {
	assert_eq!(parse_price(raw), expected);
}

#[rstest]
#[case("")]
#[case("₱")]
#[case("$100")]
#[case("free")]
fn unparseable_prices_are_nan(#[case] raw: &str) {
	assert!(parse_price(raw).is_nan());
}

#[test]
fn formats_totals_with_grouping() {
	assert_eq!(format_price(250.0), "₱250.00");
	assert_eq!(format_price(1_234_567.5), "₱1,234,567.50");
	assert_eq!(format_price(f64::NAN), "₱NaN");
}
