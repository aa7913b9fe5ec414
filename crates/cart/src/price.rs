use std::sync::LazyLock;

use num_format::{Locale, ToFormattedString};
use regex::Regex;
use thiserror::Error;

/// Characters stripped from price strings before parsing.
const PRICE_NOISE: [char; 2] = ['₱', ','];

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("float prefix pattern is valid")
});

/// A cart line whose price could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("price {price:?} of {name:?} is not a number")]
pub struct PriceError {
	pub name: String,
	pub price: String,
}

/// Parses a displayed price such as `"₱32,995"` into a number.
///
/// Only the peso sign and comma thousands separators are stripped. The
/// remainder is read like a float literal prefix: leading whitespace is
/// skipped and trailing garbage ignored (`"₱100 each"` is `100`). Input with
/// no numeric prefix yields `NaN`.
pub fn parse_price(raw: &str) -> f64 {
	let cleaned: String = raw.chars().filter(|ch| !PRICE_NOISE.contains(ch)).collect();
	FLOAT_PREFIX
		.find(cleaned.trim_start())
		.and_then(|m| m.as_str().parse::<f64>().ok())
		.unwrap_or(f64::NAN)
}

/// Formats an amount as pesos with thousands separators and two decimals.
pub fn format_price(amount: f64) -> String {
	if !amount.is_finite() {
		return "₱NaN".to_string();
	}
	let cents = (amount.abs() * 100.0).round() as u64;
	let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
	format!("{sign}₱{}.{:02}", (cents / 100).to_formatted_string(&Locale::en), cents % 100)
}
