use serde::{Deserialize, Serialize};

use crate::price::parse_price;

/// Product details captured from a product card at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
	pub name: String,
	/// Currency-formatted price exactly as displayed, e.g. `"₱32,995"`.
	pub price: String,
	#[serde(default)]
	pub image: String,
	#[serde(default)]
	pub description: String,
}

impl Product {
	pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			price: price.into(),
			image: String::new(),
			description: String::new(),
		}
	}

	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = image.into();
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}
}

/// One cart line. Serialized field order matches the durable layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
	pub name: String,
	pub price: String,
	#[serde(default)]
	pub image: String,
	#[serde(default)]
	pub description: String,
	pub quantity: u32,
}

impl CartItem {
	pub(crate) fn from_product(product: Product) -> Self {
		Self {
			name: product.name,
			price: product.price,
			image: product.image,
			description: product.description,
			quantity: 1,
		}
	}

	/// Numeric unit price; `NaN` when the price string is malformed.
	pub fn unit_price(&self) -> f64 {
		parse_price(&self.price)
	}

	/// Unit price times quantity; `NaN` propagates.
	pub fn line_total(&self) -> f64 {
		self.unit_price() * f64::from(self.quantity)
	}
}
