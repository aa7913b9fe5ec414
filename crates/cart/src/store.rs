use lootbox_notifications::Notification;
use lootbox_storage::{Storage, StorageError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::item::{CartItem, Product};
use crate::price::PriceError;


/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "lootbox_cart";

#[derive(Debug, Error)]
pub enum CartError {
	#[error("failed to persist cart: {0}")]
	Storage(#[from] StorageError),
	#[error("failed to serialize cart: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Ordered cart lines with write-through persistence.
///
/// Every mutating operation rewrites the whole item list under the storage key
/// before returning. Operations naming an absent item are silent no-ops.
#[derive(Debug)]
pub struct Cart<S> {
	items: Vec<CartItem>,
	storage: S,
	key: String,
}

impl<S: Storage> Cart<S> {
	/// Rehydrates the cart from [`CART_STORAGE_KEY`].
	pub fn load(storage: S) -> Self {
		Self::load_with_key(storage, CART_STORAGE_KEY)
	}

	/// Rehydrates the cart from `key`, starting empty if the value is absent or unparseable.
	pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
		let key = key.into();
		let items = match storage.get(&key) {
			None => Vec::new(),
			Some(raw) => match serde_json::from_str::<Option<Vec<CartItem>>>(&raw) {
				Ok(items) => items.unwrap_or_default(),
				Err(err) => {
					warn!(key = %key, error = %err, "discarding unparseable cart data");
					Vec::new()
				}
			},
		};
		debug!(key = %key, lines = items.len(), "cart.load");
		Self { items, storage, key }
	}

	pub fn items(&self) -> &[CartItem] {
		&self.items
	}

	pub fn get(&self, name: &str) -> Option<&CartItem> {
		self.items.iter().find(|item| item.name == name)
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	pub fn into_storage(self) -> S {
		self.storage
	}

	/// Adds one unit of `product`, merging with an existing line of the same name.
	///
	/// Returns the success notification announcing the addition.
	pub fn add_item(&mut self, product: Product) -> Result<Notification, CartError> {
		let message = format!("{} added to cart!", product.name);
		match self.items.iter_mut().find(|item| item.name == product.name) {
			Some(existing) => {
				existing.quantity = existing.quantity.saturating_add(1);
				debug!(name = %existing.name, quantity = existing.quantity, "cart.increment");
			}
			None => {
				debug!(name = %product.name, "cart.append");
				self.items.push(CartItem::from_product(product));
			}
		}
		self.save()?;
		Ok(Notification::success(message))
	}

	/// Drops every line named `name`.
	pub fn remove_item(&mut self, name: &str) -> Result<(), CartError> {
		let before = self.items.len();
		self.items.retain(|item| item.name != name);
		debug!(name, removed = before - self.items.len(), "cart.remove");
		self.save()
	}

	/// Sets the quantity of `name`, clamped to at least one.
	pub fn update_quantity(&mut self, name: &str, quantity: i64) -> Result<(), CartError> {
		let Some(item) = self.items.iter_mut().find(|item| item.name == name) else {
			return Ok(());
		};
		item.quantity = quantity.clamp(1, i64::from(u32::MAX)) as u32;
		debug!(name, quantity = item.quantity, "cart.update_quantity");
		self.save()
	}

	/// Sum of price times quantity.
	///
	/// A malformed price makes the whole total `NaN`; see [`checked_total`](Self::checked_total).
	pub fn total(&self) -> f64 {
		self.items.iter().fold(0.0, |acc, item| acc + item.line_total())
	}

	/// Like [`total`](Self::total) but reports the first line whose price is not a number.
	pub fn checked_total(&self) -> Result<f64, PriceError> {
		self.items.iter().try_fold(0.0, |acc, item| {
			let unit = item.unit_price();
			if unit.is_nan() {
				return Err(PriceError {
					name: item.name.clone(),
					price: item.price.clone(),
				});
			}
			Ok(acc + unit * f64::from(item.quantity))
		})
	}

	/// Sum of quantities across all lines.
	pub fn item_count(&self) -> u64 {
		self.items.iter().map(|item| u64::from(item.quantity)).sum()
	}

	pub fn clear(&mut self) -> Result<(), CartError> {
		self.items.clear();
		debug!("cart.clear");
		self.save()
	}

	fn save(&mut self) -> Result<(), CartError> {
		let json = serde_json::to_string(&self.items)?;
		self.storage.set(&self.key, &json)?;
		Ok(())
	}
}
