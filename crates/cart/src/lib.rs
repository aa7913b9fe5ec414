//! Shopping cart store.
//!
//! The cart is an ordered list of [`CartItem`]s, unique by name, mirrored to
//! a [`Storage`](lootbox_storage::Storage) key on every mutation. The store is
//! an explicit value owned by the application shell; nothing here is global.

mod item;
mod price;
mod store;

pub use item::{CartItem, Product};
pub use price::{PriceError, format_price, parse_price};
pub use store::{CART_STORAGE_KEY, Cart, CartError};
