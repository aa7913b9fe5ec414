//! Headless document model.
//!
//! Stands in for the browser DOM the storefront scripts against: an arena of
//! [`Element`]s with ids, class lists, attributes and text, a viewport with a
//! scroll offset, block layout, and intersection observers evaluated against
//! that layout. Pages are built from TOML [`Markup`] and queried with a small
//! CSS [`Selector`] subset.
//!
//! Lookups return `Option<NodeId>`; a missing element is a normal outcome that
//! callers skip, never an error.

mod document;
mod element;
mod geometry;
mod markup;
mod observer;
mod selector;

pub use document::{Document, SCROLL_LOG_LIMIT, ScrollBehavior, ScrollRequest};
pub use element::{ClassList, Element, NodeId};
pub use geometry::{Margin, Rect, Viewport};
pub use markup::{Block, CardAction, DEFAULT_MARKUP, Markup, MarkupError, NavLink, ProductCard, Section};
pub use observer::{IntersectionObserver, ObserverOptions};
pub use selector::{Selector, SelectorError};
