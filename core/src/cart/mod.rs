// core/src/cart/mod.rs

//! Persistent cart: the single source of truth for staged RFQ line items.
//!
//! All mutations go through [`CartStore`]; no other component touches the
//! underlying blob.

mod line_item;
mod store;

pub use line_item::{CartLineItem, CartLineItemInput};
pub use store::{CartStore, CART_BLOB_FILE};
