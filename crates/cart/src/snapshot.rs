//! Whole-cart snapshot codec for the durable storage slot.
//!
//! The persisted form is the serialized item list itself (the cart type is
//! `serde(transparent)`): an array of objects carrying `productId`, `amount`
//! and the pass-through display fields. `decode(encode(cart))` round-trips
//! exactly.

use forgecart_core::{CartError, CartResult};

use crate::cart::Cart;

/// Encode a cart for the durable slot.
pub fn encode(cart: &Cart) -> CartResult<String> {
    serde_json::to_string(cart).map_err(|e| CartError::snapshot(e.to_string()))
}

/// Decode a previously persisted snapshot.
pub fn decode(raw: &str) -> CartResult<Cart> {
    serde_json::from_str(raw).map_err(|e| CartError::snapshot(e.to_string()))
}
