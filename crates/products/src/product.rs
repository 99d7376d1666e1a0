//! Product display attributes as served by the catalog.

use serde::{Deserialize, Serialize};

use forgecart_core::ProductId;

/// Display attributes of a catalog product.
///
/// These fields are pass-through: the cart stores and persists them exactly
/// as the catalog supplied them. Serialized with camelCase names so the
/// persisted snapshot matches the catalog's wire format (`productId`,
/// `priceCents`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub title: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    pub image_url: String,
}
