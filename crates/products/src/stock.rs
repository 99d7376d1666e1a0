//! Stock levels as served by the stock service.

use serde::{Deserialize, Serialize};

use forgecart_core::ProductId;

/// Externally-tracked available quantity for a product.
///
/// Read-only input to admission checks; never persisted by the cart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub product_id: ProductId,
    pub amount: u32,
}

impl StockLevel {
    /// Whether the service can cover a requested amount.
    pub fn covers(&self, requested: u32) -> bool {
        self.amount >= requested
    }
}
