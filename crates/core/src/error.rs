//! Cart error model.

use thiserror::Error;

/// Result type used across the cart domain.
pub type CartResult<T> = Result<T, CartError>;

/// Cart-level error.
///
/// `OutOfStock` and `NotFound` are deterministic business rejections; the
/// string-carrying variants collapse a collaborator failure (stock service,
/// product catalog, durable slot, snapshot codec) into the operation that
/// observed it. Every error is terminal for the current call: the mutation
/// is abandoned and both the in-memory cart and the persisted snapshot stay
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The requested amount exceeds the currently available stock.
    #[error("requested amount is out of stock")]
    OutOfStock,

    /// The referenced product is not present in the cart.
    #[error("product is not in the cart")]
    NotFound,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The stock service could not answer the availability query.
    #[error("stock query failed: {0}")]
    StockQuery(String),

    /// The product catalog could not supply product details.
    #[error("product lookup failed: {0}")]
    ProductLookup(String),

    /// The durable storage slot could not be read or written.
    #[error("cart storage failed: {0}")]
    Storage(String),

    /// The persisted snapshot could not be encoded or decoded.
    #[error("cart snapshot malformed: {0}")]
    Snapshot(String),
}

impl CartError {
    pub fn out_of_stock() -> Self {
        Self::OutOfStock
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn stock_query(msg: impl Into<String>) -> Self {
        Self::StockQuery(msg.into())
    }

    pub fn product_lookup(msg: impl Into<String>) -> Self {
        Self::ProductLookup(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }
}
