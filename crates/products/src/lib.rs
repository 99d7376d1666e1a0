//! `forgecart-products` — product display data and stock levels.
//!
//! Read-only models supplied by the catalog and stock services. The cart
//! passes product display attributes through untouched; it never edits them.

pub mod product;
pub mod stock;

pub use product::Product;
pub use stock::StockLevel;
