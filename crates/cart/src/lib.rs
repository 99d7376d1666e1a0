//! `forgecart-cart` — the cart management module.
//!
//! Owns the shopper's selection (an ordered list of line items keyed by
//! product id), validates requested quantities against a stock service, and
//! keeps a durable snapshot in sync after every accepted mutation.
//!
//! Collaborators plug in through the traits in [`ports`]; the service itself
//! is [`store::CartStore`].

pub mod cart;
pub mod notice;
pub mod ports;
pub mod snapshot;
pub mod store;

pub use cart::{Cart, LineItem};
pub use notice::{CartNotice, NoticeKind};
pub use ports::{CartStorage, Notifier, ProductCatalog, StockQuery};
pub use store::CartStore;
