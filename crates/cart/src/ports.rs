//! Collaborator seams the store is wired with at construction.
//!
//! Implementations live in `forgecart-infra`; the traits stay here so the
//! domain crate owns its contracts and infra depends inward.

use std::sync::Arc;

use async_trait::async_trait;

use forgecart_core::{CartResult, ProductId};
use forgecart_products::{Product, StockLevel};

use crate::notice::CartNotice;

/// Read-only stock availability service.
///
/// Used to gate admission of a requested quantity; the cart never adjusts
/// stock itself. No timeout or cancellation semantics are imposed here — a
/// hung query suspends the calling operation.
#[async_trait]
pub trait StockQuery: Send + Sync {
    async fn stock_level(&self, product_id: ProductId) -> CartResult<StockLevel>;
}

/// Read-only product catalog.
///
/// Consulted only when a product enters the cart for the first time.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product(&self, product_id: ProductId) -> CartResult<Product>;
}

/// Durable slot holding the serialized cart between sessions.
///
/// Whole-snapshot semantics: `read` returns everything or nothing, `write`
/// is a full overwrite. Last writer wins; there is no merge.
pub trait CartStorage: Send + Sync {
    /// Read the current snapshot, or `None` when the slot is empty.
    fn read(&self) -> CartResult<Option<String>>;

    /// Overwrite the slot with a new snapshot.
    fn write(&self, snapshot: &str) -> CartResult<()>;
}

/// Fire-and-forget sink for user-facing rejection notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: CartNotice);
}

#[async_trait]
impl<T> StockQuery for Arc<T>
where
    T: StockQuery + ?Sized,
{
    async fn stock_level(&self, product_id: ProductId) -> CartResult<StockLevel> {
        (**self).stock_level(product_id).await
    }
}

#[async_trait]
impl<T> ProductCatalog for Arc<T>
where
    T: ProductCatalog + ?Sized,
{
    async fn product(&self, product_id: ProductId) -> CartResult<Product> {
        (**self).product(product_id).await
    }
}

impl<T> CartStorage for Arc<T>
where
    T: CartStorage + ?Sized,
{
    fn read(&self) -> CartResult<Option<String>> {
        (**self).read()
    }

    fn write(&self, snapshot: &str) -> CartResult<()> {
        (**self).write(snapshot)
    }
}

impl<T> Notifier for Arc<T>
where
    T: Notifier + ?Sized,
{
    fn notify(&self, notice: CartNotice) {
        (**self).notify(notice)
    }
}
