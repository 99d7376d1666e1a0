//! The cart store: state container plus its three mutations.

use tracing::{debug, warn};

use forgecart_core::{CartError, CartResult, ProductId};

use crate::cart::{Cart, LineItem};
use crate::notice::{CartNotice, NoticeKind};
use crate::ports::{CartStorage, Notifier, ProductCatalog, StockQuery};
use crate::snapshot;

/// Shopping-cart state container.
///
/// Owns the in-memory cart and keeps the durable slot in sync after every
/// accepted mutation. Collaborators are injected at construction. Mutations
/// take `&mut self`, so the borrow rules serialize them per store handle:
/// two read-modify-write cycles cannot interleave on one cart.
///
/// Commit order is encode, write, swap — a rejected or failed mutation
/// leaves both the in-memory cart and the persisted snapshot untouched.
pub struct CartStore<S, Q, P, N>
where
    S: CartStorage,
    Q: StockQuery,
    P: ProductCatalog,
    N: Notifier,
{
    storage: S,
    stock: Q,
    catalog: P,
    notifier: N,
    cart: Cart,
}

impl<S, Q, P, N> CartStore<S, Q, P, N>
where
    S: CartStorage,
    Q: StockQuery,
    P: ProductCatalog,
    N: Notifier,
{
    /// Open the store, rehydrating the cart from the durable slot.
    ///
    /// An empty slot yields an empty cart. A snapshot that no longer decodes
    /// is logged and discarded rather than blocking the storefront on stale
    /// bytes. A slot *read* failure propagates.
    pub fn open(storage: S, stock: Q, catalog: P, notifier: N) -> CartResult<Self> {
        let cart = match storage.read()? {
            None => Cart::empty(),
            Some(raw) => match snapshot::decode(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    warn!(error = %e, "discarding undecodable cart snapshot");
                    Cart::empty()
                }
            },
        };

        Ok(Self {
            storage,
            stock,
            catalog,
            notifier,
            cart,
        })
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product_id` to the cart.
    ///
    /// The first add fetches the product's display details from the catalog
    /// and appends a new line with amount 1; subsequent adds bump the
    /// existing line. The resulting total is admitted only if the stock
    /// service currently covers it.
    pub async fn add_product(&mut self, product_id: ProductId) -> CartResult<()> {
        debug!(%product_id, "add_product");
        let desired = self.cart.amount_of(product_id).map_or(1, |a| a + 1);

        let stock = match self.stock.stock_level(product_id).await {
            Ok(level) => level,
            Err(e) => return Err(self.reject(NoticeKind::AddFailed, product_id, e)),
        };
        if !stock.covers(desired) {
            warn!(%product_id, desired, available = stock.amount, "add rejected: out of stock");
            return Err(self.reject(NoticeKind::OutOfStock, product_id, CartError::out_of_stock()));
        }

        let next = if self.cart.contains(product_id) {
            self.cart.with_amount(product_id, desired)
        } else {
            let product = match self.catalog.product(product_id).await {
                Ok(product) => product,
                Err(e) => return Err(self.reject(NoticeKind::AddFailed, product_id, e)),
            };
            self.cart.appended(LineItem::new(product, desired))
        };

        self.commit(next, NoticeKind::AddFailed, product_id)
    }

    /// Remove the product's line from the cart.
    ///
    /// Synchronous: no external query is involved.
    pub fn remove_product(&mut self, product_id: ProductId) -> CartResult<()> {
        debug!(%product_id, "remove_product");
        if !self.cart.contains(product_id) {
            warn!(%product_id, "remove rejected: product not in cart");
            return Err(self.reject(NoticeKind::RemoveFailed, product_id, CartError::not_found()));
        }

        let next = self.cart.without(product_id);
        self.commit(next, NoticeKind::RemoveFailed, product_id)
    }

    /// Set the product's line to an explicit amount.
    ///
    /// Amounts below 1 are a silent guard: the call is a no-op with no
    /// notice. A product id with no line in the cart is also not signalled —
    /// the collection maps to itself and is re-persisted unchanged. That
    /// asymmetry with `remove_product` reproduces the storefront's observed
    /// behavior and is kept deliberately.
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: u32,
    ) -> CartResult<()> {
        if amount < 1 {
            return Ok(());
        }
        debug!(%product_id, amount, "update_product_amount");

        let stock = match self.stock.stock_level(product_id).await {
            Ok(level) => level,
            Err(e) => return Err(self.reject(NoticeKind::UpdateFailed, product_id, e)),
        };
        if !stock.covers(amount) {
            warn!(%product_id, amount, available = stock.amount, "update rejected: out of stock");
            return Err(self.reject(NoticeKind::OutOfStock, product_id, CartError::out_of_stock()));
        }

        let next = self.cart.with_amount(product_id, amount);
        self.commit(next, NoticeKind::UpdateFailed, product_id)
    }

    /// Persist `next`, then make it the current cart.
    fn commit(&mut self, next: Cart, on_failure: NoticeKind, product_id: ProductId) -> CartResult<()> {
        let raw = match snapshot::encode(&next) {
            Ok(raw) => raw,
            Err(e) => return Err(self.reject(on_failure, product_id, e)),
        };
        if let Err(e) = self.storage.write(&raw) {
            return Err(self.reject(on_failure, product_id, e));
        }
        self.cart = next;
        Ok(())
    }

    /// Emit the notice for a rejected operation and hand the error back.
    fn reject(&self, kind: NoticeKind, product_id: ProductId, error: CartError) -> CartError {
        self.notifier.notify(CartNotice::now(kind, product_id));
        error
    }
}
