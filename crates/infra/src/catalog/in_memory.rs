use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use forgecart_cart::{ProductCatalog, StockQuery};
use forgecart_core::{CartError, CartResult, ProductId};
use forgecart_products::{Product, StockLevel};

/// In-memory product catalog and stock service.
///
/// Intended for tests/dev. Unknown product ids answer the way the remote
/// services do when a lookup misses: with the transient error kind of the
/// port being asked.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
    stock: RwLock<HashMap<ProductId, u32>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product together with its available stock.
    pub fn insert(&self, product: Product, available: u32) {
        let product_id = product.product_id;
        if let Ok(mut products) = self.products.write() {
            products.insert(product_id, product);
        }
        self.set_stock(product_id, available);
    }

    /// Replace the available stock for a product.
    pub fn set_stock(&self, product_id: ProductId, available: u32) {
        if let Ok(mut stock) = self.stock.write() {
            stock.insert(product_id, available);
        }
    }
}

#[async_trait]
impl StockQuery for InMemoryCatalog {
    async fn stock_level(&self, product_id: ProductId) -> CartResult<StockLevel> {
        let stock = self
            .stock
            .read()
            .map_err(|_| CartError::stock_query("lock poisoned"))?;
        match stock.get(&product_id) {
            Some(&amount) => Ok(StockLevel { product_id, amount }),
            None => Err(CartError::stock_query(format!(
                "no stock record for product {product_id}"
            ))),
        }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn product(&self, product_id: ProductId) -> CartResult<Product> {
        let products = self
            .products
            .read()
            .map_err(|_| CartError::product_lookup("lock poisoned"))?;
        products
            .get(&product_id)
            .cloned()
            .ok_or_else(|| CartError::product_lookup(format!("unknown product {product_id}")))
    }
}
