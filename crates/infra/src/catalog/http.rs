use async_trait::async_trait;
use reqwest::Client;

use forgecart_cart::{ProductCatalog, StockQuery};
use forgecart_core::{CartError, CartResult, ProductId};
use forgecart_products::{Product, StockLevel};

/// JSON REST client for the storefront's catalog and stock endpoints.
///
/// `GET {base}/products/{id}` serves display attributes,
/// `GET {base}/stock/{id}` the current availability. Transport failures,
/// non-success statuses and undecodable bodies all collapse into the
/// transient error kind of the port being asked; the store decides what
/// that means for the operation in flight.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a caller-configured client (timeouts, proxies, headers).
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    async fn get_json<T>(&self, path: &str, err: fn(String) -> CartError) -> CartResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(%url, "catalog request");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| err(e.to_string()))?;
        response.json::<T>().await.map_err(|e| err(e.to_string()))
    }
}

#[async_trait]
impl StockQuery for HttpCatalog {
    async fn stock_level(&self, product_id: ProductId) -> CartResult<StockLevel> {
        self.get_json(&format!("stock/{product_id}"), CartError::StockQuery)
            .await
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn product(&self, product_id: ProductId) -> CartResult<Product> {
        self.get_json(&format!("products/{product_id}"), CartError::ProductLookup)
            .await
    }
}
