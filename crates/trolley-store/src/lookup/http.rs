//! # HTTP Product Lookup
//!
//! reqwest-backed implementation of the [`ProductLookup`] port.
//!
//! ## Wire Contract
//! ```text
//! GET {base_url}/products/{id}  →  Product JSON
//! GET {base_url}/stock/{id}     →  { "amount": <integer> }
//! ```
//!
//! 404 maps to `LookupError::NotFound`, any other non-2xx status to
//! `LookupError::Status`, transport failures to `LookupError::Http`, and a
//! body that doesn't decode to `LookupError::Decode`. No retries; the one
//! operation that issued the request degrades to its error notification.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LookupError, LookupResult};
use crate::lookup::ProductLookup;
use trolley_core::{Product, StockLevel};

/// Stock payload as served by the lookup service.
#[derive(Debug, Deserialize)]
struct StockPayload {
    amount: i64,
}

/// HTTP client for the product/stock lookup service.
///
/// ## Usage
/// ```rust,ignore
/// let lookup = HttpProductLookup::new("https://shop.example/api");
/// let product = lookup.fetch_product("sneaker-41").await?;
/// let stock = lookup.fetch_stock("sneaker-41").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpProductLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductLookup {
    /// Creates a lookup client with a fresh reqwest client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a lookup client reusing an existing reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpProductLookup { client, base_url }
    }

    /// Builds the endpoint URL for one resource.
    fn endpoint(&self, resource: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, resource, id)
    }

    /// Issues one GET and decodes the JSON body.
    async fn get_json<T>(&self, url: String, entity: &str, id: &str) -> LookupResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(%url, "Lookup request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::not_found(entity, id));
        }
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(LookupError::Decode)
    }
}

#[async_trait]
impl ProductLookup for HttpProductLookup {
    async fn fetch_product(&self, product_id: &str) -> LookupResult<Product> {
        let url = self.endpoint("products", product_id);
        self.get_json(url, "Product", product_id).await
    }

    async fn fetch_stock(&self, product_id: &str) -> LookupResult<StockLevel> {
        let url = self.endpoint("stock", product_id);
        let payload: StockPayload = self.get_json(url, "Stock", product_id).await?;

        Ok(StockLevel {
            product_id: product_id.to_string(),
            amount: payload.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let lookup = HttpProductLookup::new("https://shop.example/api");
        assert_eq!(
            lookup.endpoint("products", "sneaker-41"),
            "https://shop.example/api/products/sneaker-41"
        );
        assert_eq!(
            lookup.endpoint("stock", "1"),
            "https://shop.example/api/stock/1"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let lookup = HttpProductLookup::new("https://shop.example/api/");
        assert_eq!(
            lookup.endpoint("stock", "1"),
            "https://shop.example/api/stock/1"
        );
    }

    #[test]
    fn test_stock_payload_decodes() {
        let payload: StockPayload = serde_json::from_str(r#"{ "amount": 7 }"#).unwrap();
        assert_eq!(payload.amount, 7);
    }
}
