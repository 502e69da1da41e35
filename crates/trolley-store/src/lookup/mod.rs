//! # Product Lookup Port
//!
//! The read-only collaborator every mutation consults for product details
//! and fresh stock levels.
//!
//! ## Why a Trait?
//! The store never cares where product data comes from. Production uses
//! [`HttpProductLookup`]; tests plug in stubs; embedders can wrap a cache
//! or a different wire protocol without touching the store.

mod http;

pub use http::HttpProductLookup;

use async_trait::async_trait;

use crate::error::LookupResult;
use trolley_core::{Product, StockLevel};

/// Read-only access to product and stock data.
///
/// Both methods hit the authoritative source on every call. The store
/// deliberately never caches stock: a stale availability figure is worse
/// than an extra round trip.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Fetches the product record for `product_id`.
    async fn fetch_product(&self, product_id: &str) -> LookupResult<Product>;

    /// Fetches the current stock level for `product_id`.
    async fn fetch_stock(&self, product_id: &str) -> LookupResult<StockLevel>;
}
