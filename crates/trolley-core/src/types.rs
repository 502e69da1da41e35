//! # Domain Types
//!
//! Core domain types shared across Trolley.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │     StockLevel      │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (opaque string) │        │  product_id         │                │
//! │  │  name               │        │  amount (i64)       │                │
//! │  │  price_cents        │        │                     │                │
//! │  │  image_url          │        │  Fetched fresh on   │                │
//! │  │  extra (opaque map) │        │  every mutation,    │                │
//! │  └─────────────────────┘        │  never persisted    │                │
//! │                                 └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Opaque Product Data
//! The cart does not interpret product attributes beyond `id`. Everything
//! the lookup service sends that Trolley has no field for lands in the
//! flattened `extra` map, so persisted carts round-trip without loss.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product as served by the lookup service.
///
/// Product ids are opaque strings owned by the lookup service. Trolley
/// never generates or parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the lookup service.
    pub id: String,

    /// Display name shown in the cart UI.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Optional product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Attributes this module does not interpret.
    /// Captured on deserialization and written back verbatim.
    /// Not part of the generated bindings; front ends read them untyped.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// Stock Level
// =============================================================================

/// The stock reported by the lookup service for one product.
///
/// Consulted fresh on every mutation and never stored; the lookup service
/// is the authoritative source for availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    /// Product this stock level belongs to.
    pub product_id: String,

    /// Units available for purchase. Zero means sold out.
    pub amount: i64,
}

impl StockLevel {
    /// Checks whether the reported stock covers `quantity` units.
    pub fn covers(&self, quantity: u32) -> bool {
        self.amount >= i64::from(quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
