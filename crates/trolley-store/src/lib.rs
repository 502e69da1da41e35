//! # trolley-store: Cart Store for Trolley
//!
//! This crate provides the cart store: the three mutating operations, the
//! remote product/stock lookup, local key-value persistence and the
//! notification channel.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trolley Data Flow                                │
//! │                                                                         │
//! │  UI action (add / remove / change quantity)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    trolley-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   CartStore   │    │ ProductLookup │    │ CartStorage  │  │   │
//! │  │   │  (store.rs)   │    │  (lookup/)    │    │  (storage/)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ single-writer │◄───│ HTTP client   │    │ file / memory│  │   │
//! │  │   │ async Mutex   │    │ (reqwest)     │    │ key-value    │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                                                     │   │
//! │  │           ▼                                                     │   │
//! │  │   broadcast::Sender<Notification> ──► UI toasts                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Persistent key-value store (one blob under a fixed key)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The CartStore and its three operations
//! - [`lookup`] - ProductLookup port and the reqwest implementation
//! - [`storage`] - CartStorage port with file and in-memory implementations
//! - [`notify`] - Notification type and severity
//! - [`config`] - StoreConfig
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trolley_store::{CartStore, StoreConfig};
//!
//! let config = StoreConfig::new("https://shop.example/api");
//! let store = CartStore::new(config)?;
//!
//! let mut notifications = store.subscribe();
//! store.add_product("sneaker-41").await;
//! let cart = store.cart().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod lookup;
pub mod notify;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{LookupError, StorageError, StoreError};
pub use lookup::{HttpProductLookup, ProductLookup};
pub use notify::{Notification, Severity};
pub use storage::{CartStorage, FileCartStorage, MemoryCartStorage};
pub use store::CartStore;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed key the cart blob lives under in the key-value store.
///
/// Versioned so a future incompatible blob format can move to a new key
/// without tripping over old data.
pub const CART_STORAGE_KEY: &str = "trolley.cart.v1";

/// Default capacity of the notification broadcast channel.
///
/// Notifications are transient; once a subscriber lags past this many
/// undelivered entries the oldest are dropped, never the mutation.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
