//! # Store Error Types
//!
//! Error types for lookup, storage and store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / std::io::Error / serde_json::Error                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LookupError / StorageError (this module) ← Adds context               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError ← One umbrella per operation attempt                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore catches, logs, and publishes a Notification                 │
//! │  (operations never return an error to the caller)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use trolley_core::CartError;

// =============================================================================
// Lookup Error
// =============================================================================

/// Failures talking to the read-only product/stock lookup service.
///
/// All variants are catchable; each one feeds the generic error
/// notification path of the operation that issued the request.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The HTTP request itself failed (connect, timeout, TLS, ...).
    #[error("Lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 404 for the requested entity.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The service answered with a non-2xx status other than 404.
    #[error("Lookup service returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body did not decode into the expected shape.
    #[error("Malformed lookup response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl LookupError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        LookupError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

// =============================================================================
// Storage Error
// =============================================================================

/// Failures reading or writing the persistent key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (permissions, disk full, ...).
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The cart blob could not be encoded.
    #[error("Cart serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Store Error
// =============================================================================

/// Umbrella error for one cart operation attempt.
///
/// Never escapes the store: each operation catches its `StoreError`, logs
/// it, and publishes the notification the variant maps to.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Cart domain rejection (not in cart, out of stock, bad quantity).
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Lookup-service failure.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Key-value storage failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
