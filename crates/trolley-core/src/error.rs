//! # Error Types
//!
//! Domain-specific error types for trolley-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  trolley-core errors (this file)                                       │
//! │  ├── CartError        - Cart mutation failures                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  trolley-store errors (separate crate)                                 │
//! │  ├── LookupError      - Lookup-service failures                        │
//! │  ├── StorageError     - Key-value storage failures                     │
//! │  └── StoreError       - Umbrella over all of the above                 │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → StoreError → Notification         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing notification in trolley-store

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart domain errors.
///
/// These errors represent rejected cart mutations. The store layer catches
/// them and translates each into a user-facing notification.
#[derive(Debug, Error)]
pub enum CartError {
    /// The targeted product has no line item in the cart.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added
    /// - Setting the quantity of a product that was never added
    #[error("Product not in cart: {product_id}")]
    NotInCart { product_id: String },

    /// The cart already holds a line item for this product.
    ///
    /// Guards the at-most-one-line-item-per-product invariant. Adding a
    /// product that is already present must go through the increment path.
    #[error("Product already in cart: {product_id}")]
    DuplicateItem { product_id: String },

    /// The lookup service reports less stock than the mutation needs.
    ///
    /// ## When This Occurs
    /// - Adding a product whose reported stock is zero
    /// - Incrementing a line past the reported stock
    /// - Setting a quantity above the reported stock
    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// The supplied quantity is not a positive integer.
    #[error("Invalid quantity: {requested} (must be at least 1)")]
    InvalidQuantity { requested: i64 },

    /// The supplied quantity exceeds the per-line maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before cart logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::OutOfStock {
            product_id: "sneaker-41".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for sneaker-41: available 3, requested 5"
        );

        let err = CartError::InvalidQuantity { requested: -2 };
        assert_eq!(err.to_string(), "Invalid quantity: -2 (must be at least 1)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product_id".to_string(),
        };
        assert_eq!(err.to_string(), "product_id is required");
    }

    #[test]
    fn test_validation_converts_to_cart_error() {
        let validation_err = ValidationError::Required {
            field: "product_id".to_string(),
        };
        let cart_err: CartError = validation_err.into();
        assert!(matches!(cart_err, CartError::Validation(_)));
    }
}
