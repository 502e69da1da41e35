//! # Validation Module
//!
//! Input validation for caller-supplied values.
//!
//! ## Validation Strategy
//! Callers hand the store raw strings and integers; the store validates
//! them here before any lookup-service traffic or cart mutation happens.
//! Quantities have their own validating type ([`crate::Quantity`]), so
//! this module only covers the values that stay plain.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for a product id. Ids are opaque strings owned by the
/// lookup service; the bound only guards against garbage input.
const MAX_PRODUCT_ID_LENGTH: usize = 64;

/// Validates a caller-supplied product id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
///
/// ## Example
/// ```rust
/// use trolley_core::validation::validate_product_id;
///
/// assert!(validate_product_id("sneaker-41").is_ok());
/// assert!(validate_product_id("   ").is_err());
/// ```
pub fn validate_product_id(product_id: &str) -> ValidationResult<()> {
    let product_id = product_id.trim();

    if product_id.is_empty() {
        return Err(ValidationError::Required {
            field: "product_id".to_string(),
        });
    }

    if product_id.len() > MAX_PRODUCT_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "product_id".to_string(),
            max: MAX_PRODUCT_ID_LENGTH,
        });
    }

    Ok(())
}
