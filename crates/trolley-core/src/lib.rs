//! # trolley-core: Pure Cart Domain for Trolley
//!
//! This crate is the **heart** of Trolley. It contains the cart domain
//! as pure data types and mutations with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trolley Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (UI tree)                          │   │
//! │  │    Product UI ──► Cart UI ──► Notification toasts              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartStore handle                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    trolley-store                                │   │
//! │  │    add_product, remove_product, update_quantity                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trolley-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   cart    │  │ validation│                  │   │
//! │  │   │  Product  │  │   Cart    │  │   rules   │                  │   │
//! │  │   │ StockLevel│  │ CartItem  │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, StockLevel)
//! - [`cart`] - Cart, CartItem, Quantity and the structural cart mutations
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every mutation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and storage access is FORBIDDEN here
//! 3. **Validated Quantities**: A line quantity is always a positive integer;
//!    corrupt data fails loudly at the boundary instead of being coerced
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trolley_core::Cart` instead of
// `use trolley_core::cart::Cart`

pub use cart::{Cart, CartItem, CartTotals, Quantity};
pub use error::{CartError, CartResult, ValidationError};
pub use types::{Product, StockLevel};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Can be made configurable per store in future versions.
pub const MAX_LINE_QUANTITY: u32 = 999;
