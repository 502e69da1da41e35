//! # Cart Domain
//!
//! The cart, its line items and the structural mutations on them.
//!
//! ## Invariants
//! - At most one line item per product id
//! - Every quantity is a validated positive integer (1..=MAX_LINE_QUANTITY)
//! - Item order is insertion order of first add (not semantically significant)
//!
//! ## Who Enforces Stock?
//! This module enforces *structure* only. Stock limits come from the lookup
//! service and are enforced by the store layer, which holds the fresh
//! [`StockLevel`](crate::types::StockLevel) at mutation time. Keeping stock
//! out of this module keeps it pure and I/O free.
//!
//! ## Persisted Shape
//! A cart serializes as a JSON sequence of line items:
//! ```json
//! [
//!   { "product": { "id": "sneaker-41", ... }, "quantity": 2, "addedAt": "..." }
//! ]
//! ```
//! Deserialization re-validates every quantity and the one-line-per-product
//! invariant, so a corrupt blob is rejected as a whole instead of being
//! silently patched up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::types::Product;
use crate::MAX_LINE_QUANTITY;

// =============================================================================
// Quantity
// =============================================================================

/// A validated line-item quantity.
///
/// ## Why a Newtype?
/// The persisted cart is external input. A plain integer would let a
/// tampered or corrupt blob smuggle a zero or out-of-range amount into the
/// cart; construction through [`Quantity::new`] (which serde also goes
/// through via `try_from`) makes that impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The quantity every freshly added line item starts with.
    pub const ONE: Quantity = Quantity(1);

    /// Creates a quantity, rejecting zero and values above
    /// [`MAX_LINE_QUANTITY`].
    pub fn new(value: u32) -> CartResult<Self> {
        if value == 0 {
            return Err(CartError::InvalidQuantity { requested: 0 });
        }
        if value > MAX_LINE_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: i64::from(value),
                max: MAX_LINE_QUANTITY,
            });
        }
        Ok(Quantity(value))
    }

    /// Returns the quantity as a plain integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns this quantity plus one, re-validated against the maximum.
    pub fn increment(self) -> CartResult<Self> {
        Quantity::new(self.0 + 1)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product`: Frozen copy of the product at the time of first add.
///   The cart keeps displaying consistent data even if the lookup service
///   updates the product afterwards.
/// - `quantity`: Validated positive integer, never raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product snapshot taken when the item entered the cart.
    pub product: Product,

    /// Quantity held in the cart.
    pub quantity: Quantity,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line item holding one unit of `product`.
    pub fn new(product: Product) -> Self {
        CartItem {
            product,
            quantity: Quantity::ONE,
            added_at: Utc::now(),
        }
    }

    /// The id of the product this line holds.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * i64::from(self.quantity.get())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Items are private so the one-line-per-product invariant can only be
/// touched through the mutation methods (and the validating `try_from`
/// used by serde).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<CartItem>", try_from = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a new line item holding one unit of `product`.
    ///
    /// ## Errors
    /// `DuplicateItem` if the product already has a line item. Callers that
    /// want "add or increment" semantics check [`Cart::quantity_of`] first.
    pub fn insert(&mut self, product: Product) -> CartResult<()> {
        if self.contains(&product.id) {
            return Err(CartError::DuplicateItem {
                product_id: product.id,
            });
        }
        self.items.push(CartItem::new(product));
        Ok(())
    }

    /// Increases the quantity of an existing line item by one.
    ///
    /// ## Returns
    /// The new quantity on success.
    pub fn increment(&mut self, product_id: &str) -> CartResult<Quantity> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id() == product_id)
            .ok_or_else(|| CartError::NotInCart {
                product_id: product_id.to_string(),
            })?;

        item.quantity = item.quantity.increment()?;
        Ok(item.quantity)
    }

    /// Replaces the quantity of an existing line item.
    ///
    /// No increment semantics: the supplied quantity is stored exactly.
    pub fn set_quantity(&mut self, product_id: &str, quantity: Quantity) -> CartResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id() == product_id)
            .ok_or_else(|| CartError::NotInCart {
                product_id: product_id.to_string(),
            })?;

        item.quantity = quantity;
        Ok(())
    }

    /// Removes the line item for `product_id`.
    pub fn remove(&mut self, product_id: &str) -> CartResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);

        if self.items.len() == initial_len {
            Err(CartError::NotInCart {
                product_id: product_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks whether a product has a line item in the cart.
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product_id() == product_id)
    }

    /// Returns the line item for `product_id`, if present.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Returns the quantity held for `product_id`, if present.
    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.get(product_id).map(|i| i.quantity.get())
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of unique line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all line items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }

    /// Calculates the cart subtotal in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// Validating construction used by serde when decoding a persisted blob.
impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        for (index, item) in items.iter().enumerate() {
            let duplicated = items[..index]
                .iter()
                .any(|earlier| earlier.product_id() == item.product_id());
            if duplicated {
                return Err(CartError::DuplicateItem {
                    product_id: item.product_id().to_string(),
                });
            }
        }
        Ok(Cart { items })
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for UI consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
