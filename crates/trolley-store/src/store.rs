//! # Cart Store
//!
//! The authoritative in-memory cart, its three mutating operations, and
//! the mirroring of every accepted mutation to persistent storage.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action                Operation                Outcome              │
//! │  ─────────                ─────────                ───────              │
//! │                                                                         │
//! │  Click Product ─────────► add_product() ─────────► new line / +1       │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ─────► quantity = n        │
//! │                                                                         │
//! │  Click Remove ──────────► remove_product() ──────► line removed        │
//! │                                                                         │
//! │  Empty Cart ────────────► clear() ───────────────► all lines removed   │
//! │                                                                         │
//! │  Every accepted mutation:                                               │
//! │    1. stock checked against the lookup service (add / update)           │
//! │    2. new cart computed from a clone (never mutated in place)           │
//! │    3. new cart serialized and written to storage                        │
//! │    4. in-memory cart replaced wholesale                                 │
//! │                                                                         │
//! │  Every rejected mutation: cart untouched, notification published.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//! One async Mutex guards the cart and is held across the lookup awaits.
//! Two concurrent `add_product` calls for the same product therefore
//! cannot both observe "not in cart" and both append a line; the second
//! call waits for the first to finish and then sees its result.
//!
//! ## Why an Async Mutex?
//! The lock must be held across `.await` points (the lookup calls). A
//! `std::sync::Mutex` guard cannot cross an await; `tokio::sync::Mutex`
//! exists for exactly this shape.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::{StorageError, StoreError, StoreResult};
use crate::lookup::{HttpProductLookup, ProductLookup};
use crate::notify::Notification;
use crate::storage::{CartStorage, FileCartStorage};
use trolley_core::validation::validate_product_id;
use trolley_core::{Cart, CartError, CartTotals, Quantity, MAX_LINE_QUANTITY};

// =============================================================================
// Notification Messages
// =============================================================================
// Display text is a product decision; the conditions that trigger each one
// are the contract. Keep the texts in one place so the UI copy can change
// without touching operation logic.

const MSG_PRODUCT_ADDED: &str = "Product added to cart";
const MSG_OUT_OF_STOCK: &str = "Requested quantity exceeds available stock";
const MSG_ADD_FAILED: &str = "Could not add product to cart";
const MSG_REMOVE_FAILED: &str = "Could not remove product from cart";
const MSG_UPDATE_FAILED: &str = "Could not update product quantity";

/// What the add operation did, used to pick the right notification.
enum AddOutcome {
    /// A new line item was appended.
    Added,
    /// An existing line item's quantity went up by one.
    Incremented,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The cart store.
///
/// Owns the in-memory cart exclusively and keeps the persistent key-value
/// store mirrored after every accepted mutation. Construct one per cart
/// and hand it by reference to whatever needs it; there is no global
/// instance.
///
/// The three mutating operations never return errors: every failure is
/// caught, logged, and surfaced as a [`Notification`] on the broadcast
/// channel.
pub struct CartStore {
    lookup: Arc<dyn ProductLookup>,
    storage: Arc<dyn CartStorage>,
    storage_key: String,
    cart: Mutex<Cart>,
    notifications: broadcast::Sender<Notification>,
}

impl CartStore {
    /// Creates a store with the production collaborators: an HTTP lookup
    /// client and file-backed storage.
    ///
    /// ## Errors
    /// Only storage setup can fail here (the data directory cannot be
    /// created or resolved). The initial cart read never fails: a missing
    /// blob means an empty cart, and a corrupt blob is rejected with a
    /// warning log and an empty cart.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let lookup = Arc::new(HttpProductLookup::new(&config.lookup_base_url));
        let storage: Arc<dyn CartStorage> = match &config.storage_dir {
            Some(dir) => Arc::new(FileCartStorage::new(dir)?),
            None => Arc::new(FileCartStorage::in_default_dir()?),
        };
        Ok(Self::from_parts(lookup, storage, &config))
    }

    /// Creates a store from explicit collaborators.
    ///
    /// This is the dependency-injection constructor: tests pass stubs,
    /// embedders pass whatever implementations fit their platform.
    pub fn from_parts(
        lookup: Arc<dyn ProductLookup>,
        storage: Arc<dyn CartStorage>,
        config: &StoreConfig,
    ) -> Self {
        let cart = load_initial_cart(storage.as_ref(), &config.storage_key);
        let (notifications, _) = broadcast::channel(config.channel_capacity.max(1));

        CartStore {
            lookup,
            storage,
            storage_key: config.storage_key.clone(),
            cart: Mutex::new(cart),
            notifications,
        }
    }

    // =========================================================================
    // Read Surface
    // =========================================================================

    /// Returns a snapshot of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Returns the current cart totals.
    pub async fn totals(&self) -> CartTotals {
        CartTotals::from(&*self.cart.lock().await)
    }

    /// Subscribes to the notification channel.
    ///
    /// Each subscriber sees every notification published after the call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    // =========================================================================
    // Mutating Operations
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product not in cart: fetch product and stock; if stock covers one
    ///   unit, append a line with quantity 1 and announce it; if the stock
    ///   is zero, reject with a stock notification
    /// - Product already in cart: fetch stock; if it covers one more unit,
    ///   increment that line silently; otherwise reject with a stock
    ///   notification
    /// - Lookup or storage failure: reject with a generic add notification
    ///
    /// The cart is unchanged on every rejection path.
    pub async fn add_product(&self, product_id: &str) {
        match self.try_add(product_id).await {
            Ok(AddOutcome::Added) => {
                debug!(%product_id, "Product added to cart");
                self.publish(Notification::info(MSG_PRODUCT_ADDED));
            }
            Ok(AddOutcome::Incremented) => {
                debug!(%product_id, "Cart line incremented");
            }
            Err(StoreError::Cart(CartError::OutOfStock {
                available,
                requested,
                ..
            })) => {
                debug!(%product_id, available, requested, "Add rejected: insufficient stock");
                self.publish(Notification::error(MSG_OUT_OF_STOCK));
            }
            Err(err) => {
                warn!(%product_id, error = %err, "Failed to add product");
                self.publish(Notification::error(MSG_ADD_FAILED));
            }
        }
    }

    /// Removes a product's line item from the cart.
    ///
    /// Removing a product that is not in the cart rejects with the same
    /// notification as any other removal failure.
    pub async fn remove_product(&self, product_id: &str) {
        match self.try_remove(product_id).await {
            Ok(()) => {
                debug!(%product_id, "Product removed from cart");
            }
            Err(err) => {
                warn!(%product_id, error = %err, "Failed to remove product");
                self.publish(Notification::error(MSG_REMOVE_FAILED));
            }
        }
    }

    /// Replaces a line item's quantity with `quantity` exactly.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: reject immediately, before any lookup traffic
    /// - quantity above the reported stock: reject with a stock
    ///   notification
    /// - product not in cart, lookup failure, storage failure: reject with
    ///   a generic update notification
    ///
    /// The stock check runs before the membership check, so a request that
    /// is both out of stock and not in the cart reports the stock problem.
    pub async fn update_quantity(&self, product_id: &str, quantity: i64) {
        match self.try_update(product_id, quantity).await {
            Ok(()) => {
                debug!(%product_id, quantity, "Cart line quantity updated");
            }
            Err(StoreError::Cart(CartError::OutOfStock {
                available,
                requested,
                ..
            })) => {
                debug!(%product_id, available, requested, "Update rejected: insufficient stock");
                self.publish(Notification::error(MSG_OUT_OF_STOCK));
            }
            Err(err) => {
                warn!(%product_id, quantity, error = %err, "Failed to update quantity");
                self.publish(Notification::error(MSG_UPDATE_FAILED));
            }
        }
    }

    /// Empties the cart and persists the empty cart.
    pub async fn clear(&self) {
        let mut cart = self.cart.lock().await;
        let mut next = cart.clone();
        next.clear();

        match self.persist(&next) {
            Ok(()) => {
                *cart = next;
                debug!("Cart cleared");
            }
            Err(err) => {
                warn!(error = %err, "Failed to clear cart");
            }
        }
    }

    // =========================================================================
    // Fallible Bodies
    // =========================================================================
    // Each public operation wraps one of these, so the ? operator can do
    // the unwinding and the public surface stays notification-only.

    async fn try_add(&self, product_id: &str) -> StoreResult<AddOutcome> {
        validate_product_id(product_id).map_err(CartError::from)?;

        let mut cart = self.cart.lock().await;

        match cart.quantity_of(product_id) {
            None => {
                let product = self.lookup.fetch_product(product_id).await?;
                let stock = self.lookup.fetch_stock(product_id).await?;

                if !stock.covers(1) {
                    return Err(CartError::OutOfStock {
                        product_id: product_id.to_string(),
                        available: stock.amount,
                        requested: 1,
                    }
                    .into());
                }

                let mut next = cart.clone();
                next.insert(product)?;
                self.persist(&next)?;
                *cart = next;
                Ok(AddOutcome::Added)
            }
            Some(current) => {
                let stock = self.lookup.fetch_stock(product_id).await?;

                if !stock.covers(current + 1) {
                    return Err(CartError::OutOfStock {
                        product_id: product_id.to_string(),
                        available: stock.amount,
                        requested: i64::from(current) + 1,
                    }
                    .into());
                }

                let mut next = cart.clone();
                next.increment(product_id)?;
                self.persist(&next)?;
                *cart = next;
                Ok(AddOutcome::Incremented)
            }
        }
    }

    async fn try_remove(&self, product_id: &str) -> StoreResult<()> {
        validate_product_id(product_id).map_err(CartError::from)?;

        let mut cart = self.cart.lock().await;

        let mut next = cart.clone();
        next.remove(product_id)?;
        self.persist(&next)?;
        *cart = next;
        Ok(())
    }

    async fn try_update(&self, product_id: &str, quantity: i64) -> StoreResult<()> {
        validate_product_id(product_id).map_err(CartError::from)?;

        if quantity <= 0 {
            return Err(CartError::InvalidQuantity {
                requested: quantity,
            }
            .into());
        }
        let requested = match u32::try_from(quantity) {
            Ok(value) => Quantity::new(value)?,
            Err(_) => {
                return Err(CartError::QuantityTooLarge {
                    requested: quantity,
                    max: MAX_LINE_QUANTITY,
                }
                .into())
            }
        };

        let mut cart = self.cart.lock().await;

        let stock = self.lookup.fetch_stock(product_id).await?;
        if !stock.covers(requested.get()) {
            return Err(CartError::OutOfStock {
                product_id: product_id.to_string(),
                available: stock.amount,
                requested: quantity,
            }
            .into());
        }

        let mut next = cart.clone();
        next.set_quantity(product_id, requested)?;
        self.persist(&next)?;
        *cart = next;
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Serializes `cart` and writes it under the fixed key.
    ///
    /// Called before the in-memory swap: a failed write leaves both the
    /// storage and the in-memory cart on the previous state.
    fn persist(&self, cart: &Cart) -> StoreResult<()> {
        let blob = serde_json::to_string(cart).map_err(StorageError::Serialize)?;
        self.storage.set(&self.storage_key, &blob)?;
        debug!(items = cart.item_count(), "Cart persisted");
        Ok(())
    }

    /// Publishes a notification, ignoring the absence of subscribers.
    fn publish(&self, notification: Notification) {
        let _ = self.notifications.send(notification);
    }
}

/// Reads the persisted cart at construction time.
///
/// Missing key: empty cart. Unreadable or corrupt blob: warning log and an
/// empty cart. Corrupt data is rejected as a whole; individual fields are
/// never patched up.
fn load_initial_cart(storage: &dyn CartStorage, key: &str) -> Cart {
    match storage.get(key) {
        Ok(Some(blob)) => match serde_json::from_str::<Cart>(&blob) {
            Ok(cart) => {
                debug!(items = cart.item_count(), "Loaded persisted cart");
                cart
            }
            Err(err) => {
                warn!(error = %err, "Persisted cart is corrupt, starting empty");
                Cart::new()
            }
        },
        Ok(None) => Cart::new(),
        Err(err) => {
            warn!(error = %err, "Could not read persisted cart, starting empty");
            Cart::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::{LookupError, LookupResult};
    use crate::notify::Severity;
    use crate::storage::MemoryCartStorage;
    use trolley_core::{Product, StockLevel};

    /// Lookup stub backed by two maps. `fail` makes every call error the
    /// way an unreachable service would.
    #[derive(Default)]
    struct StubLookup {
        products: HashMap<String, Product>,
        stock: HashMap<String, i64>,
        fail: bool,
        stock_calls: AtomicUsize,
    }

    impl StubLookup {
        fn with(products: &[(&str, i64, i64)]) -> Self {
            let mut stub = StubLookup::default();
            for (id, price_cents, stock) in products {
                stub.products.insert(
                    (*id).to_string(),
                    Product {
                        id: (*id).to_string(),
                        name: format!("Product {}", id),
                        price_cents: *price_cents,
                        image_url: None,
                        extra: serde_json::Map::new(),
                    },
                );
                stub.stock.insert((*id).to_string(), *stock);
            }
            stub
        }

        fn failing() -> Self {
            StubLookup {
                fail: true,
                ..StubLookup::default()
            }
        }
    }

    #[async_trait]
    impl ProductLookup for StubLookup {
        async fn fetch_product(&self, product_id: &str) -> LookupResult<Product> {
            if self.fail {
                return Err(LookupError::Status {
                    status: 500,
                    url: "stub".to_string(),
                });
            }
            self.products
                .get(product_id)
                .cloned()
                .ok_or_else(|| LookupError::not_found("Product", product_id))
        }

        async fn fetch_stock(&self, product_id: &str) -> LookupResult<StockLevel> {
            self.stock_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LookupError::Status {
                    status: 500,
                    url: "stub".to_string(),
                });
            }
            self.stock
                .get(product_id)
                .map(|amount| StockLevel {
                    product_id: product_id.to_string(),
                    amount: *amount,
                })
                .ok_or_else(|| LookupError::not_found("Stock", product_id))
        }
    }

    fn test_config() -> StoreConfig {
        StoreConfig::new("http://stub.invalid").storage_key("test.cart")
    }

    fn test_store(lookup: StubLookup) -> (CartStore, Arc<MemoryCartStorage>) {
        let storage = Arc::new(MemoryCartStorage::new());
        let store = CartStore::from_parts(
            Arc::new(lookup),
            Arc::clone(&storage) as Arc<dyn CartStorage>,
            &test_config(),
        );
        (store, storage)
    }

    fn stored_blob(storage: &MemoryCartStorage) -> Option<String> {
        storage.get("test.cart").unwrap()
    }

    #[tokio::test]
    async fn test_add_new_product_with_stock() {
        let (store, storage) = test_store(StubLookup::with(&[("1", 999, 5)]));
        let mut rx = store.subscribe();

        store.add_product("1").await;

        let cart = store.cart().await;
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of("1"), Some(1));

        let persisted: Cart =
            serde_json::from_str(&stored_blob(&storage).unwrap()).unwrap();
        assert_eq!(persisted, cart);

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.severity, Severity::Info);
        assert_eq!(notification.message, MSG_PRODUCT_ADDED);
    }

    #[tokio::test]
    async fn test_add_existing_product_increments_by_one() {
        let (store, _) = test_store(StubLookup::with(&[("1", 999, 5), ("2", 100, 5)]));

        store.add_product("1").await;
        store.add_product("2").await;
        store.add_product("1").await;

        let cart = store.cart().await;
        assert_eq!(cart.quantity_of("1"), Some(2));
        assert_eq!(cart.quantity_of("2"), Some(1));
        assert_eq!(cart.item_count(), 2);
    }

    #[tokio::test]
    async fn test_add_at_stock_limit_is_rejected() {
        let (store, storage) = test_store(StubLookup::with(&[("1", 999, 1)]));

        store.add_product("1").await;
        let blob_before = stored_blob(&storage);
        let mut rx = store.subscribe();

        store.add_product("1").await;

        let cart = store.cart().await;
        assert_eq!(cart.quantity_of("1"), Some(1));
        assert_eq!(stored_blob(&storage), blob_before);

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, MSG_OUT_OF_STOCK);
    }

    #[tokio::test]
    async fn test_add_new_product_with_zero_stock_is_rejected() {
        let (store, storage) = test_store(StubLookup::with(&[("1", 999, 0)]));
        let mut rx = store.subscribe();

        store.add_product("1").await;

        assert!(store.cart().await.is_empty());
        assert_eq!(stored_blob(&storage), None);

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, MSG_OUT_OF_STOCK);
    }

    #[tokio::test]
    async fn test_add_with_failing_lookup_is_rejected() {
        let (store, storage) = test_store(StubLookup::failing());
        let mut rx = store.subscribe();

        store.add_product("1").await;

        assert!(store.cart().await.is_empty());
        assert_eq!(stored_blob(&storage), None);
        assert_eq!(rx.try_recv().unwrap().message, MSG_ADD_FAILED);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_rejected() {
        let (store, _) = test_store(StubLookup::with(&[]));
        let mut rx = store.subscribe();

        store.add_product("ghost").await;

        assert!(store.cart().await.is_empty());
        assert_eq!(rx.try_recv().unwrap().message, MSG_ADD_FAILED);
    }

    #[tokio::test]
    async fn test_remove_present_product() {
        let (store, storage) = test_store(StubLookup::with(&[("1", 999, 5), ("2", 100, 5)]));
        store.add_product("1").await;
        store.add_product("2").await;

        store.remove_product("1").await;

        let cart = store.cart().await;
        assert!(!cart.contains("1"));
        assert_eq!(cart.quantity_of("2"), Some(1));

        let persisted: Cart =
            serde_json::from_str(&stored_blob(&storage).unwrap()).unwrap();
        assert_eq!(persisted, cart);
    }

    #[tokio::test]
    async fn test_remove_absent_product_leaves_storage_untouched() {
        let (store, storage) = test_store(StubLookup::with(&[("1", 999, 5)]));
        store.add_product("1").await;
        let blob_before = stored_blob(&storage);
        let mut rx = store.subscribe();

        store.remove_product("ghost").await;

        assert_eq!(store.cart().await.item_count(), 1);
        assert_eq!(stored_blob(&storage), blob_before);

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, MSG_REMOVE_FAILED);
    }

    #[tokio::test]
    async fn test_update_replaces_quantity_exactly() {
        let (store, _) = test_store(StubLookup::with(&[("1", 999, 5)]));
        store.add_product("1").await;

        store.update_quantity("1", 3).await;

        assert_eq!(store.cart().await.quantity_of("1"), Some(3));
    }

    #[tokio::test]
    async fn test_update_above_stock_is_rejected() {
        let (store, _) = test_store(StubLookup::with(&[("1", 999, 5)]));
        store.add_product("1").await;
        let mut rx = store.subscribe();

        store.update_quantity("1", 10).await;

        assert_eq!(store.cart().await.quantity_of("1"), Some(1));
        assert_eq!(rx.try_recv().unwrap().message, MSG_OUT_OF_STOCK);
    }

    #[tokio::test]
    async fn test_update_nonpositive_quantity_skips_lookup() {
        let lookup = StubLookup::with(&[("1", 999, 5)]);
        let storage = Arc::new(MemoryCartStorage::new());
        let lookup = Arc::new(lookup);
        let store = CartStore::from_parts(
            Arc::clone(&lookup) as Arc<dyn ProductLookup>,
            Arc::clone(&storage) as Arc<dyn CartStorage>,
            &test_config(),
        );
        let mut rx = store.subscribe();

        store.update_quantity("1", 0).await;
        store.update_quantity("1", -4).await;

        assert!(store.cart().await.is_empty());
        assert_eq!(lookup.stock_calls.load(Ordering::SeqCst), 0);
        assert_eq!(rx.try_recv().unwrap().message, MSG_UPDATE_FAILED);
        assert_eq!(rx.try_recv().unwrap().message, MSG_UPDATE_FAILED);
    }

    #[tokio::test]
    async fn test_update_absent_product_is_rejected() {
        let (store, _) = test_store(StubLookup::with(&[("1", 999, 5)]));
        let mut rx = store.subscribe();

        store.update_quantity("1", 3).await;

        assert!(store.cart().await.is_empty());
        assert_eq!(rx.try_recv().unwrap().message, MSG_UPDATE_FAILED);
    }

    #[tokio::test]
    async fn test_stock_check_runs_before_membership_check() {
        // Not in the cart AND above stock: the stock rejection wins.
        let (store, _) = test_store(StubLookup::with(&[("1", 999, 5)]));
        let mut rx = store.subscribe();

        store.update_quantity("1", 10).await;

        assert_eq!(rx.try_recv().unwrap().message, MSG_OUT_OF_STOCK);
    }

    #[tokio::test]
    async fn test_clear_empties_cart_and_storage_blob() {
        let (store, storage) = test_store(StubLookup::with(&[("1", 999, 5)]));
        store.add_product("1").await;

        store.clear().await;

        assert!(store.cart().await.is_empty());
        assert_eq!(stored_blob(&storage).as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_store_reconstructed_from_storage_deep_equals() {
        let storage = Arc::new(MemoryCartStorage::new());
        let first = CartStore::from_parts(
            Arc::new(StubLookup::with(&[("1", 999, 5), ("2", 100, 5)])),
            Arc::clone(&storage) as Arc<dyn CartStorage>,
            &test_config(),
        );
        first.add_product("1").await;
        first.add_product("1").await;
        first.add_product("2").await;
        let original = first.cart().await;

        let second = CartStore::from_parts(
            Arc::new(StubLookup::with(&[])),
            Arc::clone(&storage) as Arc<dyn CartStorage>,
            &test_config(),
        );

        assert_eq!(second.cart().await, original);
    }

    #[tokio::test]
    async fn test_corrupt_blob_starts_empty() {
        let storage = Arc::new(MemoryCartStorage::with_entry("test.cart", "not json"));
        let store = CartStore::from_parts(
            Arc::new(StubLookup::with(&[])),
            Arc::clone(&storage) as Arc<dyn CartStorage>,
            &test_config(),
        );

        assert!(store.cart().await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_quantity_blob_starts_empty() {
        let blob = r#"[{"product":{"id":"1","name":"P","priceCents":100},"quantity":0,"addedAt":"2026-01-01T00:00:00Z"}]"#;
        let storage = Arc::new(MemoryCartStorage::with_entry("test.cart", blob));
        let store = CartStore::from_parts(
            Arc::new(StubLookup::with(&[])),
            Arc::clone(&storage) as Arc<dyn CartStorage>,
            &test_config(),
        );

        assert!(store.cart().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_adds_never_duplicate_a_line() {
        let (store, _) = test_store(StubLookup::with(&[("1", 999, 5)]));

        tokio::join!(
            store.add_product("1"),
            store.add_product("1"),
            store.add_product("1"),
        );

        let cart = store.cart().await;
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of("1"), Some(3));
    }
}
