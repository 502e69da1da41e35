//! # Store Configuration
//!
//! Configuration for constructing a [`CartStore`](crate::CartStore).

use std::path::PathBuf;

use crate::{CART_STORAGE_KEY, DEFAULT_CHANNEL_CAPACITY};

/// Cart store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("https://shop.example/api")
///     .storage_dir("/tmp/trolley")
///     .channel_capacity(64);
/// let store = CartStore::new(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the product/stock lookup service.
    pub lookup_base_url: String,

    /// Directory holding the persisted cart.
    /// Default: the platform data directory for Trolley.
    pub storage_dir: Option<PathBuf>,

    /// Key the cart blob lives under.
    /// Default: [`CART_STORAGE_KEY`].
    pub storage_key: String,

    /// Capacity of the notification broadcast channel.
    /// Default: [`DEFAULT_CHANNEL_CAPACITY`].
    pub channel_capacity: usize,
}

impl StoreConfig {
    /// Creates a configuration with defaults for everything except the
    /// lookup base URL.
    pub fn new(lookup_base_url: impl Into<String>) -> Self {
        StoreConfig {
            lookup_base_url: lookup_base_url.into(),
            storage_dir: None,
            storage_key: CART_STORAGE_KEY.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Sets the storage directory.
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Sets the storage key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the notification channel capacity.
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::new("https://shop.example/api");
        assert_eq!(config.lookup_base_url, "https://shop.example/api");
        assert_eq!(config.storage_key, CART_STORAGE_KEY);
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = StoreConfig::new("https://shop.example/api")
            .storage_dir("/tmp/trolley")
            .storage_key("test.cart")
            .channel_capacity(4);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/trolley")));
        assert_eq!(config.storage_key, "test.cart");
        assert_eq!(config.channel_capacity, 4);
    }
}
