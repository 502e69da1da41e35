//! # Cart Store Demo
//!
//! Drives a cart store against a live lookup service for development.
//!
//! ## Usage
//! ```bash
//! # Point at a lookup service (json-server style: /products/:id, /stock/:id)
//! cargo run -p trolley-store --bin demo -- --url http://localhost:3333
//!
//! # Pick the products to exercise (default: "1")
//! cargo run -p trolley-store --bin demo -- --url http://localhost:3333 \
//!     --product 1 --product 2
//!
//! # Keep the cart in a scratch directory instead of the data directory
//! cargo run -p trolley-store --bin demo -- --url http://localhost:3333 \
//!     --data-dir /tmp/trolley-demo
//! ```
//!
//! The URL can also come from the `TROLLEY_API_URL` environment variable.
//!
//! ## What It Does
//! Adds each product twice, bumps the first one to quantity 3, removes the
//! last one, then prints the resulting cart and every notification the run
//! produced.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use trolley_store::{CartStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut url = env::var("TROLLEY_API_URL").unwrap_or_default();
    let mut data_dir: Option<String> = None;
    let mut product_ids: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--url" | "-u" => {
                if i + 1 < args.len() {
                    url = args[i + 1].clone();
                    i += 1;
                }
            }
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--product" | "-p" => {
                if i + 1 < args.len() {
                    product_ids.push(args[i + 1].clone());
                    i += 1;
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: demo --url <base-url> [--data-dir <dir>] [--product <id>]...");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    if url.is_empty() {
        eprintln!("No lookup service URL. Pass --url or set TROLLEY_API_URL.");
        std::process::exit(2);
    }
    if product_ids.is_empty() {
        product_ids.push("1".to_string());
    }

    let mut config = StoreConfig::new(&url);
    if let Some(dir) = data_dir {
        config = config.storage_dir(dir);
    }

    info!(%url, "Building cart store");
    let store = CartStore::new(config)?;
    let mut notifications = store.subscribe();

    for product_id in &product_ids {
        store.add_product(product_id).await;
        store.add_product(product_id).await;
    }
    if let Some(first) = product_ids.first() {
        store.update_quantity(first, 3).await;
    }
    if product_ids.len() > 1 {
        if let Some(last) = product_ids.last() {
            store.remove_product(last).await;
        }
    }

    let cart = store.cart().await;
    println!("Cart ({} lines):", cart.item_count());
    for item in cart.items() {
        println!(
            "  {:<24} x{:<4} {:>8} cents",
            item.product.name,
            item.quantity.get(),
            item.line_total_cents()
        );
    }
    let totals = store.totals().await;
    println!(
        "Totals: {} units, subtotal {} cents",
        totals.total_quantity, totals.subtotal_cents
    );

    println!("Notifications:");
    while let Ok(notification) = notifications.try_recv() {
        println!("  [{:?}] {}", notification.severity, notification.message);
    }

    Ok(())
}
