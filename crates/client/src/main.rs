//! Demo entry point: load an inventory snapshot and report stock alerts.

use std::sync::Arc;

use stockdesk_client::HttpStockApi;
use stockdesk_store::StockStore;

#[tokio::main]
async fn main() {
    stockdesk_observability::init();

    // API URL from environment or default
    let api_url = std::env::var("STOCKDESK_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());

    // Auth token from environment (optional)
    let api = match std::env::var("STOCKDESK_AUTH_TOKEN") {
        Ok(token) => {
            tracing::info!("Connecting to {} with authentication token", api_url);
            HttpStockApi::with_token(api_url, token)
        }
        Err(_) => {
            tracing::info!("Connecting to {} without authentication token", api_url);
            HttpStockApi::new(api_url)
        }
    };

    let store = StockStore::new(Arc::new(api));

    // Failures are absorbed into the snapshot's error field; the store
    // already logs them, so the outcomes can be ignored here.
    let _ = store.fetch_stocks().await;
    let _ = store.fetch_movements().await;
    let _ = store.fetch_daily_summary().await;
    let _ = store.fetch_weekly_summary().await;

    let snap = store.snapshot();

    if let Some(error) = &snap.error {
        tracing::error!("last operation failed: {error}");
    }

    tracing::info!(
        stocks = snap.stocks.len(),
        movements = snap.movements.len(),
        low_stock = snap.low_stock_items.len(),
        high_stock = snap.high_stock_items.len(),
        "inventory snapshot loaded"
    );

    for stock in &snap.low_stock_items {
        tracing::warn!(
            "low stock: {} ({} on hand, minimum {})",
            stock.product_name,
            stock.quantity,
            stock.minimum_threshold
        );
    }

    for stock in &snap.high_stock_items {
        tracing::warn!(
            "high stock: {} ({} on hand, maximum {})",
            stock.product_name,
            stock.quantity,
            stock.maximum_threshold
        );
    }
}
