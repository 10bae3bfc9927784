//! Transport contract consumed by the store.

use serde_json::Value;

use stockdesk_core::ApiResult;
use stockdesk_inventory::{NewStockMovement, Stock, StockMovement};

/// Remote API surface the store depends on.
///
/// Implementations live elsewhere (the HTTP client in production, scripted
/// mocks in tests); the store is injected with an `Arc<dyn StockApi>` and
/// never constructs one itself.
#[async_trait::async_trait]
pub trait StockApi: Send + Sync {
    /// Fetch all stock records.
    async fn list_stocks(&self) -> ApiResult<Vec<Stock>>;

    /// Fetch all stock movements.
    async fn list_movements(&self) -> ApiResult<Vec<StockMovement>>;

    /// Create a movement; the server fills in identity, timestamp, and actor.
    async fn create_movement(&self, movement: NewStockMovement) -> ApiResult<StockMovement>;

    /// Fetch the daily movement summary (opaque to the client).
    async fn daily_summary(&self) -> ApiResult<Value>;

    /// Fetch the weekly movement summary (opaque to the client).
    async fn weekly_summary(&self) -> ApiResult<Value>;
}
