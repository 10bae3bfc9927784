//! The stock store: request lifecycles over the shared snapshot.

use std::sync::{Arc, RwLock, RwLockWriteGuard};

use stockdesk_core::{ApiError, ApiResult};
use stockdesk_inventory::{NewStockMovement, StockMovement};

use crate::api::StockApi;
use crate::state::StockState;

const FETCH_STOCKS_FALLBACK: &str = "Failed to fetch stocks";
const FETCH_MOVEMENTS_FALLBACK: &str = "Failed to fetch stock movements";
const CREATE_MOVEMENT_FALLBACK: &str = "Failed to create stock movement";

/// Client-side store of the last-known inventory snapshot.
///
/// Cheap to clone; all clones share the same snapshot. Each operation
/// applies its start/success/failure phase atomically (one write-lock scope
/// per phase, never held across the network call), but `loading` and
/// `error` are a single shared pair: overlapping operations race them
/// last-writer-wins, with no sequencing guarantee between in-flight calls.
/// A superseded operation's completion still applies; there is no
/// cancellation.
#[derive(Clone)]
pub struct StockStore {
    api: Arc<dyn StockApi>,
    state: Arc<RwLock<StockState>>,
}

impl StockStore {
    /// Create a store with an empty snapshot.
    pub fn new(api: Arc<dyn StockApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(StockState::default())),
        }
    }

    /// Read a copy of the current snapshot.
    pub fn snapshot(&self) -> StockState {
        self.state.read().expect("stock state lock poisoned").clone()
    }

    /// Drop the stored error message, leaving everything else untouched.
    pub fn clear_error(&self) {
        self.write().clear_error();
    }

    /// Fetch all stock records, replacing the stock snapshot and
    /// recomputing the low/high alert lists on success.
    pub async fn fetch_stocks(&self) -> ApiResult<()> {
        self.write().begin_request();
        match self.api.list_stocks().await {
            Ok(stocks) => {
                self.write().apply_stocks(stocks);
                Ok(())
            }
            Err(err) => {
                self.absorb_failure(&err, FETCH_STOCKS_FALLBACK);
                Err(err)
            }
        }
    }

    /// Fetch all stock movements, replacing the movement list on success.
    pub async fn fetch_movements(&self) -> ApiResult<()> {
        self.write().begin_request();
        match self.api.list_movements().await {
            Ok(movements) => {
                self.write().apply_movements(movements);
                Ok(())
            }
            Err(err) => {
                self.absorb_failure(&err, FETCH_MOVEMENTS_FALLBACK);
                Err(err)
            }
        }
    }

    /// Create a movement; the server-assigned record is appended to the
    /// end of the movement list (no replacement, no dedup).
    pub async fn create_movement(&self, movement: NewStockMovement) -> ApiResult<StockMovement> {
        self.write().begin_request();
        match self.api.create_movement(movement).await {
            Ok(created) => {
                self.write().append_movement(created.clone());
                Ok(created)
            }
            Err(err) => {
                self.absorb_failure(&err, CREATE_MOVEMENT_FALLBACK);
                Err(err)
            }
        }
    }

    /// Fetch the daily summary.
    ///
    /// Best-effort: does not touch `loading` or `error`. A failure leaves
    /// the snapshot untouched and is only visible in the returned result.
    pub async fn fetch_daily_summary(&self) -> ApiResult<()> {
        let summary = self
            .api
            .daily_summary()
            .await
            .inspect_err(|err| tracing::debug!("daily summary fetch failed: {err}"))?;
        self.write().set_daily_summary(summary);
        Ok(())
    }

    /// Fetch the weekly summary. Best-effort, like the daily one.
    pub async fn fetch_weekly_summary(&self) -> ApiResult<()> {
        let summary = self
            .api
            .weekly_summary()
            .await
            .inspect_err(|err| tracing::debug!("weekly summary fetch failed: {err}"))?;
        self.write().set_weekly_summary(summary);
        Ok(())
    }

    /// Failure phase for the tracked operations: extract the server's
    /// message when the response carried one, otherwise fall back to the
    /// operation-specific literal.
    fn absorb_failure(&self, err: &ApiError, fallback: &str) {
        let message = err.response_message().unwrap_or(fallback).to_string();
        tracing::warn!("{fallback}: {err}");
        self.write().fail_request(message);
    }

    fn write(&self) -> RwLockWriteGuard<'_, StockState> {
        self.state.write().expect("stock state lock poisoned")
    }
}
