//! The store's snapshot and its phase transitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use stockdesk_inventory::{Stock, StockMovement};

/// Complete in-memory state held by the store at a point in time.
///
/// `low_stock_items` and `high_stock_items` are derived: they are
/// recomputed from `stocks` whenever `stocks` is replaced and are never
/// mutated independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockState {
    pub stocks: Vec<Stock>,
    pub movements: Vec<StockMovement>,
    pub low_stock_items: Vec<Stock>,
    pub high_stock_items: Vec<Stock>,
    pub daily_summary: Option<Value>,
    pub weekly_summary: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StockState {
    /// Start phase of a tracked operation: mark loading, drop any stale error.
    pub(crate) fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Success phase of a list-stocks operation: replace the stock snapshot
    /// wholesale and recompute both alert lists from it.
    pub(crate) fn apply_stocks(&mut self, stocks: Vec<Stock>) {
        self.loading = false;
        self.low_stock_items = stocks.iter().filter(|s| s.is_low_stock()).cloned().collect();
        self.high_stock_items = stocks.iter().filter(|s| s.is_high_stock()).cloned().collect();
        self.stocks = stocks;
    }

    /// Success phase of a list-movements operation: replace wholesale.
    pub(crate) fn apply_movements(&mut self, movements: Vec<StockMovement>) {
        self.loading = false;
        self.movements = movements;
    }

    /// Success phase of a create-movement operation: append, never dedup.
    pub(crate) fn append_movement(&mut self, movement: StockMovement) {
        self.loading = false;
        self.movements.push(movement);
    }

    /// Failure phase of a tracked operation: retain only the message.
    pub(crate) fn fail_request(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub(crate) fn set_daily_summary(&mut self, summary: Value) {
        self.daily_summary = Some(summary);
    }

    pub(crate) fn set_weekly_summary(&mut self, summary: Value) {
        self.weekly_summary = Some(summary);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockdesk_core::{ProductId, StockId};

    fn test_stock(quantity: i64, minimum: i64, maximum: i64) -> Stock {
        Stock {
            id: StockId::new(),
            product_id: ProductId::new(),
            product_name: "Widget".to_string(),
            product_sku: "SKU-001".to_string(),
            quantity,
            minimum_threshold: minimum,
            maximum_threshold: maximum,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn begin_request_sets_loading_and_clears_error() {
        let mut state = StockState {
            error: Some("previous failure".to_string()),
            ..StockState::default()
        };

        state.begin_request();

        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn apply_stocks_recomputes_alerts_from_new_snapshot() {
        let mut state = StockState::default();

        // First snapshot: one low item.
        let low = test_stock(2, 5, 100);
        state.apply_stocks(vec![low.clone()]);
        assert_eq!(state.low_stock_items, vec![low]);
        assert!(state.high_stock_items.is_empty());

        // Replacement snapshot: one high item. The alert lists must track
        // the latest payload, not the prior one.
        let high = test_stock(150, 5, 100);
        state.apply_stocks(vec![high.clone()]);
        assert!(state.low_stock_items.is_empty());
        assert_eq!(state.high_stock_items, vec![high.clone()]);
        assert_eq!(state.stocks, vec![high]);
    }

    #[test]
    fn fail_request_retains_only_the_message() {
        let mut state = StockState::default();
        state.begin_request();
        state.fail_request("Failed to fetch stocks".to_string());

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch stocks"));
    }
}
