//! Stock records and the low/high threshold predicates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::{ProductId, StockId};

/// Current stock level of a single product (matches the API response shape).
///
/// `product_name` and `product_sku` are denormalized by the server for
/// display; the client never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: StockId,
    #[serde(rename = "product")]
    pub product_id: ProductId,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i64,
    pub minimum_threshold: i64,
    pub maximum_threshold: i64,
    pub updated_at: DateTime<Utc>,
}

impl Stock {
    /// Quantity has fallen to or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum_threshold
    }

    /// Quantity has reached or exceeded the configured maximum.
    pub fn is_high_stock(&self) -> bool {
        self.quantity >= self.maximum_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_stock(quantity: i64, minimum: i64, maximum: i64) -> Stock {
        Stock {
            id: StockId::new(),
            product_id: ProductId::new(),
            product_name: "Test Product".to_string(),
            product_sku: "SKU-001".to_string(),
            quantity,
            minimum_threshold: minimum,
            maximum_threshold: maximum,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn quantity_at_minimum_threshold_is_low() {
        assert!(test_stock(5, 5, 100).is_low_stock());
        assert!(test_stock(4, 5, 100).is_low_stock());
        assert!(!test_stock(6, 5, 100).is_low_stock());
    }

    #[test]
    fn quantity_at_maximum_threshold_is_high() {
        assert!(test_stock(100, 5, 100).is_high_stock());
        assert!(test_stock(101, 5, 100).is_high_stock());
        assert!(!test_stock(99, 5, 100).is_high_stock());
    }

    #[test]
    fn stock_round_trips_with_api_field_names() {
        let stock = test_stock(2, 5, 100);
        let json = serde_json::to_value(&stock).unwrap();
        assert!(json.get("product").is_some());
        assert!(json.get("product_id").is_none());

        let back: Stock = serde_json::from_value(json).unwrap();
        assert_eq!(back, stock);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the alert predicates are exactly the threshold
        /// comparisons, for any combination of quantity and thresholds.
        #[test]
        fn alert_predicates_match_threshold_comparisons(
            quantity in 0i64..10_000,
            minimum in 0i64..10_000,
            maximum in 0i64..10_000,
        ) {
            let stock = test_stock(quantity, minimum, maximum);
            prop_assert_eq!(stock.is_low_stock(), quantity <= minimum);
            prop_assert_eq!(stock.is_high_stock(), quantity >= maximum);
        }
    }
}
