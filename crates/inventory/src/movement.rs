//! Stock movements: recorded quantity-change events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::{MovementId, ProductId};

/// Direction of a stock movement, in the remote API's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    /// Goods received; quantity added.
    In,
    /// Goods issued; quantity removed.
    Out,
    /// Absolute correction; quantity set outright.
    Adjust,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::In => "IN",
            MovementType::Out => "OUT",
            MovementType::Adjust => "ADJUST",
        }
    }
}

/// A recorded change in a product's stock quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    #[serde(rename = "product")]
    pub product_id: ProductId,
    #[serde(default)]
    pub product_name: Option<String>,
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a movement.
///
/// Partial on purpose: identity, timestamp, and actor attribution are
/// assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStockMovement {
    #[serde(rename = "product")]
    pub product_id: ProductId,
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&MovementType::In).unwrap(),
            "\"IN\""
        );
        assert_eq!(
            serde_json::from_str::<MovementType>("\"ADJUST\"").unwrap(),
            MovementType::Adjust
        );
        assert_eq!(MovementType::Out.as_str(), "OUT");
    }

    #[test]
    fn new_movement_omits_unset_fields() {
        let payload = NewStockMovement {
            product_id: ProductId::new(),
            movement_type: MovementType::In,
            quantity: 10,
            notes: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["movement_type"], "IN");
    }
}
