//! `stockdesk-inventory` — stock-tracking domain records.
//!
//! The record shapes here mirror the remote API's responses; the client
//! interprets only `quantity` and the two thresholds, everything else is
//! carried opaquely for display.

pub mod movement;
pub mod stock;

pub use movement::{MovementType, NewStockMovement, StockMovement};
pub use stock::Stock;
