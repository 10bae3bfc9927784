//! `stockdesk-core` — shared building blocks for the Stockdesk client.
//!
//! This crate contains the strongly typed identifiers and the transport
//! error model used by every other crate in the workspace. It has no
//! knowledge of HTTP, state management, or the UI.

pub mod error;
pub mod id;

pub use error::{ApiError, ApiResult};
pub use id::{MovementId, ProductId, StockId};
