//! `stockdesk-store` — in-memory stock store.
//!
//! **Responsibility:** hold the last-known snapshot of stock records,
//! movements, derived alert lists, and summaries fetched from the remote
//! API, and track loading/error status for the asynchronous operations
//! that mutate it.
//!
//! The store is a thin client-side layer: it owns no persistence, performs
//! no retries, and absorbs failures into a single message string readable
//! from the snapshot.

pub mod api;
pub mod state;
pub mod store;

pub use api::StockApi;
pub use state::StockState;
pub use store::StockStore;
