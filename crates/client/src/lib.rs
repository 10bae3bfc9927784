//! `stockdesk-client` — HTTP transport for the stock store.
//!
//! Implements the store's `StockApi` contract against the remote stock
//! management API over `reqwest`.

pub mod http;

pub use http::HttpStockApi;
