// ============================================================================
// Priority Order Book Library
// Single-instrument price-time priority matching engine
// ============================================================================

//! # Priority Order Book
//!
//! A single-security order-matching engine: buy and sell orders from
//! multiple traders are continuously matched by price-time priority, with
//! partial and full executions and the unmatched remainder resting in the
//! book.
//!
//! ## Features
//!
//! - **Price-time priority** on both sides: better price first, earlier
//!   arrival among equal prices
//! - **Price improvement**: every leg executes at the resting order's price
//! - **Multi-level partial fills** in one submission
//! - **Self-trade rejection** surfaced as a caller-visible error
//! - **Atomic submissions**: one exclusive lock per instrument; snapshots
//!   never observe a half-applied crossing loop
//!
//! ## Example
//!
//! ```rust
//! use priority_orderbook::prelude::*;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let book = MatchingEngine::new("ABC");
//! let handle: Arc<dyn ClientHandle> = Arc::new(NoOpClientHandle);
//!
//! let sell = Order::new(
//!     "seller1", "ABC", Side::Sell, Decimal::from(10), 1, 1, Arc::clone(&handle),
//! );
//! assert_eq!(book.submit_sell(sell).unwrap(), Decimal::ZERO);
//!
//! let buy = Order::new(
//!     "buyer1", "ABC", Side::Buy, Decimal::from(10), 1, 2, handle,
//! );
//! assert_eq!(book.submit_buy(buy).unwrap(), Decimal::from(10));
//! assert!(book.all_orders().is_empty());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Order, OrderBookConfig, OrderBookSnapshot, OrderId, Side, Trade,
    };
    pub use crate::engine::{
        create_from_config, MatchingEngine, MatchingEngineBuilder, OrderBookError,
        OrderBookResult,
    };
    pub use crate::interfaces::{ClientHandle, LoggingClientHandle, NoOpClientHandle};
}
