// ============================================================================
// Engine Module
// Contains the core matching engine business logic
// ============================================================================

mod matching_engine;
mod price_time;

pub mod errors;
pub mod factory;

pub use errors::{OrderBookError, OrderBookResult};
pub use factory::{create_from_config, MatchingEngineBuilder};
pub use matching_engine::MatchingEngine;
