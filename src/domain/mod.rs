// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod order;
pub mod order_book;
pub mod trade;

pub use config::OrderBookConfig;
pub use order::{Order, OrderId, Side};
pub use order_book::{
    AskKey, AskPriority, BidKey, BidPriority, BookSide, OrderBookSnapshot, SidePriority,
};
pub use trade::Trade;
