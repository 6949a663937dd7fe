// ============================================================================
// Client Handle Interface
// Defines the contract for notifying order owners about executions
// ============================================================================

use rust_decimal::Decimal;

/// Callback channel back to an order's owner.
///
/// Every order carries one of these as an opaque handle; the engine invokes
/// it for both parties of every executed leg. Implementations bridge to the
/// actual transport (remote callback, message bus, ...) and must not block:
/// the engine calls them while holding the book lock.
pub trait ClientHandle: Send + Sync {
    /// A leg involving one of the owner's orders executed at `price` for
    /// `quantity` units of `instrument`.
    fn order_matched(&self, instrument: &str, quantity: u64, price: Decimal);
}

/// No-op handle for testing
pub struct NoOpClientHandle;

impl ClientHandle for NoOpClientHandle {
    fn order_matched(&self, _instrument: &str, _quantity: u64, _price: Decimal) {
        // Do nothing
    }
}

/// Logging handle
pub struct LoggingClientHandle;

impl ClientHandle for LoggingClientHandle {
    fn order_matched(&self, instrument: &str, quantity: u64, price: Decimal) {
        tracing::debug!("order matched: {} x {} @ {}", instrument, quantity, price);
    }
}
