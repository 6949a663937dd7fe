// ============================================================================
// Matching Engine
// Core business logic for order matching
// ============================================================================

use crate::domain::{
    AskPriority, BidPriority, BookSide, Order, OrderBookConfig, OrderBookSnapshot, Side, Trade,
};
use crate::engine::errors::{OrderBookError, OrderBookResult};
use crate::engine::price_time;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Both priority queues plus the insertion-sequence counter, guarded as one
/// unit so a multi-leg crossing loop is a single atomic operation.
struct BookInner {
    bids: BookSide<BidPriority>,
    asks: BookSide<AskPriority>,
    next_sequence: u64,
}

/// Price-time priority matching engine for a single instrument.
///
/// Owns the resting-buy and resting-sell queues behind one exclusive lock:
/// submissions and snapshots serialize against each other, and no snapshot
/// can observe a half-applied crossing loop. Serving several instruments
/// means one engine (and one lock) per instrument; cross-instrument
/// operations never contend.
pub struct MatchingEngine {
    /// Trading instrument (e.g., "ABC", "BTC-USD")
    instrument: Arc<String>,

    /// Validation configuration (tick/lot sizes)
    config: OrderBookConfig,

    /// Book state; never locked across external I/O
    book: Mutex<BookInner>,
}

impl MatchingEngine {
    /// Create a new matching engine with default (unconstrained) validation.
    pub fn new(instrument: impl Into<String>) -> Self {
        Self::with_config(OrderBookConfig::new(instrument))
    }

    /// Create a new matching engine from a configuration.
    pub fn with_config(config: OrderBookConfig) -> Self {
        Self {
            instrument: Arc::new(config.instrument.clone()),
            config,
            book: Mutex::new(BookInner {
                bids: BookSide::new(),
                asks: BookSide::new(),
                next_sequence: 0,
            }),
        }
    }

    /// Get the instrument name
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Submit a buy order: match it against resting sells, rest any
    /// remainder, and return the traded notional value (zero when nothing
    /// matched).
    pub fn submit_buy(&self, order: Order) -> OrderBookResult<Decimal> {
        self.submit(order, Side::Buy)
    }

    /// Submit a sell order: match it against resting buys, rest any
    /// remainder, and return the traded notional value (zero when nothing
    /// matched).
    pub fn submit_sell(&self, order: Order) -> OrderBookResult<Decimal> {
        self.submit(order, Side::Sell)
    }

    fn submit(&self, mut order: Order, expected: Side) -> OrderBookResult<Decimal> {
        self.validate(&order, expected)?;

        let mut guard = self.book.lock();
        let inner = &mut *guard;

        order.set_sequence(inner.next_sequence);
        inner.next_sequence += 1;

        let legs = match expected {
            Side::Buy => price_time::cross(order, &mut inner.bids, &mut inner.asks)?,
            Side::Sell => price_time::cross(order, &mut inner.asks, &mut inner.bids)?,
        };

        // Raw traded value across all legs of this call, not an average
        Ok(legs.iter().map(Trade::notional).sum())
    }

    /// Checked preconditions; rejections here never mutate the book.
    fn validate(&self, order: &Order, expected: Side) -> OrderBookResult<()> {
        if order.side != expected {
            return Err(OrderBookError::SideMismatch);
        }

        if order.quantity() == 0 {
            return Err(OrderBookError::InvalidQuantity);
        }

        if order.price <= Decimal::ZERO {
            return Err(OrderBookError::InvalidPrice);
        }

        if *order.instrument != *self.instrument {
            return Err(OrderBookError::InstrumentMismatch);
        }

        if let Some(tick) = self.config.tick_size {
            if order.price % tick != Decimal::ZERO {
                return Err(OrderBookError::InvalidPrice);
            }
        }

        if let Some(lot) = self.config.lot_size {
            if order.quantity() % lot != 0 {
                return Err(OrderBookError::InvalidQuantity);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Every order currently resting in either queue, as cloned copies.
    ///
    /// A point-in-time inventory, not a priority view: iteration order is
    /// unspecified. Reflects the most recently completed submission.
    pub fn all_orders(&self) -> Vec<Order> {
        let inner = self.book.lock();
        inner
            .bids
            .iter()
            .chain(inner.asks.iter())
            .cloned()
            .collect()
    }

    /// Aggregated depth snapshot with spread and mid price.
    pub fn snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let inner = self.book.lock();
        OrderBookSnapshot::with_depth(
            (*self.instrument).clone(),
            inner.bids.depth(depth),
            inner.asks.depth(depth),
        )
    }
}
