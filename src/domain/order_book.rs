// ============================================================================
// Order Book Sides and Priority Orderings
// ============================================================================

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::{Order, Side};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Priority Keys
// ============================================================================
//
// Each side ranks its resting orders through a total order on a key type:
// price first, then arrival, then the engine-assigned insertion sequence.
// The sequence makes the ordering total even when two distinct orders carry
// the same price and the same arrival time.

/// Priority key for resting sell orders: the cheapest offer is the best
/// candidate to meet a buyer, so lower price ranks first. Among equal
/// prices, earlier arrival wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AskKey {
    pub price: Decimal,
    pub arrival: u64,
    pub sequence: u64,
}

impl Ord for AskKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.price
            .cmp(&other.price)
            .then_with(|| self.arrival.cmp(&other.arrival))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for AskKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority key for resting buy orders: the most aggressive bid ranks
/// first, so higher price wins. Among equal prices, earlier arrival wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidKey {
    pub price: Decimal,
    pub arrival: u64,
    pub sequence: u64,
}

impl Ord for BidKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .price
            .cmp(&self.price)
            .then_with(|| self.arrival.cmp(&other.arrival))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for BidKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Side Priority
// ============================================================================

/// Binds a book side to its priority key and crossing rule.
///
/// `crosses` is asked from the perspective of an incoming order on the
/// opposite side: whether its limit is compatible with a resting order at
/// `resting` on this side.
pub trait SidePriority {
    /// The side of the book this ordering ranks.
    const SIDE: Side;

    type Key: Ord + Copy + fmt::Debug;

    fn key(order: &Order) -> Self::Key;

    /// Whether an opposite-side incoming limit `incoming` crosses a resting
    /// order priced `resting` on this side.
    fn crosses(incoming: Decimal, resting: Decimal) -> bool;
}

/// Ordering for the resting-sell queue.
pub struct AskPriority;

impl SidePriority for AskPriority {
    const SIDE: Side = Side::Sell;

    type Key = AskKey;

    fn key(order: &Order) -> AskKey {
        AskKey {
            price: order.price,
            arrival: order.arrival,
            sequence: order.sequence(),
        }
    }

    // A buyer crosses any offer at or below their limit.
    fn crosses(incoming: Decimal, resting: Decimal) -> bool {
        incoming >= resting
    }
}

/// Ordering for the resting-buy queue.
pub struct BidPriority;

impl SidePriority for BidPriority {
    const SIDE: Side = Side::Buy;

    type Key = BidKey;

    fn key(order: &Order) -> BidKey {
        BidKey {
            price: order.price,
            arrival: order.arrival,
            sequence: order.sequence(),
        }
    }

    // A seller crosses any bid at or above their limit.
    fn crosses(incoming: Decimal, resting: Decimal) -> bool {
        incoming <= resting
    }
}

// ============================================================================
// Book Side
// ============================================================================

/// One side of the book: resting orders held in priority order.
///
/// The first entry is always the best resting order for this side. The side
/// owns its orders outright; only the matching engine mutates them, and only
/// while holding the book lock.
pub struct BookSide<P: SidePriority> {
    orders: BTreeMap<P::Key, Order>,
    _priority: PhantomData<P>,
}

impl<P: SidePriority> BookSide<P> {
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            _priority: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Insert a resting order. Quantity must be positive and the side must
    /// match this queue.
    pub(crate) fn insert(&mut self, order: Order) {
        debug_assert_eq!(order.side, P::SIDE);
        debug_assert!(order.quantity() > 0);
        let displaced = self.orders.insert(P::key(&order), order);
        debug_assert!(displaced.is_none(), "duplicate priority key");
    }

    /// The best resting order, by this side's priority.
    pub fn best(&self) -> Option<&Order> {
        self.orders.first_key_value().map(|(_, order)| order)
    }

    pub fn best_price(&self) -> Option<Decimal> {
        self.best().map(|order| order.price)
    }

    pub(crate) fn best_mut(&mut self) -> Option<&mut Order> {
        self.orders.values_mut().next()
    }

    pub(crate) fn remove_best(&mut self) -> Option<Order> {
        self.orders.pop_first().map(|(_, order)| order)
    }

    /// Iterate resting orders in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn total_quantity(&self) -> u64 {
        self.orders.values().map(Order::quantity).sum()
    }

    /// Aggregate the first `num_levels` price levels as (price, quantity),
    /// best level first.
    pub fn depth(&self, num_levels: usize) -> Vec<(Decimal, u64)> {
        let mut levels: Vec<(Decimal, u64)> = Vec::new();
        for order in self.orders.values() {
            match levels.last_mut() {
                Some((price, quantity)) if *price == order.price => {
                    *quantity += order.quantity();
                },
                _ => {
                    if levels.len() == num_levels {
                        break;
                    }
                    levels.push((order.price, order.quantity()));
                },
            }
        }
        levels
    }
}

impl<P: SidePriority> Default for BookSide<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SidePriority> fmt::Debug for BookSide<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookSide")
            .field("side", &P::SIDE)
            .field("orders", &self.orders.len())
            .finish()
    }
}

// ============================================================================
// Order Book Snapshot
// ============================================================================

/// Immutable aggregated view of the book at a point in time.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBookSnapshot {
    pub instrument: String,
    /// Bid levels (price, quantity), best first
    pub bids: Vec<(Decimal, u64)>,
    /// Ask levels (price, quantity), best first
    pub asks: Vec<(Decimal, u64)>,
    /// Current spread (ask - bid)
    pub spread: Option<Decimal>,
    /// Mid price
    pub mid_price: Option<Decimal>,
}

impl OrderBookSnapshot {
    pub fn with_depth(
        instrument: String,
        bids: Vec<(Decimal, u64)>,
        asks: Vec<(Decimal, u64)>,
    ) -> Self {
        let spread = match (bids.first(), asks.first()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask - bid),
            _ => None,
        };

        let mid_price = match (bids.first(), asks.first()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid + ask) / Decimal::from(2)),
            _ => None,
        };

        Self {
            instrument,
            bids,
            asks,
            spread,
            mid_price,
        }
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|(price, _)| *price)
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|(price, _)| *price)
    }
}
