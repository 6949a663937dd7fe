// ============================================================================
// Order Domain Model
// ============================================================================

use crate::interfaces::ClientHandle;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

// ============================================================================
// Order Entity
// ============================================================================

/// A limit order submitted by a trader.
///
/// Identity, price, side and arrival order are fixed at construction. The
/// remaining quantity is the only mutable field and decreases monotonically
/// as fills execute; an order is fully consumed when it reaches zero.
///
/// The book exclusively owns every resting order: external callers only ever
/// receive clones, never a mutable alias into book state.
#[derive(Clone)]
pub struct Order {
    pub id: OrderId,
    pub owner: Arc<String>,
    pub instrument: Arc<String>,
    pub side: Side,
    pub price: Decimal,
    /// Caller-supplied submission time, used purely for priority
    /// tie-breaking. Monotonically non-decreasing per submission stream.
    pub arrival: u64,
    pub submitted_at: DateTime<Utc>,

    quantity: u64,
    /// Engine-assigned insertion sequence; final tie-break when both price
    /// and arrival are equal.
    sequence: u64,
    client: Arc<dyn ClientHandle>,
}

impl Order {
    pub fn new(
        owner: impl Into<String>,
        instrument: impl Into<String>,
        side: Side,
        price: Decimal,
        quantity: u64,
        arrival: u64,
        client: Arc<dyn ClientHandle>,
    ) -> Self {
        Self {
            id: OrderId::new(),
            owner: Arc::new(owner.into()),
            instrument: Arc::new(instrument.into()),
            side,
            price,
            arrival,
            submitted_at: Utc::now(),
            quantity,
            sequence: 0,
            client,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// The owner's notification channel. Carried, never interpreted: the
    /// engine only forwards fill notifications through it.
    pub fn client(&self) -> &Arc<dyn ClientHandle> {
        &self.client
    }

    // ========================================================================
    // Book-Internal Mutations
    // ========================================================================

    /// Consume `quantity` units of this order. Callers guarantee
    /// `quantity <= self.quantity()`.
    pub(crate) fn fill(&mut self, quantity: u64) {
        debug_assert!(quantity <= self.quantity);
        self.quantity -= quantity;
    }

    /// Set the insertion sequence (assigned by the matching engine).
    pub(crate) fn set_sequence(&mut self, sequence: u64) {
        self.sequence = sequence;
    }
}

// Two orders are the same order iff they share an identity; every other
// field may collide between distinct orders.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("instrument", &self.instrument)
            .field("side", &self.side)
            .field("price", &self.price)
            .field("quantity", &self.quantity)
            .field("arrival", &self.arrival)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpClientHandle;

    fn order(owner: &str, side: Side, price: i64, quantity: u64) -> Order {
        Order::new(
            owner,
            "ABC",
            side,
            Decimal::from(price),
            quantity,
            1,
            Arc::new(NoOpClientHandle),
        )
    }

    #[test]
    fn test_order_creation() {
        let order = order("buyer1", Side::Buy, 10, 5);

        assert_eq!(order.quantity(), 5);
        assert_eq!(order.sequence(), 0);
        assert!(!order.is_filled());
        assert_eq!(*order.owner, "buyer1");
    }

    #[test]
    fn test_fill_decrements_quantity() {
        let mut order = order("seller1", Side::Sell, 10, 5);

        order.fill(3);
        assert_eq!(order.quantity(), 2);
        assert!(!order.is_filled());

        order.fill(2);
        assert_eq!(order.quantity(), 0);
        assert!(order.is_filled());
    }

    #[test]
    fn test_identity_not_field_equality() {
        let one = order("buyer1", Side::Buy, 10, 1);
        let two = order("buyer1", Side::Buy, 10, 1);

        // Same fields, distinct orders.
        assert_ne!(one, two);
        assert_eq!(one, one.clone());
    }
}
