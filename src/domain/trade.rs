// ============================================================================
// Trade Domain Model
// ============================================================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::OrderId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One executed leg of a submission: a matched quantity/price pair between
/// an incoming order and one resting counter-party.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trade {
    /// Unique trade identifier
    pub id: Uuid,

    /// Trading instrument
    pub instrument: String,

    /// Order ID of the passive order (resting in book)
    pub maker_order_id: OrderId,

    /// Order ID of the aggressive order (incoming)
    pub taker_order_id: OrderId,

    /// Execution price: always the resting order's price, so the incoming
    /// order receives price improvement to the best resting level
    pub price: Decimal,

    /// Executed quantity
    pub quantity: u64,

    /// Trade timestamp
    pub executed_at: DateTime<Utc>,
}

impl Trade {
    pub fn new(
        instrument: String,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        price: Decimal,
        quantity: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument,
            maker_order_id,
            taker_order_id,
            price,
            quantity,
            executed_at: Utc::now(),
        }
    }

    /// Traded value of this leg (price × quantity).
    pub fn notional(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_creation() {
        let trade = Trade::new(
            "ABC".to_string(),
            OrderId::new(),
            OrderId::new(),
            Decimal::from(10),
            3,
        );

        assert_eq!(trade.instrument, "ABC");
        assert_eq!(trade.notional(), Decimal::from(30));
    }

    #[test]
    fn test_notional_with_fractional_price() {
        let trade = Trade::new(
            "ABC".to_string(),
            OrderId::new(),
            OrderId::new(),
            Decimal::new(4355, 1), // 435.5
            1000,
        );

        assert_eq!(trade.notional(), Decimal::from(435_500));
    }
}
