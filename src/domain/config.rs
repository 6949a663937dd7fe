// ============================================================================
// Order Book Configuration
// ============================================================================

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a single-instrument order book.
///
/// One engine instance serves exactly one instrument; serving several
/// instruments means one configured engine per instrument.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBookConfig {
    /// The trading instrument (e.g., "ABC", "BTC-USD")
    pub instrument: String,

    /// Optional: Price tick size (minimum price increment)
    /// None means no tick size enforcement
    pub tick_size: Option<Decimal>,

    /// Optional: Lot size (minimum quantity increment)
    /// None means no lot size enforcement
    pub lot_size: Option<u64>,
}

impl OrderBookConfig {
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            tick_size: None,
            lot_size: None,
        }
    }

    /// Builder method: Set price tick size
    pub fn with_tick_size(mut self, tick: Decimal) -> Self {
        self.tick_size = Some(tick);
        self
    }

    /// Builder method: Set lot size
    pub fn with_lot_size(mut self, lot: u64) -> Self {
        self.lot_size = Some(lot);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.instrument.is_empty() {
            return Err("Instrument cannot be empty".to_string());
        }

        if let Some(tick) = self.tick_size {
            if tick <= Decimal::ZERO {
                return Err("Tick size must be positive".to_string());
            }
        }

        if let Some(lot) = self.lot_size {
            if lot == 0 {
                return Err("Lot size must be positive".to_string());
            }
        }

        Ok(())
    }
}
