// ============================================================================
// Order Book Errors
// Error types for order submission
// ============================================================================

use std::fmt;

/// Errors surfaced to the caller of a buy/sell submission.
///
/// All variants are caller input errors; the engine is purely in-memory and
/// synchronous, so there is no transient or retryable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderBookError {
    /// The incoming order crossed a resting order with the same owner
    SelfTrade,
    /// Quantity is zero, or off the configured lot size
    InvalidQuantity,
    /// Price is not positive, or off the configured tick size
    InvalidPrice,
    /// Order side does not match the invoked operation
    SideMismatch,
    /// Order instrument differs from the one this book serves
    InstrumentMismatch,
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::SelfTrade => {
                write!(f, "self-trade: submitter owns the crossing resting order")
            },
            OrderBookError::InvalidQuantity => {
                write!(f, "invalid quantity: must be positive and lot-aligned")
            },
            OrderBookError::InvalidPrice => {
                write!(f, "invalid price: must be positive and tick-aligned")
            },
            OrderBookError::SideMismatch => {
                write!(f, "side mismatch: order side does not match the operation")
            },
            OrderBookError::InstrumentMismatch => {
                write!(f, "instrument mismatch: order is for a different instrument")
            },
        }
    }
}

impl std::error::Error for OrderBookError {}

/// Result type alias for order book operations
pub type OrderBookResult<T> = Result<T, OrderBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            OrderBookError::SelfTrade.to_string(),
            "self-trade: submitter owns the crossing resting order"
        );
        assert_eq!(
            OrderBookError::SideMismatch.to_string(),
            "side mismatch: order side does not match the operation"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(OrderBookError::SelfTrade, OrderBookError::SelfTrade);
        assert_ne!(OrderBookError::SelfTrade, OrderBookError::InvalidPrice);
    }
}
