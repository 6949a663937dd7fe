// ============================================================================
// Order Book Factory
// Creates matching engines with proper configuration
// ============================================================================

use crate::domain::OrderBookConfig;
use crate::engine::MatchingEngine;
use rust_decimal::Decimal;

/// Creates a matching engine from configuration, validating it first.
///
/// # Example
/// ```
/// use priority_orderbook::prelude::*;
/// use priority_orderbook::engine::factory::create_from_config;
///
/// let config = OrderBookConfig::new("ABC");
/// let engine = create_from_config(config).unwrap();
/// assert_eq!(engine.instrument(), "ABC");
/// ```
pub fn create_from_config(config: OrderBookConfig) -> Result<MatchingEngine, String> {
    config.validate()?;
    Ok(MatchingEngine::with_config(config))
}

/// Builder for creating matching engines with a fluent API.
///
/// One engine serves one instrument; build one engine per instrument served.
///
/// # Example
/// ```
/// use priority_orderbook::prelude::*;
/// use rust_decimal::Decimal;
///
/// let engine = MatchingEngineBuilder::new("ABC")
///     .with_tick_size(Decimal::new(1, 2))
///     .with_lot_size(100)
///     .build()
///     .unwrap();
/// ```
pub struct MatchingEngineBuilder {
    config: OrderBookConfig,
}

impl MatchingEngineBuilder {
    /// Create a new builder for the specified instrument
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            config: OrderBookConfig::new(instrument),
        }
    }

    /// Set price tick size
    pub fn with_tick_size(mut self, tick_size: Decimal) -> Self {
        self.config = self.config.with_tick_size(tick_size);
        self
    }

    /// Set lot size
    pub fn with_lot_size(mut self, lot_size: u64) -> Self {
        self.config = self.config.with_lot_size(lot_size);
        self
    }

    /// Build the matching engine
    pub fn build(self) -> Result<MatchingEngine, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn config(&self) -> &OrderBookConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_config() {
        let engine = create_from_config(OrderBookConfig::new("ABC")).unwrap();
        assert_eq!(engine.instrument(), "ABC");
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        assert!(create_from_config(OrderBookConfig::new("")).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = MatchingEngineBuilder::new("ABC")
            .with_tick_size(Decimal::new(1, 2))
            .with_lot_size(10);

        assert_eq!(builder.config().lot_size, Some(10));

        let engine = builder.build().unwrap();
        assert_eq!(engine.instrument(), "ABC");
    }

    #[test]
    fn test_builder_rejects_bad_tick() {
        let result = MatchingEngineBuilder::new("ABC")
            .with_tick_size(Decimal::ZERO)
            .build();
        assert!(result.is_err());
    }
}
