use crate::error::ConfigError;
use core_types::{PriceConvention, QuantityRule};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// All parameters of a simulation run.
///
/// There is deliberately no configuration file behind this struct: the
/// process takes no arguments and every field is a compiled-in constant,
/// exposed here as named fields so runs are reproducible and tests can build
/// variants of it.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Proportional fee charged on the received side of every trade.
    /// 0.001 corresponds to 0.1%.
    pub fee_rate: Decimal,
    /// Price step h applied on every trade.
    pub step_size: Decimal,
    /// Starting price of each epoch.
    pub initial_price: Decimal,
    /// Starting base-asset holding of each epoch.
    pub initial_base: Decimal,
    /// Starting quote-asset holding of each epoch.
    pub initial_quote: Decimal,
    /// Quantity of base asset moved by one trade step.
    pub trade_qty: Decimal,
    /// Number of trade steps per epoch.
    pub trade_count: u32,
    /// Number of independent epochs in the ensemble.
    pub epoch_count: u32,
    /// Fractional digits carried by balances and prices after a scaled step.
    pub balance_scale: u32,
    /// Fractional digits carried by derived trade quantities.
    pub quantity_scale: u32,
    /// Which way the price steps on each side.
    pub price_convention: PriceConvention,
    /// How the per-side trade quantity is derived from `trade_qty`.
    pub quantity_rule: QuantityRule,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fee_rate: dec!(0.001),
            step_size: dec!(5),
            initial_price: dec!(1800),
            initial_base: dec!(0.065),
            initial_quote: dec!(117),
            trade_qty: dec!(0.00304),
            trade_count: 1000,
            epoch_count: 1000,
            balance_scale: 6,
            quantity_scale: 5,
            price_convention: PriceConvention::BuyUp,
            quantity_rule: QuantityRule::Fixed,
        }
    }
}

impl SimulationConfig {
    /// Checks the preconditions the trade engine relies on but does not
    /// defend against at runtime: strictly positive starting balances, price,
    /// step and quantity, and a fee rate below 100%.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&str, Decimal); 5] = [
            ("initial_price", self.initial_price),
            ("initial_base", self.initial_base),
            ("initial_quote", self.initial_quote),
            ("trade_qty", self.trade_qty),
            ("step_size", self.step_size),
        ];
        for (name, value) in positive {
            if value <= Decimal::ZERO {
                return Err(ConfigError::InvalidParameter(
                    name.to_string(),
                    format!("must be strictly positive, got {value}"),
                ));
            }
        }
        if self.fee_rate < Decimal::ZERO || self.fee_rate >= Decimal::ONE {
            return Err(ConfigError::InvalidParameter(
                "fee_rate".to_string(),
                format!("must be in [0, 1), got {}", self.fee_rate),
            ));
        }
        if self.trade_count == 0 || self.epoch_count == 0 {
            return Err(ConfigError::InvalidParameter(
                "trade_count/epoch_count".to_string(),
                "must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
