//! # Trade Engine
//!
//! The pure core of the simulation: applies one grid trade to a balance pair
//! and self-corrects when the trade would deplete a balance.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** `trade` has no side effects and no hidden state; the
//!   same inputs always produce the same output pair.
//! - **Exact arithmetic:** products keep full decimal precision, and every
//!   division states its scale and rounding mode explicitly.

use crate::error::EngineError;
use core_types::{Balances, Rounding, Side, div_scaled};
use rust_decimal::Decimal;
use tracing::debug;

pub mod error;

/// Applies trades to balance pairs under a fixed fee rate and scale.
#[derive(Debug, Clone, Copy)]
pub struct TradeEngine {
    fee_rate: Decimal,
    balance_scale: u32,
}

impl TradeEngine {
    pub fn new(fee_rate: Decimal, balance_scale: u32) -> Self {
        Self {
            fee_rate,
            balance_scale,
        }
    }

    pub fn fee_rate(&self) -> Decimal {
        self.fee_rate
    }

    /// Executes one trade of `qty` base asset at `price` against `balances`
    /// and returns the resulting pair.
    ///
    /// The fee is deducted from the received side: a buy receives
    /// `qty * (1 - fee)` base, a sell receives `qty * price * (1 - fee)`
    /// quote.
    ///
    /// If the primary trade would leave a balance non-positive, the engine
    /// rebalances by recursing once with a trade in the opposite direction
    /// sized from half of the still-positive balance:
    ///
    /// - depleted base: buy `floor(half_up(quote / 2) / price)` base,
    /// - depleted quote: sell `floor(base / 2)` base,
    ///
    /// and returns the recursive call's result as-is. At most one branch can
    /// fire per call since a single trade only drains one side.
    ///
    /// Precondition (not defended at runtime; the configuration layer
    /// validates it at startup): both starting balances and `price` are
    /// strictly positive.
    /// Under that precondition the rebalance quantity is strictly smaller
    /// than the depleting trade and the recursion terminates after one extra
    /// call.
    pub fn trade(
        &self,
        side: Side,
        balances: &Balances,
        qty: Decimal,
        price: Decimal,
    ) -> Result<Balances, EngineError> {
        let fee_factor = Decimal::ONE - self.fee_rate;
        let result = match side {
            Side::Buy => Balances::new(
                balances.base + qty * fee_factor,
                balances.quote - qty * price,
            ),
            Side::Sell => Balances::new(
                balances.base - qty,
                balances.quote + qty * price * fee_factor,
            ),
        };

        if result.base <= Decimal::ZERO {
            let half_quote = div_scaled(
                balances.quote,
                Decimal::TWO,
                self.balance_scale,
                Rounding::HalfUp,
            )?;
            let rebalance_qty = div_scaled(half_quote, price, self.balance_scale, Rounding::Floor)?;
            debug!(%price, qty = %rebalance_qty, "base balance depleted, rebalancing with half quote");
            return self.trade(Side::Buy, balances, rebalance_qty, price);
        }
        if result.quote <= Decimal::ZERO {
            let half_base = div_scaled(
                balances.base,
                Decimal::TWO,
                self.balance_scale,
                Rounding::Floor,
            )?;
            debug!(%price, qty = %half_base, "quote balance depleted, rebalancing with half base");
            return self.trade(Side::Sell, balances, half_base, price);
        }
        Ok(result)
    }
}
