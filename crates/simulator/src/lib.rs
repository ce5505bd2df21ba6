//! # Epoch Simulator
//!
//! Drives one randomized trade trajectory: a price random-walks by a fixed
//! step per trade, and every step triggers a buy or sell through the trade
//! engine. The randomness is injected, so a scripted side sequence can stand
//! in for the coin flips in tests.

use crate::error::SimulatorError;
use configuration::SimulationConfig;
use core_types::{Balances, PriceConvention, QuantityRule, Rounding, Side, TradeOutcome, rescale};
use engine::TradeEngine;
use rand::Rng;
use rust_decimal::Decimal;

pub mod error;

/// Runs single epochs of the configured strategy.
pub struct EpochSimulator {
    config: SimulationConfig,
    engine: TradeEngine,
    buy_qty: Decimal,
    sell_qty: Decimal,
}

impl EpochSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        let engine = TradeEngine::new(config.fee_rate, config.balance_scale);
        let (buy_qty, sell_qty) = match config.quantity_rule {
            QuantityRule::Fixed => (config.trade_qty, config.trade_qty),
            QuantityRule::FeeInflatedBuy => (
                rescale(
                    (Decimal::ONE + config.fee_rate) * config.trade_qty,
                    config.quantity_scale,
                    Rounding::Ceiling,
                ),
                config.trade_qty,
            ),
        };
        Self {
            config,
            engine,
            buy_qty,
            sell_qty,
        }
    }

    /// Runs one epoch of `trade_count` coin-flip trades drawn from `rng`.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<TradeOutcome, SimulatorError> {
        let count = self.config.trade_count;
        self.run_sides((0..count).map(|_| {
            if rng.gen_bool(0.5) {
                Side::Buy
            } else {
                Side::Sell
            }
        }))
    }

    /// Runs one epoch over an explicit side sequence. This is the replayable
    /// seam behind [`run`](Self::run); the literal-scenario tests use it
    /// directly.
    ///
    /// A price driven to zero or below by a step disables that step's trade
    /// but is neither reverted nor fatal: the out-of-range price persists as
    /// the next iteration's starting point, and the walk may bring it back
    /// into range later. This mirrors the reference strategy exactly.
    pub fn run_sides<I>(&self, sides: I) -> Result<TradeOutcome, SimulatorError>
    where
        I: IntoIterator<Item = Side>,
    {
        let scale = self.config.balance_scale;
        let mut price = self.config.initial_price;
        let mut balances = Balances::new(
            rescale(self.config.initial_base, scale, Rounding::HalfUp),
            rescale(self.config.initial_quote, scale, Rounding::HalfUp),
        );
        let mut buy_count = 0u32;
        let mut sell_count = 0u32;

        for side in sides {
            let step = match (side, self.config.price_convention) {
                (Side::Buy, PriceConvention::BuyUp) | (Side::Sell, PriceConvention::BuyDown) => {
                    self.config.step_size
                }
                (Side::Sell, PriceConvention::BuyUp) | (Side::Buy, PriceConvention::BuyDown) => {
                    -self.config.step_size
                }
            };
            match side {
                Side::Buy => buy_count += 1,
                Side::Sell => sell_count += 1,
            }
            price += step;
            if price <= Decimal::ZERO {
                continue;
            }
            let qty = match side {
                Side::Buy => self.buy_qty,
                Side::Sell => self.sell_qty,
            };
            balances = self.engine.trade(side, &balances, qty, price)?;
        }

        Ok(TradeOutcome {
            last_price: price,
            base_balance: balances.base,
            quote_balance: balances.quote,
            buy_count,
            sell_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    fn scenario_config() -> SimulationConfig {
        SimulationConfig {
            step_size: dec!(10),
            trade_qty: dec!(0.003),
            trade_count: 4,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn scripted_epoch_matches_hand_derivation() {
        // Four trades from (price 1800, base 0.065000, quote 117.000000)
        // with h = 10, fee = 0.001, qty = 0.003 under the BuyUp convention:
        //
        //   Buy  @ 1810: base 0.067997, quote 111.570000
        //   Sell @ 1800: base 0.064997, quote 116.964600
        //   Buy  @ 1810: base 0.067994, quote 111.534600
        //   Sell @ 1800: base 0.064994, quote 116.929200
        let simulator = EpochSimulator::new(scenario_config());
        let outcome = simulator
            .run_sides([Side::Buy, Side::Sell, Side::Buy, Side::Sell])
            .unwrap();

        assert_eq!(outcome.last_price, dec!(1800));
        assert_eq!(outcome.base_balance, dec!(0.064994));
        assert_eq!(outcome.quote_balance, dec!(116.929200));
        assert_eq!(outcome.buy_count, 2);
        assert_eq!(outcome.sell_count, 2);
    }

    #[test]
    fn non_positive_price_skips_the_trade_but_persists() {
        let config = SimulationConfig {
            initial_price: dec!(5),
            ..scenario_config()
        };
        let simulator = EpochSimulator::new(config);

        // A single sell drives the price to -5: no trade, balances untouched,
        // and the out-of-range price is the epoch's final price.
        let outcome = simulator.run_sides([Side::Sell]).unwrap();
        assert_eq!(outcome.last_price, dec!(-5));
        assert_eq!(outcome.base_balance, dec!(0.065000));
        assert_eq!(outcome.quote_balance, dec!(117.000000));

        // The next step starts from -5; a buy brings the price back to 5 and
        // trading resumes.
        let outcome = simulator.run_sides([Side::Sell, Side::Buy]).unwrap();
        assert_eq!(outcome.last_price, dec!(5));
        assert_ne!(outcome.base_balance, dec!(0.065000));
    }

    #[test]
    fn buy_down_convention_mirrors_the_walk() {
        let config = SimulationConfig {
            price_convention: PriceConvention::BuyDown,
            ..scenario_config()
        };
        let simulator = EpochSimulator::new(config);
        let outcome = simulator.run_sides([Side::Buy, Side::Buy]).unwrap();
        assert_eq!(outcome.last_price, dec!(1780));
    }

    #[test]
    fn fee_inflated_buy_quantity_rounds_up_at_quantity_scale() {
        let config = SimulationConfig {
            quantity_rule: QuantityRule::FeeInflatedBuy,
            ..scenario_config()
        };
        let simulator = EpochSimulator::new(config);

        // (1 + 0.001) * 0.003 = 0.003003, ceiling at 5 digits -> 0.00301.
        let outcome = simulator.run_sides([Side::Buy]).unwrap();
        assert_eq!(outcome.base_balance, dec!(0.065) + dec!(0.00301) * dec!(0.999));
        assert_eq!(outcome.quote_balance, dec!(117) - dec!(0.00301) * dec!(1810));
    }

    #[test]
    fn same_seed_replays_the_same_epoch() {
        let simulator = EpochSimulator::new(SimulationConfig {
            trade_count: 64,
            ..SimulationConfig::default()
        });
        let a = simulator.run(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = simulator.run(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.buy_count + a.sell_count, 64);
    }
}
