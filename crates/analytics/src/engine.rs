use crate::error::AnalyticsError;
use crate::report::OutcomeReport;
use core_types::{Rounding, TotalBalance, TradeOutcome, div_scaled};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// A stateless calculator for ranking and summarizing epoch outcomes.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine {
    balance_scale: u32,
}

impl AnalyticsEngine {
    pub fn new(balance_scale: u32) -> Self {
        Self { balance_scale }
    }

    /// Expresses an outcome's combined holdings in each unit:
    /// `in_quote = base * price + quote` and
    /// `in_base = quote / price + base`, with the division rounded half-up
    /// at the balance scale.
    ///
    /// An epoch can legitimately end with a non-positive price (the price
    /// walk is not reverted when it leaves range), in which case the division
    /// is by a negative value or a typed zero-divisor error, never a panic.
    pub fn total_balance(&self, outcome: &TradeOutcome) -> Result<TotalBalance, AnalyticsError> {
        let in_quote = outcome.base_balance * outcome.last_price + outcome.quote_balance;
        let in_base = div_scaled(
            outcome.quote_balance,
            outcome.last_price,
            self.balance_scale,
            Rounding::HalfUp,
        )? + outcome.base_balance;
        Ok(TotalBalance { in_base, in_quote })
    }

    /// The ranking key: the product of the two total-balance figures.
    ///
    /// Dimensionally unusual (the units differ), but it is the strategy's
    /// reference ranking, not a financial statement; it is kept exact as a
    /// `Decimal`.
    pub fn square(&self, outcome: &TradeOutcome) -> Result<Decimal, AnalyticsError> {
        let total = self.total_balance(outcome)?;
        Ok(total.in_base * total.in_quote)
    }

    /// The outcome with the strictly greatest square. First-seen wins ties.
    pub fn best_square<'a>(
        &self,
        outcomes: &'a [TradeOutcome],
    ) -> Result<Option<&'a TradeOutcome>, AnalyticsError> {
        self.select(outcomes, |candidate, incumbent| candidate > incumbent)
    }

    /// The outcome with the strictly smallest square. First-seen wins ties.
    pub fn worst_square<'a>(
        &self,
        outcomes: &'a [TradeOutcome],
    ) -> Result<Option<&'a TradeOutcome>, AnalyticsError> {
        self.select(outcomes, |candidate, incumbent| candidate < incumbent)
    }

    fn select<'a, F>(
        &self,
        outcomes: &'a [TradeOutcome],
        replaces: F,
    ) -> Result<Option<&'a TradeOutcome>, AnalyticsError>
    where
        F: Fn(Decimal, Decimal) -> bool,
    {
        let mut selected: Option<(&TradeOutcome, Decimal)> = None;
        for outcome in outcomes {
            let square = self.square(outcome)?;
            match selected {
                Some((_, incumbent)) if !replaces(square, incumbent) => {}
                _ => selected = Some((outcome, square)),
            }
        }
        Ok(selected.map(|(outcome, _)| outcome))
    }

    /// The statistical median of the square over all outcomes, computed on
    /// `f64` approximations (a reporting step; the precision loss here is
    /// deliberate, unlike in the balance arithmetic).
    pub fn median_square(
        &self,
        outcomes: &[TradeOutcome],
    ) -> Result<Option<f64>, AnalyticsError> {
        if outcomes.is_empty() {
            return Ok(None);
        }
        let mut squares = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            let square = self.square(outcome)?;
            let approx = square.to_f64().ok_or_else(|| {
                AnalyticsError::InternalError(format!("square {square} is not representable as f64"))
            })?;
            squares.push(approx);
        }
        Ok(median_of(squares))
    }

    /// Builds the printable summary for one labeled outcome.
    pub fn report(
        &self,
        label: &str,
        outcome: &TradeOutcome,
    ) -> Result<OutcomeReport, AnalyticsError> {
        let total = self.total_balance(outcome)?;
        Ok(OutcomeReport {
            label: label.to_string(),
            outcome: *outcome,
            total,
            square: total.in_base * total.in_quote,
        })
    }
}

/// Median of an unordered sample; even counts average the two middle values.
fn median_of(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn outcome(price: Decimal, base: Decimal, quote: Decimal) -> TradeOutcome {
        TradeOutcome {
            last_price: price,
            base_balance: base,
            quote_balance: quote,
            buy_count: 0,
            sell_count: 0,
        }
    }

    #[test]
    fn total_balance_round_trip() {
        let engine = AnalyticsEngine::new(6);
        let total = engine
            .total_balance(&outcome(dec!(1800), dec!(1), dec!(1800)))
            .unwrap();
        assert_eq!(total.in_quote, dec!(3600.000000));
        assert_eq!(total.in_base, dec!(2.000000));
    }

    #[test]
    fn best_and_worst_pick_the_extremes() {
        let engine = AnalyticsEngine::new(6);
        // Squares: (1*10 + 10) * (10/10 + 1) = 40 and (2*10 + 10) * (10/10 + 2) = 90.
        let low = outcome(dec!(10), dec!(1), dec!(10));
        let high = outcome(dec!(10), dec!(2), dec!(10));
        let outcomes = [low, high];

        assert_eq!(engine.best_square(&outcomes).unwrap(), Some(&outcomes[1]));
        assert_eq!(engine.worst_square(&outcomes).unwrap(), Some(&outcomes[0]));
    }

    #[test]
    fn ties_keep_the_first_seen_outcome() {
        let engine = AnalyticsEngine::new(6);
        let first = outcome(dec!(10), dec!(1), dec!(10));
        let mut second = first;
        second.buy_count = 99; // same square, distinguishable otherwise
        let outcomes = [first, second];

        let best = engine.best_square(&outcomes).unwrap().unwrap();
        let worst = engine.worst_square(&outcomes).unwrap().unwrap();
        assert_eq!(best.buy_count, 0);
        assert_eq!(worst.buy_count, 0);
    }

    #[test]
    fn median_averages_the_middle_pair_on_even_counts() {
        assert_eq!(median_of(vec![1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median_of(vec![3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median_of(vec![]), None);
    }

    #[test]
    fn median_square_goes_through_the_metric() {
        let engine = AnalyticsEngine::new(6);
        // With price 1 and base 0 the square is quote^2: 1, 4, 9, 16.
        let outcomes: Vec<_> = [dec!(1), dec!(2), dec!(3), dec!(4)]
            .map(|q| outcome(dec!(1), dec!(0), q))
            .into_iter()
            .collect();
        assert_eq!(engine.median_square(&outcomes).unwrap(), Some(6.5));
        assert_eq!(engine.median_square(&[]).unwrap(), None);
    }

    #[test]
    fn empty_ensemble_has_no_extremes() {
        let engine = AnalyticsEngine::new(6);
        assert_eq!(engine.best_square(&[]).unwrap(), None);
    }
}
