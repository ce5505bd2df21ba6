use core_types::{TotalBalance, TradeOutcome};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A printable summary of one labeled outcome.
///
/// The exact text layout is not a compatibility surface; only the reported
/// numeric values and their derivation are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub label: String,
    pub outcome: TradeOutcome,
    pub total: TotalBalance,
    pub square: Decimal,
}

impl fmt::Display for OutcomeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--------------------------------------------")?;
        writeln!(f, "{}", self.label)?;
        writeln!(
            f,
            "last_price = {}, base_balance = {}, quote_balance = {}",
            self.outcome.last_price, self.outcome.base_balance, self.outcome.quote_balance
        )?;
        writeln!(
            f,
            "total_balance_in_base = {}, total_balance_in_quote = {}",
            self.total.in_base, self.total.in_quote
        )?;
        write!(f, "square = {}", self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalyticsEngine;
    use rust_decimal_macros::dec;

    #[test]
    fn report_carries_all_reported_figures() {
        let outcome = TradeOutcome {
            last_price: dec!(1800),
            base_balance: dec!(1.000000),
            quote_balance: dec!(1800.000000),
            buy_count: 3,
            sell_count: 1,
        };
        let report = AnalyticsEngine::new(6).report("Initial", &outcome).unwrap();
        assert_eq!(report.square, dec!(7200.000000));

        let text = report.to_string();
        assert!(text.contains("Initial"));
        assert!(text.contains("total_balance_in_quote = 3600.000000"));
        assert!(text.contains("square = 7200"));
    }
}
