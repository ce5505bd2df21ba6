use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Holdings of the two sides of the traded pair.
///
/// Only the trade engine produces these; a trade returns a fresh pair rather
/// than mutating the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    pub base: Decimal,
    pub quote: Decimal,
}

impl Balances {
    pub fn new(base: Decimal, quote: Decimal) -> Self {
        Self { base, quote }
    }
}

/// The final state of one simulated epoch.
///
/// `buy_count` / `sell_count` are diagnostic only; the ranking of outcomes
/// never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub last_price: Decimal,
    pub base_balance: Decimal,
    pub quote_balance: Decimal,
    pub buy_count: u32,
    pub sell_count: u32,
}

/// The combined value of both holdings, expressed in each unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalBalance {
    pub in_base: Decimal,
    pub in_quote: Decimal,
}
