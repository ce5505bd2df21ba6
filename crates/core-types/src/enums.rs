use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side of the trade
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Direction convention for the per-trade price step.
///
/// Both conventions appear as valid strategy variants: the original grid
/// strategy walks the price up on a buy, its mirror walks it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceConvention {
    /// Price moves +h on Buy, -h on Sell.
    BuyUp,
    /// Price moves -h on Buy, +h on Sell.
    BuyDown,
}

/// Per-side rule for deriving the quantity of a single trade step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityRule {
    /// Both sides trade the configured base quantity.
    Fixed,
    /// Buys use `(1 + fee) * qty` rounded up (Ceiling) at the quantity scale,
    /// so the post-fee fill still covers the configured quantity. Sells use
    /// the base quantity unmodified.
    FeeInflatedBuy,
}
