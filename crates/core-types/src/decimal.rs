//! Fixed-point decimal helpers with explicit scale and rounding mode.
//!
//! All monetary values in the workspace are `rust_decimal::Decimal`, which
//! gives exact base-10 arithmetic; binary floats are never used for balances
//! or prices because the strategy's profitability depends on the exact
//! accumulation of fee residues. Addition, subtraction and multiplication use
//! `Decimal`'s native exact operators and keep full precision until a rescale
//! is requested. Division is the one operation that can produce a
//! non-terminating quotient, so it is only available through [`div_scaled`],
//! which forces every call site to state its scale and rounding mode.

use crate::error::CoreError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding mode for [`rescale`] and [`div_scaled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round half away from zero (BigDecimal's HALF_UP).
    HalfUp,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::Floor => RoundingStrategy::ToNegativeInfinity,
            Rounding::Ceiling => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

/// Sets `value` to exactly `scale` fractional digits using `rounding`.
///
/// Rounding only fires when the value carries more fractional digits than
/// `scale`; a shorter value is padded with zeros.
pub fn rescale(value: Decimal, scale: u32, rounding: Rounding) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, rounding.strategy());
    rounded.rescale(scale);
    rounded
}

/// Divides `num` by `den` and rounds the quotient to `scale` fractional
/// digits using `rounding`. A zero divisor is a typed error, never a panic.
pub fn div_scaled(
    num: Decimal,
    den: Decimal,
    scale: u32,
    rounding: Rounding,
) -> Result<Decimal, CoreError> {
    let quotient = num
        .checked_div(den)
        .ok_or_else(|| CoreError::DivisionByZero(format!("{num} / {den}")))?;
    Ok(rescale(quotient, scale, rounding))
}
