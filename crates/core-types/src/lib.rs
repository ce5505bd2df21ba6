pub mod decimal;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use decimal::{Rounding, div_scaled, rescale};
pub use enums::{PriceConvention, QuantityRule, Side};
pub use error::CoreError;
pub use structs::{Balances, TotalBalance, TradeOutcome};
