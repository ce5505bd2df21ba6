//! # Analytics Engine
//!
//! Ranks and summarizes the outcomes of an ensemble run. It acts as the
//! "unbiased judge" of the simulation.
//!
//! ## Architectural Principles
//!
//! - **Stateless Calculation:** the `AnalyticsEngine` is a stateless
//!   calculator over a slice of `TradeOutcome`s. This makes it highly
//!   reliable and easy to test.
//! - **Exact where it matters:** total balances and the ranking metric are
//!   exact decimals; only the median computation drops to `f64`, which is a
//!   reporting step where precision loss is acceptable.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the calculation logic.
//! - `OutcomeReport`: a printable summary of one labeled outcome.
//! - `AnalyticsError`: the specific error types returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::OutcomeReport;
