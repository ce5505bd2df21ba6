use analytics::AnalyticsEngine;
use configuration::SimulationConfig;
use core_types::{Rounding, TradeOutcome, rescale};
use ensemble::EnsembleRunner;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The main entry point for the gridsim Monte Carlo run.
///
/// Takes no arguments: every parameter is a compiled-in constant on
/// `SimulationConfig::default()`.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SimulationConfig::default();
    config.validate()?;
    info!(
        epochs = config.epoch_count,
        trades_per_epoch = config.trade_count,
        "configuration validated"
    );

    let analytics = AnalyticsEngine::new(config.balance_scale);

    // The starting state is reported through the same pipeline as the
    // simulated outcomes, with the balances set to the balance scale exactly
    // as each epoch starts from them.
    let initial = TradeOutcome {
        last_price: config.initial_price,
        base_balance: rescale(config.initial_base, config.balance_scale, Rounding::HalfUp),
        quote_balance: rescale(config.initial_quote, config.balance_scale, Rounding::HalfUp),
        buy_count: 0,
        sell_count: 0,
    };
    println!("{}", analytics.report("Initial", &initial)?);

    let started = Instant::now();
    let outcomes = EnsembleRunner::new(config).run()?;
    let elapsed = started.elapsed();

    if let Some(best) = analytics.best_square(&outcomes)? {
        println!("{}", analytics.report("Best square", best)?);
    }
    if let Some(worst) = analytics.worst_square(&outcomes)? {
        println!("{}", analytics.report("Worst square", worst)?);
    }

    println!("--------------------------------------------");
    println!("elapsed = {:.2?}", elapsed);
    println!("collected outcomes = {}", outcomes.len());
    if let Some(median) = analytics.median_square(&outcomes)? {
        println!("median square = {median}");
    }

    Ok(())
}
