//! # Portfolio Valuation Engine
//!
//! A pure aggregation layer: given a portfolio of coin holdings and a target
//! fiat currency, it prices every holding through a `MarketApi` and returns
//! the weighted total. It holds no state and performs no I/O of its own.

use market_client::MarketApi;
use std::collections::BTreeMap;

// Declare the modules that make up this crate.
pub mod error;

// Re-export the core types to provide a clean public API.
pub use error::ValuationError;

/// A caller-supplied set of holdings, coin symbol to amount. The map's
/// natural order is the order coins are priced in.
pub type Portfolio = BTreeMap<String, f64>;

/// Derives the upstream market identifier for a coin priced in `fiat`.
pub fn market_id(coin: &str, fiat: &str) -> String {
    format!("{coin}-{fiat}")
}

/// Calculates the total value of `portfolio` in `fiat_currency`.
///
/// The market catalog is fetched once and reused for every coin. The first
/// coin whose market is missing fails the whole valuation; no partial totals
/// are ever returned.
pub async fn value_portfolio(
    markets: &dyn MarketApi,
    portfolio: &Portfolio,
    fiat_currency: &str,
) -> Result<f64, ValuationError> {
    let catalog = markets.list_markets().await?;
    let mut total_value = 0.0;

    for (coin, amount) in portfolio {
        let market = market_id(coin, fiat_currency);
        if !catalog.contains(&market) {
            tracing::warn!("Market {} is not available.", market);
            return Err(ValuationError::MarketUnavailable(market));
        }

        let coin_rate = markets.last_price(&market).await?;
        total_value += amount * coin_rate;
        tracing::debug!(
            "Value of {} {} in {}: {}",
            amount,
            coin,
            fiat_currency,
            amount * coin_rate
        );
    }

    tracing::info!("Total portfolio value in {}: {}", fiat_currency, total_value);
    Ok(total_value)
}
