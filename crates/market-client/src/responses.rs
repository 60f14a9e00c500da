use serde::Deserialize;

/// The response from `GET /markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsResponse {
    pub markets: Vec<MarketEntry>,
}

/// A single catalog entry. Buda reports many more fields per market; only
/// the identifier matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketEntry {
    pub id: String,
}

/// The response from `GET /markets/{id}/ticker`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    pub ticker: Ticker,
}

/// The ticker as Buda reports it. `last_price` is a string pair of
/// `[amount, currency]`; element 0 carries the price.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub last_price: Vec<String>,
}
