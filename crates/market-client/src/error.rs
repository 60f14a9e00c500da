use thiserror::Error;

/// Failures while talking to the Buda API. Every variant is an upstream
/// (infrastructure) failure from the caller's point of view, including a
/// price that does not parse.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to reach the Buda API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Error fetching markets: {0}")]
    MarketsStatus(u16),

    #[error("Error fetching exchange rate for {market}: {status}")]
    TickerStatus { market: String, status: u16 },

    #[error("Invalid price format for market {market}: {raw} from Buda API")]
    MalformedPrice { market: String, raw: String },

    #[error("Failed to deserialize the Buda API response: {0}")]
    Deserialization(String),
}
